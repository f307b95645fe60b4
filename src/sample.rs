//! Sample data model for wafer measurements.

use crate::error::WaferMapResult;
use crate::validation::validate_sample_arrays;

/// One scalar measurement at a 2D wafer coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64, value: f64) -> Self {
        Self { x, y, value }
    }

    /// Zip three parallel coordinate/value slices into samples.
    ///
    /// The slices must have equal, non-zero length.
    pub fn from_arrays(x: &[f64], y: &[f64], v: &[f64]) -> WaferMapResult<Vec<Sample>> {
        validate_sample_arrays(x, y, v, "Sample::from_arrays")?;
        Ok(x.iter()
            .zip(y)
            .zip(v)
            .map(|((&x, &y), &value)| Sample { x, y, value })
            .collect())
    }

    /// Euclidean distance from this sample to a point.
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        (self.x - x).hypot(self.y - y)
    }

    /// Overlay annotation text: the value rendered to 2 decimal places.
    pub fn label(&self) -> String {
        format!("{:.2}", self.value)
    }
}
