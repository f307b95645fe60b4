//! Top-level wafer map operations.
//!
//! One invocation runs end-to-end with no retained state: validate, extend
//! the samples to the boundary circle, fit and evaluate the interpolant,
//! and (for [`draw_map`]) hand the result to the renderer. Invocations are
//! independent; callers may parallelize across maps.

use std::path::PathBuf;

use crate::boundary;
use crate::error::WaferMapResult;
use crate::grid::{Field, Grid, DEFAULT_RESOLUTION};
use crate::interpolate::{self, RbfKernel};
use crate::render::{ClipCircle, DisplayRange, RenderRequest, Renderer};
use crate::sample::Sample;
use crate::validation::{validate_sample_arrays, validate_wafer_size};

/// Options for [`compute_field_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOptions {
    /// Grid resolution as (width, height).
    pub resolution: (usize, usize),
    /// Interpolation kernel.
    pub kernel: RbfKernel,
}

impl Default for FieldOptions {
    fn default() -> Self {
        FieldOptions {
            resolution: DEFAULT_RESOLUTION,
            kernel: RbfKernel::ThinPlateSpline,
        }
    }
}

/// Compute the interpolated wafer field at the default 100x100 resolution.
///
/// `x`, `y`, `v` are parallel sequences of sample coordinates and values;
/// `wafer_size` is the wafer diameter. The returned grid spans the bounding
/// box of the boundary-extended sample set, and the field holds one finite
/// value per grid point for non-degenerate input.
pub fn compute_field(
    x: &[f64],
    y: &[f64],
    v: &[f64],
    wafer_size: f64,
) -> WaferMapResult<(Grid, Field)> {
    compute_field_with_options(x, y, v, wafer_size, FieldOptions::default())
}

/// [`compute_field`] with explicit resolution and kernel.
pub fn compute_field_with_options(
    x: &[f64],
    y: &[f64],
    v: &[f64],
    wafer_size: f64,
    options: FieldOptions,
) -> WaferMapResult<(Grid, Field)> {
    validate_sample_arrays(x, y, v, "compute_field")?;
    validate_wafer_size(wafer_size, "compute_field")?;

    let samples = Sample::from_arrays(x, y, v)?;
    let extended = boundary::extend(&samples, wafer_size)?;
    interpolate::interpolate_with_kernel(&extended, options.resolution, options.kernel)
}

/// Options for [`draw_map`].
#[derive(Debug, Clone)]
pub struct MapOptions {
    /// Grid resolution as (width, height).
    pub resolution: (usize, usize),
    /// Display range override; defaults to the extended values' min/max.
    pub range: Option<DisplayRange>,
    /// Output destination handed to the renderer.
    pub destination: PathBuf,
}

impl MapOptions {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        MapOptions {
            resolution: DEFAULT_RESOLUTION,
            range: None,
            destination: destination.into(),
        }
    }
}

/// Compute the wafer field and hand it to `renderer` for presentation.
///
/// The renderer receives the grid extent, the field, the original samples
/// for the marker/label overlay, the wafer clip circle, the display range,
/// and the destination. Renderer failures propagate unmodified as
/// [`crate::WaferMapError::Render`].
pub fn draw_map<R: Renderer>(
    renderer: &mut R,
    x: &[f64],
    y: &[f64],
    v: &[f64],
    wafer_size: f64,
    options: &MapOptions,
) -> WaferMapResult<()> {
    validate_sample_arrays(x, y, v, "draw_map")?;
    validate_wafer_size(wafer_size, "draw_map")?;

    let samples = Sample::from_arrays(x, y, v)?;
    let extended = boundary::extend(&samples, wafer_size)?;
    let (grid, field) = interpolate::interpolate(&extended, options.resolution)?;

    let range = match options.range {
        Some(range) => range,
        None => DisplayRange::covering(extended.iter().map(|s| s.value)),
    };
    let request = RenderRequest {
        extent: grid.extent(),
        field: &field,
        samples: &samples,
        clip: ClipCircle::for_wafer(wafer_size),
        range,
        destination: &options.destination,
    };
    renderer.render(&request)?;
    Ok(())
}
