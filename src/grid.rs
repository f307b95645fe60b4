//! Evaluation grid and dense field containers.

use nalgebra::DMatrix;

use crate::sample::Sample;

/// Default evaluation resolution (width, height).
pub const DEFAULT_RESOLUTION: (usize, usize) = (100, 100);

/// Per-axis bounding box of a sample set.
///
/// The x and y ranges are computed independently; the sample cloud need not
/// be square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Extent {
    /// Bounding box over the coordinates of a non-empty sample set.
    pub fn of(samples: &[Sample]) -> Self {
        let mut extent = Extent {
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
        };
        for sample in samples {
            extent.x_min = extent.x_min.min(sample.x);
            extent.x_max = extent.x_max.max(sample.x);
            extent.y_min = extent.y_min.min(sample.y);
            extent.y_max = extent.y_max.max(sample.y);
        }
        extent
    }
}

/// A regular lattice of evaluation coordinates spanning an [`Extent`].
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Grid {
    /// Linearly spaced axes over `extent` at `resolution` = (width, height).
    ///
    /// Both axes must have at least one point; callers validate upstream.
    pub(crate) fn over(extent: Extent, resolution: (usize, usize)) -> Self {
        Grid {
            x: linspace(extent.x_min, extent.x_max, resolution.0),
            y: linspace(extent.y_min, extent.y_max, resolution.1),
        }
    }

    /// Evaluation coordinates along the x axis.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Evaluation coordinates along the y axis.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// (width, height) of the lattice.
    pub fn resolution(&self) -> (usize, usize) {
        (self.x.len(), self.y.len())
    }

    /// The bounding box the axes span.
    pub fn extent(&self) -> Extent {
        Extent {
            x_min: self.x[0],
            x_max: self.x[self.x.len() - 1],
            y_min: self.y[0],
            y_max: self.y[self.y.len() - 1],
        }
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// Dense interpolated field over a [`Grid`].
///
/// Row `j` holds the values at `grid.y()[j]`, column `i` at `grid.x()[i]`,
/// so the matrix reads with the y axis increasing upward ("origin lower").
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    data: DMatrix<f64>,
}

impl Field {
    pub(crate) fn new(data: DMatrix<f64>) -> Self {
        Field { data }
    }

    /// (rows, cols) = (height, width).
    pub fn shape(&self) -> (usize, usize) {
        (self.data.nrows(), self.data.ncols())
    }

    /// Value at `(row, col)`; row indexes the y axis, col the x axis.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[(row, col)]
    }

    /// The underlying matrix, for renderers and downstream consumers.
    pub fn data(&self) -> &DMatrix<f64> {
        &self.data
    }

    /// Smallest field value.
    pub fn min(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest field value.
    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// True when every entry is finite (no NaN or infinities).
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}
