//! Scattered-data interpolation for wafer map fields.
//!
//! Fits a smooth radial basis interpolant through the extended sample set
//! and evaluates it on a regular grid spanning the set's bounding box,
//! producing the dense field the renderer draws.

mod rbf;

pub use rbf::{RbfKernel, RbfModel};

use nalgebra::DMatrix;

use crate::error::WaferMapResult;
use crate::grid::{Extent, Field, Grid};
use crate::sample::Sample;
use crate::validation::{validate_resolution, validate_samples_non_empty};

/// Interpolate `extended` onto a regular grid with the thin-plate kernel.
///
/// The grid spans `[x_min, x_max] x [y_min, y_max]` of the extended sample
/// coordinates, each axis ranged independently. Returns the grid together
/// with a field of exactly `resolution.1 x resolution.0` values.
pub fn interpolate(
    extended: &[Sample],
    resolution: (usize, usize),
) -> WaferMapResult<(Grid, Field)> {
    interpolate_with_kernel(extended, resolution, RbfKernel::ThinPlateSpline)
}

/// [`interpolate`] with an explicit kernel choice.
pub fn interpolate_with_kernel(
    extended: &[Sample],
    resolution: (usize, usize),
    kernel: RbfKernel,
) -> WaferMapResult<(Grid, Field)> {
    validate_samples_non_empty(extended, "interpolate")?;
    validate_resolution(resolution, "interpolate")?;

    let model = RbfModel::fit(extended, kernel)?;
    let grid = Grid::over(Extent::of(extended), resolution);

    let (width, height) = grid.resolution();
    let mut data = DMatrix::<f64>::zeros(height, width);
    for (j, &y) in grid.y().iter().enumerate() {
        for (i, &x) in grid.x().iter().enumerate() {
            data[(j, i)] = model.evaluate(x, y);
        }
    }

    Ok((grid, Field::new(data)))
}
