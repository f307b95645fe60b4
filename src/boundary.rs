//! Boundary extension for wafer map interpolation.
//!
//! A scattered-data fit has no anchor at the wafer perimeter, so the field
//! would extrapolate freely there. This module synthesizes one sample at
//! each of four fixed reference points on the boundary circle, valued from
//! the nearest existing measurements, before the fit runs.

use crate::error::WaferMapResult;
use crate::sample::Sample;
use crate::validation::{validate_samples_non_empty, validate_wafer_size};

/// The four fixed reference points on the boundary circle of a wafer of the
/// given diameter: top, bottom, right, left.
pub fn reference_points(wafer_size: f64) -> [(f64, f64); 4] {
    let r = wafer_size / 2.0;
    [(0.0, r), (0.0, -r), (r, 0.0), (-r, 0.0)]
}

/// Extend `samples` with one synthesized sample per reference point.
///
/// The synthesized value is the arithmetic mean over the subset of samples
/// at minimum distance from the reference point, ties included. Averaging
/// the full tie set keeps the boundary symmetric when the sample layout is
/// symmetric about an axis; distances compare with exact equality, so
/// near-ties within floating-point epsilon stay excluded.
///
/// Returns `samples` followed by the four synthesized samples, so the output
/// length is always `samples.len() + 4`.
pub fn extend(samples: &[Sample], wafer_size: f64) -> WaferMapResult<Vec<Sample>> {
    validate_samples_non_empty(samples, "boundary::extend")?;
    validate_wafer_size(wafer_size, "boundary::extend")?;

    let mut extended = samples.to_vec();
    for (bx, by) in reference_points(wafer_size) {
        // Replace the tie set on strict improvement, append on exact tie.
        let mut min_dist = samples[0].distance_to(bx, by);
        let mut nearest = vec![0usize];
        for (i, sample) in samples.iter().enumerate().skip(1) {
            let d = sample.distance_to(bx, by);
            if d < min_dist {
                min_dist = d;
                nearest.clear();
                nearest.push(i);
            } else if d == min_dist {
                nearest.push(i);
            }
        }
        let value =
            nearest.iter().map(|&i| samples[i].value).sum::<f64>() / nearest.len() as f64;
        extended.push(Sample::new(bx, by, value));
    }
    Ok(extended)
}
