//! Validation helpers for the pipeline operations.
//!
//! Every precondition is checked eagerly at operation entry; each helper
//! takes the operation name so the error points at the offending call site.

use crate::error::{WaferMapError, WaferMapResult};
use crate::sample::Sample;

/// Validate that the three parallel input slices have equal, non-zero length.
pub(crate) fn validate_sample_arrays(
    x: &[f64],
    y: &[f64],
    v: &[f64],
    op: &'static str,
) -> WaferMapResult<()> {
    if x.len() != y.len() || x.len() != v.len() {
        return Err(WaferMapError::InvalidInput {
            parameter: "x/y/v",
            message: format!(
                "{op} requires equal-length sequences: x has {}, y has {}, v has {}",
                x.len(),
                y.len(),
                v.len()
            ),
        });
    }
    if x.is_empty() {
        return Err(WaferMapError::InvalidInput {
            parameter: "x/y/v",
            message: format!("{op} requires at least one sample"),
        });
    }
    Ok(())
}

/// Validate that a sample set is non-empty.
pub(crate) fn validate_samples_non_empty(
    samples: &[Sample],
    op: &'static str,
) -> WaferMapResult<()> {
    if samples.is_empty() {
        return Err(WaferMapError::InvalidInput {
            parameter: "samples",
            message: format!("{op} requires at least one sample"),
        });
    }
    Ok(())
}

/// Validate that the wafer size is finite and positive.
pub(crate) fn validate_wafer_size(wafer_size: f64, op: &'static str) -> WaferMapResult<()> {
    if !wafer_size.is_finite() || wafer_size <= 0.0 {
        return Err(WaferMapError::InvalidInput {
            parameter: "wafer_size",
            message: format!("{op} requires a positive wafer size, got {wafer_size}"),
        });
    }
    Ok(())
}

/// Validate that both resolution axes have at least one point.
pub(crate) fn validate_resolution(
    resolution: (usize, usize),
    op: &'static str,
) -> WaferMapResult<()> {
    if resolution.0 == 0 || resolution.1 == 0 {
        return Err(WaferMapError::InvalidInput {
            parameter: "resolution",
            message: format!(
                "{op} requires at least 1 point per axis, got {}x{}",
                resolution.0, resolution.1
            ),
        });
    }
    Ok(())
}
