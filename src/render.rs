//! Renderer interface for wafer map presentation.
//!
//! The numeric core stays free of graphics and filesystem dependencies: one
//! [`RenderRequest`] carries everything a concrete backend needs to draw the
//! color map, overlay the raw samples with their labels, clip to the wafer
//! circle, attach a legend, and persist the image. Palette, marker style,
//! and image format are the backend's own configuration.

use std::fmt;
use std::path::Path;

use crate::grid::{Extent, Field};
use crate::sample::Sample;

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Failures of the external renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Display bounds with `vmin > vmax` or non-finite values.
    InvalidRange { vmin: f64, vmax: f64 },

    /// The output destination could not be written.
    Destination { path: String, message: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { vmin, vmax } => {
                write!(f, "Invalid display range: vmin {} > vmax {}", vmin, vmax)
            }
            Self::Destination { path, message } => {
                write!(f, "Cannot write output '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// The circular mask restricting the visually valid region.
///
/// Presentation geometry only; it never alters the computed field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipCircle {
    pub center: (f64, f64),
    pub radius: f64,
}

impl ClipCircle {
    /// Clip circle for a wafer of the given diameter, centered at the origin.
    pub fn for_wafer(wafer_size: f64) -> Self {
        ClipCircle {
            center: (0.0, 0.0),
            radius: wafer_size / 2.0,
        }
    }

    /// Whether a point lies inside the clip region.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (x - self.center.0).hypot(y - self.center.1) <= self.radius
    }
}

/// Color mapping bounds for the rendered field.
///
/// A presentation parameter only: clamping the legal display range never
/// alters the interpolated field, just how the backend maps it to color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRange {
    vmin: f64,
    vmax: f64,
}

impl DisplayRange {
    /// Explicit bounds; `vmin` must not exceed `vmax` and both must be
    /// finite.
    pub fn new(vmin: f64, vmax: f64) -> RenderResult<Self> {
        if !vmin.is_finite() || !vmax.is_finite() || vmin > vmax {
            return Err(RenderError::InvalidRange { vmin, vmax });
        }
        Ok(DisplayRange { vmin, vmax })
    }

    /// Bounds spanning a non-empty value sequence exactly, the default when
    /// the caller gives no override.
    pub fn covering(values: impl IntoIterator<Item = f64>) -> Self {
        let mut vmin = f64::INFINITY;
        let mut vmax = f64::NEG_INFINITY;
        for value in values {
            vmin = vmin.min(value);
            vmax = vmax.max(value);
        }
        DisplayRange { vmin, vmax }
    }

    pub fn vmin(&self) -> f64 {
        self.vmin
    }

    pub fn vmax(&self) -> f64 {
        self.vmax
    }
}

/// Everything a renderer needs to draw one wafer map.
#[derive(Debug)]
pub struct RenderRequest<'a> {
    /// Bounding box the field spans in wafer coordinates.
    pub extent: Extent,

    /// The interpolated field; rows follow the y axis ("origin lower").
    pub field: &'a Field,

    /// The original, unextended samples for the marker overlay. Each is
    /// annotated with [`Sample::label`] placed slightly above the marker.
    pub samples: &'a [Sample],

    /// Circular mask; only the inside is shown, and its outline is drawn.
    pub clip: ClipCircle,

    /// Color mapping bounds.
    pub range: DisplayRange,

    /// Output destination for the persisted image.
    pub destination: &'a Path,
}

/// External presentation collaborator consumed by [`crate::draw_map`].
pub trait Renderer {
    /// Draw one wafer map and persist it to the request's destination.
    fn render(&mut self, request: &RenderRequest<'_>) -> RenderResult<()>;
}
