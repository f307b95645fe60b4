//! wafermap - wafer map field computation
//!
//! Turns a sparse, irregular set of (x, y, value) wafer measurements into a
//! dense, smoothly interpolated field suitable for rendering as a
//! color-coded map clipped to the wafer circle.
//!
//! The numeric pipeline has two stages, consumed in sequence:
//!
//! - [`boundary`] - synthesizes samples at four fixed reference points on
//!   the boundary circle, valued from the nearest existing measurements
//!   (ties averaged), so interpolation is anchored at the perimeter.
//! - [`interpolate`] - fits a thin-plate radial basis interpolant through
//!   the extended set and evaluates it on a regular grid spanning the set's
//!   bounding box.
//!
//! Presentation is decoupled behind the [`render::Renderer`] trait: the core
//! computes, a backend draws and saves. The core itself is synchronous,
//! stateless across invocations, and free of graphics dependencies.
//!
//! # Example
//!
//! ```
//! use wafermap::compute_field;
//!
//! let x = [-50.0, 50.0, 0.0, 0.0];
//! let y = [0.0, 0.0, -50.0, 50.0];
//! let v = [1.0, 2.0, 3.0, 4.0];
//!
//! // 300mm wafer, default 100x100 grid.
//! let (grid, field) = compute_field(&x, &y, &v, 300.0)?;
//! assert_eq!(grid.resolution(), (100, 100));
//! assert!(field.is_finite());
//! # Ok::<(), wafermap::WaferMapError>(())
//! ```

pub mod boundary;
pub mod error;
pub mod grid;
pub mod interpolate;
pub mod pipeline;
pub mod render;
pub mod sample;

mod validation;

// Re-export main types for convenience
pub use error::{WaferMapError, WaferMapResult};
pub use grid::{Extent, Field, Grid, DEFAULT_RESOLUTION};
pub use interpolate::{RbfKernel, RbfModel};
pub use pipeline::{
    compute_field, compute_field_with_options, draw_map, FieldOptions, MapOptions,
};
pub use render::{
    ClipCircle, DisplayRange, RenderError, RenderRequest, RenderResult, Renderer,
};
pub use sample::Sample;
