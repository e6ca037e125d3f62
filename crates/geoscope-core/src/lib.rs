//! # Geoscope Core
//!
//! Coordinate model, affine transforms, and grid math for the geoscope
//! debug renderer. This crate is the dependency-light half of the
//! workspace: pure value types and deterministic computations, no raster
//! or font stack.
//!
//! ## Components
//!
//! - **geom**: points, rectangles (with the 9-point anchor grid), affine
//!   transforms with decomposition, and line segments with the
//!   shrink/expand/offset operations endpoint decorations need.
//! - **axis**: "nice number" grid step division and per-axis grid state.
//! - **coordinate**: the shared-step grid model derived from value bounds.
//! - **projection**: the master value-to-render transform (margins,
//!   minimum segment width, y-flip, zoom).
//! - **fit**: rectangle alignment and scaling transforms.
//!
//! ## Pipeline
//!
//! ```text
//! value bounds -> Coordinate (grid step, marks, origin)
//!              -> Projection (value -> render transform, canvas size)
//!              -> render elements (geoscope-render)
//! ```

pub mod axis;
pub mod coordinate;
pub mod error;
pub mod fit;
pub mod geom;
pub mod projection;

pub use axis::{divide, AxisData};
pub use coordinate::{Axis, Coordinate, AXIS_OVERSHOOT_RATIO};
pub use error::{Error, Result};
pub use fit::{fit, AspectMatch, FitScaling, StretchMatch};
pub use geom::{Decomposition, Point, Rect, RectAlign, Segment, Size, Transform};
pub use projection::{Orientation, Projection, Zoom, CANVAS_MARGIN, LABEL_PADDING};
