//! # Geoscope Render
//!
//! Raster debug rendering of 2D geometry. Feed it points, segments,
//! meshes, and paths; get back an annotated raster image with a
//! human-readable grid, axes, and labels.
//!
//! ## Core Components
//!
//! ### Render Elements
//! - **Shape**: filled/stroked vector paths
//! - **Text**: upright or direction-following labels
//! - **Point**: pixel-sized markers with adjacent labels
//! - **Segment**: lines with arrows, endpoint decorations, and trims
//! - **Face**: closed polygons with centroid labels
//!
//! ### Pipeline
//! - **Scene**: element list + configuration, rendered per pass
//! - **grid**: grid lines, axis arrows, and mark labels
//! - **Surface**: tiny-skia raster backend behind the `DrawSurface` trait
//! - **DebugContext**: shared overlay registry and bounded log buffer
//!
//! ### Debuggers
//! - **PointsDebugger / MeshDebugger / VectorDebugger / PathDebugger**:
//!   per-shape-kind builders assembling the pieces above
//!
//! ## Usage
//!
//! ```rust,ignore
//! use geoscope_core::geom::Point;
//! use geoscope_render::debuggers::PointsDebugger;
//!
//! let scene = PointsDebugger::new(vec![Point::new(0.0, 0.0), Point::new(40.0, 25.0)]).scene();
//! let image = scene.render()?;
//! image.save("points.png")?;
//! ```

pub mod arrow;
pub mod context;
pub mod debuggers;
pub mod element;
pub mod font;
mod grid;
pub mod path;
pub mod scene;
pub mod style;
pub mod surface;

pub use arrow::{ArrowDirection, ArrowSpec, ArrowTip, LineStyle, TipAnchor, TipShape};
pub use context::{ContextConfig, DebugContext, LogEntry, LogLevel};
pub use debuggers::{MeshDebugger, PathDebugger, PointsDebugger, VectorDebugger};
pub use element::{
    format_number, Element, FaceElement, PointElement, SegmentElement, ShapeElement, TextElement,
    TextSource,
};
pub use scene::{Scene, SceneConfig};
pub use style::{
    BackgroundShape, Color, LabelBackground, MarkerShape, MarkerStyle, ShapeStyle, StrokeStyle,
    TextStyle,
};
pub use surface::{DrawSurface, RasterSurface};

// The core crate is the other half of the public API.
pub use geoscope_core as core;
