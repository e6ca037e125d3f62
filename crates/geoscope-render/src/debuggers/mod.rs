//! Per-shape-kind debuggers: builders that assemble the core pipeline into
//! renderable element lists.
//!
//! Each debugger is an immutable builder; `build` produces the elements and
//! `scene` wraps them in a ready-to-render [`Scene`](crate::scene::Scene).

mod mesh;
mod path;
mod points;
mod vector;

pub use mesh::MeshDebugger;
pub use path::PathDebugger;
pub use points::PointsDebugger;
pub use vector::VectorDebugger;
