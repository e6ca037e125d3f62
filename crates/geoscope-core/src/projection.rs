//! Value-space to render-space projection.
//!
//! Builds the master transform from a [`Coordinate`] grid: per-segment pixel
//! width, fixed canvas margin, optional vertical flip for y-up value spaces,
//! and zoom composed after the base transform.
//!
//! Render space is raster-oriented: +Y down, origin at the top-left of the
//! canvas. With [`Orientation::YUp`] a flip about the canvas center is
//! composed so value-space "up" points up on screen.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::fit::{fit, AspectMatch, FitScaling};
use crate::geom::{Point, Rect, RectAlign, Size, Transform};

/// Fixed margin around the scaled grid, in render units.
pub const CANVAS_MARGIN: f64 = 40.0;

/// Padding added to the widest axis label when it drives the minimum
/// segment width.
pub const LABEL_PADDING: f64 = 14.0;

/// Vertical orientation of the value space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Value-space Y grows upward (mathematical convention); rendering
    /// composes a vertical flip.
    #[default]
    YUp,
    /// Value-space Y grows downward, matching the raster surface directly.
    YDown,
}

/// Zoom state applied after the base projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Zoom {
    /// Uniform scale about a render-space point.
    Factor { factor: f64, center: Point },
    /// Aspect-fit the given value-space rect into the render rect.
    ToRect(Rect),
}

/// The master value-to-render transform and derived canvas geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    value_to_render: Transform,
    zoom: Transform,
    flip: Transform,
    render_rect: Rect,
    canvas_size: Size,
    scale: f64,
    segment_px: f64,
    orientation: Orientation,
}

impl Projection {
    /// Builds the projection for a coordinate grid.
    ///
    /// The on-screen segment length is the configured total minimum spread
    /// across the requested segment count, raised to the widest measured
    /// axis label plus padding so adjacent labels cannot collide.
    pub fn new(
        coordinate: &Coordinate,
        min_segment_width: f64,
        requested_segments: usize,
        widest_label: f64,
        orientation: Orientation,
    ) -> Self {
        let spread = min_segment_width / requested_segments.max(1) as f64;
        let segment_px = spread.max(widest_label + LABEL_PADDING);
        let scale = segment_px / coordinate.segment_value();

        let grid = coordinate.value_rect();
        let grid_px = Size::new(grid.width() * scale, grid.height() * scale);
        let canvas_size = Size::new(
            grid_px.width + CANVAS_MARGIN * 2.0,
            grid_px.height + CANVAS_MARGIN * 2.0,
        );
        let render_rect = Rect::new(CANVAS_MARGIN, CANVAS_MARGIN, grid_px.width, grid_px.height);

        let value_to_render = Transform::translation(-grid.origin.x, -grid.origin.y)
            .then_scale(scale, scale)
            .then_translate(CANVAS_MARGIN, CANVAS_MARGIN);

        let flip = match orientation {
            Orientation::YDown => Transform::IDENTITY,
            Orientation::YUp => {
                let center = Point::new(canvas_size.width / 2.0, canvas_size.height / 2.0);
                Transform::scale_around(center, 1.0, -1.0)
            }
        };

        tracing::debug!(
            segment_px,
            scale,
            canvas_w = canvas_size.width,
            canvas_h = canvas_size.height,
            "projection built"
        );

        Self {
            value_to_render,
            zoom: Transform::IDENTITY,
            flip,
            render_rect,
            canvas_size,
            scale,
            segment_px,
            orientation,
        }
    }

    /// Replaces the zoom state, returning the adjusted projection.
    pub fn with_zoom(mut self, zoom: Zoom) -> Self {
        self.zoom = match zoom {
            Zoom::Factor { factor, center } => {
                if factor > 0.0 && factor.is_finite() {
                    Transform::scale_around(center, factor, factor)
                } else {
                    tracing::debug!(factor, "ignoring non-positive zoom factor");
                    Transform::IDENTITY
                }
            }
            Zoom::ToRect(value_rect) => {
                // Map the requested value rect into render space, then
                // aspect-fit it inside the full render rect.
                let shown = self.value_to_render.apply_rect(&value_rect.with_min_extent(1e-9));
                fit(
                    &shown,
                    &self.render_rect,
                    RectAlign::MidCenter,
                    FitScaling::Aspect(AspectMatch::MinEdge),
                )
            }
        };
        self
    }

    /// The base value-to-render transform, before zoom and flip.
    pub fn value_to_render(&self) -> Transform {
        self.value_to_render
    }

    /// The render-time composite: base, then zoom, then orientation flip.
    pub fn composite(&self) -> Transform {
        self.value_to_render.then(&self.zoom).then(&self.flip)
    }

    /// Composite without the base projection, for geometry already in
    /// render space.
    pub fn render_composite(&self) -> Transform {
        self.zoom.then(&self.flip)
    }

    /// Render-space rect covering the (unzoomed) grid area.
    pub fn render_rect(&self) -> Rect {
        self.render_rect
    }

    /// Full canvas size including margins, in render units.
    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    /// Render units per value unit (before zoom).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// On-screen length of one grid segment (before zoom).
    pub fn segment_px(&self) -> f64 {
        self.segment_px
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}
