//! Scene assembly: elements + configuration in, raster image out.
//!
//! A render pass is a pure function of the element list and configuration.
//! The coordinate grid and projection are recomputed from scratch every
//! pass; nothing is mutated incrementally.

use geoscope_core::coordinate::Coordinate;
use geoscope_core::error::Result;
use geoscope_core::geom::{Point, Rect, RectAlign};
use geoscope_core::projection::{Orientation, Projection, Zoom};
use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::context::DebugContext;
use crate::element::Element;
use crate::font;
use crate::grid;
use crate::style::{Color, TextStyle};
use crate::surface::{DrawSurface, RasterSurface};

/// Number of log lines shown by the on-canvas log overlay.
const LOG_OVERLAY_LINES: usize = 8;

/// Scene rendering options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Minimum total on-screen width budget, spread across the segment
    /// count to give the per-segment minimum pixel length.
    pub min_segment_width: f64,
    /// Requested grid segments per axis.
    pub num_segments: usize,
    /// Expand the bounds to always include the value-space origin.
    pub include_origin: bool,
    pub orientation: Orientation,
    pub zoom: Option<Zoom>,
    pub show_grid: bool,
    /// Draw the context's log buffer in the bottom-left corner.
    pub show_log: bool,
    pub background: Color,
    /// Device pixels per render unit.
    pub pixel_scale: f64,
    pub label_font_size: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            min_segment_width: 250.0,
            num_segments: 5,
            include_origin: false,
            orientation: Orientation::YUp,
            zoom: None,
            show_grid: true,
            show_log: false,
            background: Color::BACKGROUND,
            pixel_scale: 1.0,
            label_font_size: 12.0,
        }
    }
}

/// A renderable collection of elements.
pub struct Scene {
    elements: Vec<Element>,
    config: SceneConfig,
    context: Option<DebugContext>,
    bounds_override: Option<Rect>,
}

impl Scene {
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    pub fn with_config(config: SceneConfig) -> Self {
        Self {
            elements: Vec::new(),
            config,
            context: None,
            bounds_override: None,
        }
    }

    /// Attaches a shared debug context whose overlays (and optionally log)
    /// are drawn after the scene's own elements.
    pub fn with_context(mut self, context: DebugContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Frames the scene on an explicit value rect instead of the element
    /// bounds union.
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds_override = Some(bounds);
        self
    }

    pub fn push(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    pub fn extend(&mut self, elements: impl IntoIterator<Item = Element>) {
        self.elements.extend(elements);
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Value-space bounds the grid is derived from: the explicit override,
    /// or the union of element content bounds. An empty scene frames a unit
    /// rect around the origin.
    pub fn bounds(&self) -> Rect {
        let mut bounds = match self.bounds_override {
            Some(b) => b,
            None => {
                let mut iter = self.elements.iter().map(Element::content_bounds);
                match iter.next() {
                    Some(first) => iter.fold(first, |acc, b| acc.union(&b)),
                    None => Rect::new(-0.5, -0.5, 1.0, 1.0),
                }
            }
        };
        if self.config.include_origin {
            bounds = bounds.union_point(Point::ZERO);
        }
        bounds
    }

    /// Computes the grid and projection this scene would render with.
    pub fn projection(&self) -> (Coordinate, Projection) {
        let coordinate = Coordinate::new(self.bounds(), self.config.num_segments);
        let widest_label = grid::mark_labels(&coordinate)
            .iter()
            .map(|label| font::measure(label, self.config.label_font_size).width)
            .fold(0.0, f64::max);
        let mut projection = Projection::new(
            &coordinate,
            self.config.min_segment_width,
            self.config.num_segments,
            widest_label,
            self.config.orientation,
        );
        if let Some(zoom) = self.config.zoom {
            projection = projection.with_zoom(zoom);
        }
        (coordinate, projection)
    }

    /// Renders the scene into an RGBA image.
    pub fn render(&self) -> Result<RgbaImage> {
        let (coordinate, projection) = self.projection();
        let mut surface = RasterSurface::new(projection.canvas_size(), self.config.pixel_scale)?;
        surface.clear(self.config.background);

        if self.config.show_grid {
            grid::render(
                &coordinate,
                &projection,
                self.config.label_font_size,
                &mut surface,
            );
        }

        let composite = projection.composite();
        for element in &self.elements {
            element.render(&composite, &mut surface);
        }

        if let Some(context) = &self.context {
            for overlay in context.overlays() {
                overlay.render(&composite, &mut surface);
            }
            if self.config.show_log {
                self.render_log(context, &mut surface);
            }
        }

        tracing::debug!(
            elements = self.elements.len(),
            canvas_w = projection.canvas_size().width,
            canvas_h = projection.canvas_size().height,
            "scene rendered"
        );
        Ok(surface.into_image())
    }

    /// Draws the tail of the log buffer in the bottom-left corner, newest
    /// line lowest.
    fn render_log(&self, context: &DebugContext, surface: &mut RasterSurface) {
        let entries = context.entries();
        let shown = entries.len().min(LOG_OVERLAY_LINES);
        if shown == 0 {
            return;
        }
        let style = TextStyle::new(self.config.label_font_size)
            .with_color(Color::LABEL)
            .with_align(RectAlign::BottomLeft);
        let line_height = self.config.label_font_size * 1.3;
        let canvas = surface.size();
        for (row, entry) in entries[entries.len() - shown..].iter().enumerate() {
            let y = canvas.height - 4.0 - (shown - 1 - row) as f64 * line_height;
            let text = format!("{} {}", entry.level, entry.message);
            surface.draw_text(&text, &style, Point::new(4.0, y), 0.0);
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
