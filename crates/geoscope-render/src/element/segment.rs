//! Segment elements: a styled line with optional arrow, endpoint
//! decorations, and a center label.

use geoscope_core::geom::{Point, Rect, Segment, Transform};

use crate::arrow::ArrowSpec;
use crate::element::{Element, TextElement};
use crate::path;
use crate::style::StrokeStyle;
use crate::surface::DrawSurface;

/// A line between two value-space points.
///
/// The drawn line can be displaced sideways (`offset`) and trimmed at
/// either end to clear endpoint decorations; offset and trims are in render
/// pixels, matching the pixel-sized decorations they make room for.
/// Endpoint sub-elements and the center label render with the segment's own
/// render-space angle.
#[derive(Debug, Clone)]
pub struct SegmentElement {
    pub start: Point,
    pub end: Point,
    pub stroke: StrokeStyle,
    pub arrow: Option<ArrowSpec>,
    pub start_endpoint: Option<Box<Element>>,
    pub end_endpoint: Option<Box<Element>>,
    pub center_label: Option<TextElement>,
    /// Perpendicular displacement of the drawn line, render pixels.
    pub offset: f64,
    /// Length trimmed from the start of the drawn line, render pixels.
    pub start_trim: f64,
    /// Length trimmed from the end of the drawn line, render pixels.
    pub end_trim: f64,
    pub transform: Transform,
}

impl SegmentElement {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            stroke: StrokeStyle::default(),
            arrow: None,
            start_endpoint: None,
            end_endpoint: None,
            center_label: None,
            offset: 0.0,
            start_trim: 0.0,
            end_trim: 0.0,
            transform: Transform::IDENTITY,
        }
    }

    pub fn with_stroke(self, stroke: StrokeStyle) -> Self {
        Self { stroke, ..self }
    }

    pub fn with_arrow(self, arrow: ArrowSpec) -> Self {
        Self {
            arrow: Some(arrow),
            ..self
        }
    }

    pub fn with_start_endpoint(self, element: impl Into<Element>) -> Self {
        Self {
            start_endpoint: Some(Box::new(element.into())),
            ..self
        }
    }

    pub fn with_end_endpoint(self, element: impl Into<Element>) -> Self {
        Self {
            end_endpoint: Some(Box::new(element.into())),
            ..self
        }
    }

    pub fn with_center_label(self, label: TextElement) -> Self {
        Self {
            center_label: Some(label),
            ..self
        }
    }

    pub fn with_offset(self, offset: f64) -> Self {
        Self { offset, ..self }
    }

    pub fn with_trims(self, start_trim: f64, end_trim: f64) -> Self {
        Self {
            start_trim,
            end_trim,
            ..self
        }
    }

    pub fn applying(&self, transform: &Transform) -> Self {
        Self {
            transform: self.transform.then(transform),
            ..self.clone()
        }
    }

    /// Endpoint bounds through the stored transform.
    pub fn content_bounds(&self) -> Rect {
        Rect::from_points(
            self.transform.apply(self.start),
            self.transform.apply(self.end),
        )
    }

    pub fn render(&self, transform: &Transform, surface: &mut dyn DrawSurface) {
        let effective = self.transform.then(transform);
        let start = effective.apply(self.start);
        let end = effective.apply(self.end);

        // Offset first, then trim: decorations sit on the offset line's
        // endpoints, the trims only shorten what is stroked.
        let base = Segment::new(start, end).offsetting(self.offset);
        let drawn = base
            .shrinking_start(self.start_trim)
            .shrinking_end(self.end_trim);

        match &self.arrow {
            Some(spec) => {
                let paths = spec.build_paths(drawn.start, drawn.end);
                surface.stroke_path(&paths.body, &self.stroke, &Transform::IDENTITY);
                if paths.fill_tips {
                    surface.fill_path(&paths.tips, self.stroke.color, &Transform::IDENTITY);
                }
                surface.stroke_path(&paths.tips, &self.stroke, &Transform::IDENTITY);
            }
            None => {
                surface.stroke_path(
                    &path::line(drawn.start, drawn.end),
                    &self.stroke,
                    &Transform::IDENTITY,
                );
            }
        }

        let angle = base.angle();
        if let Some(endpoint) = &self.start_endpoint {
            endpoint.render(
                &Transform::rotation(angle).then_translate(base.start.x, base.start.y),
                surface,
            );
        }
        if let Some(endpoint) = &self.end_endpoint {
            endpoint.render(
                &Transform::rotation(angle).then_translate(base.end.x, base.end.y),
                surface,
            );
        }
        if let Some(label) = &self.center_label {
            let mid = base.midpoint();
            label.render(
                &Transform::rotation(angle).then_translate(mid.x, mid.y),
                surface,
            );
        }
    }
}
