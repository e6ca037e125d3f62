//! Point elements: a pixel-sized marker with an optional adjacent label.

use geoscope_core::geom::{Point, Rect, Transform};

use crate::element::{ShapeElement, TextElement, TextSource};
use crate::path;
use crate::style::{MarkerStyle, TextStyle};
use crate::surface::DrawSurface;

/// Default label offset from the marker center, in render pixels
/// (right and visually up on the raster).
const LABEL_OFFSET: Point = Point { x: 8.0, y: -10.0 };

/// A marker at a value-space position, optionally labelled.
///
/// The marker shape and label are pixel-sized upright content: the
/// effective transform moves the anchor, but its rotation and scale are
/// not applied to the marker geometry itself.
#[derive(Debug, Clone)]
pub struct PointElement {
    /// Marker geometry in pixel space, centered on the origin.
    pub shape: ShapeElement,
    pub label: Option<TextElement>,
    /// Pixel offset of the label anchor from the marker center.
    pub label_offset: Point,
    /// Maps the local origin to the value-space position.
    pub transform: Transform,
}

impl PointElement {
    pub fn new(position: Point, marker: &MarkerStyle) -> Self {
        Self {
            shape: ShapeElement::new(
                path::marker(marker.shape, marker.size),
                marker.style.clone(),
            ),
            label: None,
            label_offset: LABEL_OFFSET,
            transform: Transform::translation(position.x, position.y),
        }
    }

    /// Attaches a label with the given style.
    pub fn with_label(self, source: impl Into<TextSource>, style: TextStyle) -> Self {
        Self {
            label: Some(TextElement::new(source, style)),
            ..self
        }
    }

    pub fn with_label_element(self, label: TextElement) -> Self {
        Self {
            label: Some(label),
            ..self
        }
    }

    pub fn with_label_offset(self, offset: Point) -> Self {
        Self {
            label_offset: offset,
            ..self
        }
    }

    pub fn applying(&self, transform: &Transform) -> Self {
        Self {
            transform: self.transform.then(transform),
            ..self.clone()
        }
    }

    /// The anchor position through the stored transform; marker and label
    /// are pixel-sized and add nothing to value-space bounds.
    pub fn content_bounds(&self) -> Rect {
        Rect {
            origin: self.transform.apply(Point::ZERO),
            size: Default::default(),
        }
    }

    pub fn render(&self, transform: &Transform, surface: &mut dyn DrawSurface) {
        let effective = self.transform.then(transform);
        let position = effective.apply(Point::ZERO);
        // Upright: the marker keeps only the translation of the effective
        // transform (its own stored transform still applies in full).
        self.shape
            .render(&Transform::translation(position.x, position.y), surface);
        if let Some(label) = &self.label {
            let anchor = position + self.label_offset;
            label.render(&Transform::translation(anchor.x, anchor.y), surface);
        }
    }
}
