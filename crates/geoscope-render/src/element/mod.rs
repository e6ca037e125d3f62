//! The render-element model.
//!
//! A closed set of element kinds, dispatched by exhaustive match. Every
//! element carries its own local transform; `applying` (or `element * t`)
//! right-multiplies it, and rendering composes the stored transform with
//! the incoming render-pass transform.
//!
//! Upright content (point markers, non-rotatable text) decomposes the
//! effective transform at draw time and keeps only the translation, so
//! labels stay readable no matter how their anchor is transformed.

mod face;
mod point;
mod segment;
mod shape;
mod text;

pub use face::FaceElement;
pub use point::PointElement;
pub use segment::SegmentElement;
pub use shape::ShapeElement;
pub use text::{format_number, TextElement, TextSource};

use std::ops::Mul;

use geoscope_core::geom::{Rect, Transform};

use crate::surface::DrawSurface;

/// Any renderable node.
#[derive(Debug, Clone)]
pub enum Element {
    Shape(ShapeElement),
    Text(TextElement),
    Point(PointElement),
    Segment(SegmentElement),
    Face(FaceElement),
}

impl Element {
    /// Axis-aligned bounds in the space the element list lives in (the
    /// element's stored transform is applied). Pixel-sized content (markers,
    /// text) contributes only its anchor point.
    pub fn content_bounds(&self) -> Rect {
        match self {
            Element::Shape(e) => e.content_bounds(),
            Element::Text(e) => e.content_bounds(),
            Element::Point(e) => e.content_bounds(),
            Element::Segment(e) => e.content_bounds(),
            Element::Face(e) => e.content_bounds(),
        }
    }

    /// Draws the element through `transform` onto the surface.
    pub fn render(&self, transform: &Transform, surface: &mut dyn DrawSurface) {
        match self {
            Element::Shape(e) => e.render(transform, surface),
            Element::Text(e) => e.render(transform, surface),
            Element::Point(e) => e.render(transform, surface),
            Element::Segment(e) => e.render(transform, surface),
            Element::Face(e) => e.render(transform, surface),
        }
    }

    /// Returns a new element with `transform` composed after the stored
    /// transform.
    pub fn applying(&self, transform: &Transform) -> Element {
        match self {
            Element::Shape(e) => Element::Shape(e.applying(transform)),
            Element::Text(e) => Element::Text(e.applying(transform)),
            Element::Point(e) => Element::Point(e.applying(transform)),
            Element::Segment(e) => Element::Segment(e.applying(transform)),
            Element::Face(e) => Element::Face(e.applying(transform)),
        }
    }
}

impl Mul<Transform> for Element {
    type Output = Element;

    fn mul(self, rhs: Transform) -> Element {
        self.applying(&rhs)
    }
}

impl From<ShapeElement> for Element {
    fn from(e: ShapeElement) -> Self {
        Element::Shape(e)
    }
}

impl From<TextElement> for Element {
    fn from(e: TextElement) -> Self {
        Element::Text(e)
    }
}

impl From<PointElement> for Element {
    fn from(e: PointElement) -> Self {
        Element::Point(e)
    }
}

impl From<SegmentElement> for Element {
    fn from(e: SegmentElement) -> Self {
        Element::Segment(e)
    }
}

impl From<FaceElement> for Element {
    fn from(e: FaceElement) -> Self {
        Element::Face(e)
    }
}
