//! Filled/stroked vector path elements.

use geoscope_core::geom::{Rect, Transform};
use lyon::path::Path;

use crate::path;
use crate::style::ShapeStyle;
use crate::surface::DrawSurface;

/// A vector path with fill and/or stroke.
#[derive(Debug, Clone)]
pub struct ShapeElement {
    pub path: Path,
    pub style: ShapeStyle,
    pub transform: Transform,
}

impl ShapeElement {
    pub fn new(path: Path, style: ShapeStyle) -> Self {
        Self {
            path,
            style,
            transform: Transform::IDENTITY,
        }
    }

    pub fn with_transform(self, transform: Transform) -> Self {
        Self { transform, ..self }
    }

    pub fn applying(&self, transform: &Transform) -> Self {
        Self {
            transform: self.transform.then(transform),
            ..self.clone()
        }
    }

    /// Path bounds through the stored transform.
    pub fn content_bounds(&self) -> Rect {
        self.transform.apply_rect(&path::bounds(&self.path))
    }

    pub fn render(&self, transform: &Transform, surface: &mut dyn DrawSurface) {
        let effective = self.transform.then(transform);
        if let Some(fill) = self.style.fill {
            surface.fill_path(&self.path, fill, &effective);
        }
        if let Some(stroke) = &self.style.stroke {
            surface.stroke_path(&self.path, stroke, &effective);
        }
    }
}
