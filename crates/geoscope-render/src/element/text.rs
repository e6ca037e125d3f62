//! Text label elements.

use std::f64::consts::{FRAC_PI_2, PI};

use geoscope_core::geom::{Point, Rect, Transform};

use crate::style::TextStyle;
use crate::surface::DrawSurface;

/// What a text element displays.
#[derive(Debug, Clone, PartialEq)]
pub enum TextSource {
    Literal(String),
    /// Formatted with trailing zeros trimmed.
    Number(f64),
    /// Vertex/element index.
    Index(usize),
}

impl TextSource {
    pub fn resolve(&self) -> String {
        match self {
            TextSource::Literal(s) => s.clone(),
            TextSource::Number(v) => format_number(*v),
            TextSource::Index(i) => i.to_string(),
        }
    }
}

impl From<&str> for TextSource {
    fn from(s: &str) -> Self {
        TextSource::Literal(s.to_string())
    }
}

impl From<String> for TextSource {
    fn from(s: String) -> Self {
        TextSource::Literal(s)
    }
}

impl From<f64> for TextSource {
    fn from(v: f64) -> Self {
        TextSource::Number(v)
    }
}

impl From<usize> for TextSource {
    fn from(i: usize) -> Self {
        TextSource::Index(i)
    }
}

/// Formats a value for display, trimming trailing zeros.
pub fn format_number(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    if v == v.trunc() && v.abs() < 1e12 {
        return format!("{}", v as i64);
    }
    let s = format!("{v:.6}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// A single-line text label.
///
/// Labels default to non-rotatable: only the translation of the effective
/// transform is applied, so the text stays upright and pixel-sized no
/// matter how its anchor moves. Rotatable text follows the transform's
/// rotation, normalized so it never renders upside down.
#[derive(Debug, Clone)]
pub struct TextElement {
    pub source: TextSource,
    pub style: TextStyle,
    pub rotatable: bool,
    pub transform: Transform,
}

impl TextElement {
    pub fn new(source: impl Into<TextSource>, style: TextStyle) -> Self {
        Self {
            source: source.into(),
            style,
            rotatable: false,
            transform: Transform::IDENTITY,
        }
    }

    pub fn with_rotatable(self, rotatable: bool) -> Self {
        Self { rotatable, ..self }
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

    /// Text occupies pixel space; it contributes only its anchor point to
    /// value-space bounds.
    pub fn content_bounds(&self) -> Rect {
        let anchor = self.transform.apply(Point::ZERO);
        Rect {
            origin: anchor,
            size: Default::default(),
        }
    }

    pub fn render(&self, transform: &Transform, surface: &mut dyn DrawSurface) {
        let effective = self.transform.then(transform);
        let position = effective.apply(Point::ZERO);
        let angle = if self.rotatable {
            normalize_upright(effective.decompose().rotation)
        } else {
            0.0
        };
        surface.draw_text(&self.source.resolve(), &self.style, position, angle);
    }
}

/// Normalizes a render angle into `[-pi/2, pi/2]` by adding a half turn
/// when outside it, so text along a reversed direction still reads left to
/// right.
pub fn normalize_upright(angle: f64) -> f64 {
    if angle > FRAC_PI_2 {
        angle - PI
    } else if angle < -FRAC_PI_2 {
        angle + PI
    } else {
        angle
    }
}
