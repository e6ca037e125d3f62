//! Style records for render elements.
//!
//! All styles are immutable values: the `with_*` builders return a new
//! style instead of mutating in place, so elements shared across render
//! passes cannot alias hidden state.

use geoscope_core::geom::RectAlign;
use serde::{Deserialize, Serialize};

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub(crate) fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }

    // Debug palette.
    pub const BACKGROUND: Color = Color::rgb(252, 252, 250);
    pub const GRID: Color = Color::rgb(225, 225, 222);
    pub const AXIS: Color = Color::rgb(110, 110, 108);
    pub const LABEL: Color = Color::rgb(90, 90, 88);
    pub const PRIMARY: Color = Color::rgb(41, 128, 185);
    pub const ACCENT: Color = Color::rgb(231, 76, 60);
    pub const FACE: Color = Color::rgba(46, 204, 113, 72);
    pub const MARKER: Color = Color::rgb(52, 73, 94);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
}

/// Stroke parameters in render-space pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    /// Dash pattern as on/off lengths; `None` for a solid stroke.
    pub dash: Option<Vec<f64>>,
}

impl StrokeStyle {
    pub fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    pub fn with_width(self, width: f64) -> Self {
        Self { width, ..self }
    }

    pub fn with_dash(self, dash: Vec<f64>) -> Self {
        Self {
            dash: Some(dash),
            ..self
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new(Color::PRIMARY, 1.5)
    }
}

/// Fill and/or stroke for a shape. A shape with neither draws nothing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub fill: Option<Color>,
    pub stroke: Option<StrokeStyle>,
}

impl ShapeStyle {
    pub fn filled(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    pub fn stroked(stroke: StrokeStyle) -> Self {
        Self {
            fill: None,
            stroke: Some(stroke),
        }
    }

    pub fn with_fill(self, color: Color) -> Self {
        Self {
            fill: Some(color),
            ..self
        }
    }

    pub fn with_stroke(self, stroke: StrokeStyle) -> Self {
        Self {
            stroke: Some(stroke),
            ..self
        }
    }
}

/// Marker glyphs for point elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarkerShape {
    #[default]
    Circle,
    Square,
    Diamond,
    Cross,
}

/// Marker appearance: glyph, size (pixel diameter), and paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub shape: MarkerShape,
    pub size: f64,
    pub style: ShapeStyle,
}

impl MarkerStyle {
    pub fn new(shape: MarkerShape) -> Self {
        Self {
            shape,
            size: 7.0,
            style: ShapeStyle::filled(Color::MARKER),
        }
    }

    pub fn with_size(self, size: f64) -> Self {
        Self { size, ..self }
    }

    pub fn with_style(self, style: ShapeStyle) -> Self {
        Self { style, ..self }
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self::new(MarkerShape::Circle)
    }
}

/// Background plate drawn behind a text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackgroundShape {
    Rect,
    RoundedRect,
    /// Pill shape: corner radius of half the label height.
    Capsule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelBackground {
    pub shape: BackgroundShape,
    pub fill: Option<Color>,
    pub stroke: Option<StrokeStyle>,
    /// Padding between the text bounds and the plate edge, in pixels.
    pub padding: f64,
}

impl LabelBackground {
    pub fn capsule(fill: Color) -> Self {
        Self {
            shape: BackgroundShape::Capsule,
            fill: Some(fill),
            stroke: None,
            padding: 3.0,
        }
    }

    pub fn rect(fill: Color) -> Self {
        Self {
            shape: BackgroundShape::Rect,
            fill: Some(fill),
            stroke: None,
            padding: 3.0,
        }
    }

    pub fn with_stroke(self, stroke: StrokeStyle) -> Self {
        Self {
            stroke: Some(stroke),
            ..self
        }
    }
}

/// Text appearance and anchoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size: f64,
    pub color: Color,
    /// Which anchor of the text box lands on the element position.
    pub align: RectAlign,
    /// Optional outline stroked around the glyphs (halo).
    pub outline: Option<StrokeStyle>,
    pub background: Option<LabelBackground>,
}

impl TextStyle {
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            color: Color::LABEL,
            align: RectAlign::MidCenter,
            outline: None,
            background: None,
        }
    }

    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    pub fn with_align(self, align: RectAlign) -> Self {
        Self { align, ..self }
    }

    pub fn with_outline(self, outline: StrokeStyle) -> Self {
        Self {
            outline: Some(outline),
            ..self
        }
    }

    pub fn with_background(self, background: LabelBackground) -> Self {
        Self {
            background: Some(background),
            ..self
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_do_not_mutate() {
        let base = StrokeStyle::new(Color::PRIMARY, 1.0);
        let wide = base.clone().with_width(4.0);
        assert_eq!(base.width, 1.0);
        assert_eq!(wide.width, 4.0);
        assert_eq!(wide.color, base.color);
    }

    #[test]
    fn style_serde_roundtrip() {
        let style = TextStyle::new(14.0)
            .with_color(Color::ACCENT)
            .with_background(LabelBackground::capsule(Color::WHITE.with_alpha(200)));
        let json = serde_json::to_string(&style).unwrap();
        let back: TextStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(style, back);
    }
}
