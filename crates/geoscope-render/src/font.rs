//! Font resolution and text rasterization.
//!
//! Fonts come from the system database via fontdb. When no usable face
//! resolves (headless CI images, stripped containers), measurement degrades
//! to an advance-width estimate and glyph drawing is skipped; debug
//! rendering must keep working without a text backend.

use std::fs;
use std::sync::OnceLock;

use fontdb::{Database, Family, Query, Source, Stretch, Style, Weight};
use geoscope_core::geom::Size;
use rusttype::{point as rt_point, Font, Scale};
use tiny_skia::Pixmap;

use crate::style::Color;

/// Width-per-character estimate used when no font is available.
const FALLBACK_ADVANCE_RATIO: f64 = 0.6;

/// Line height relative to the font size in the fallback metric.
const FALLBACK_HEIGHT_RATIO: f64 = 1.2;

fn db() -> &'static Database {
    static DB: OnceLock<Database> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        db
    })
}

/// The resolved label font, or `None` when the system has none to offer.
pub fn font() -> Option<&'static Font<'static>> {
    static FONT: OnceLock<Option<Font<'static>>> = OnceLock::new();
    FONT.get_or_init(|| {
        let loaded = load_font_from_system();
        if loaded.is_none() {
            tracing::warn!("no usable system font; labels fall back to estimated metrics");
        }
        loaded
    })
    .as_ref()
}

fn load_font_from_system() -> Option<Font<'static>> {
    for families in [
        &[Family::SansSerif, Family::Serif][..],
        &[Family::Monospace][..],
    ] {
        let query = Query {
            families,
            weight: Weight::NORMAL,
            stretch: Stretch::Normal,
            style: Style::Normal,
        };
        let Some(id) = db().query(&query) else {
            continue;
        };
        let Some(face) = db().face(id) else {
            continue;
        };
        let loaded = match &face.source {
            Source::File(path) => fs::read(path).ok().and_then(Font::try_from_vec),
            Source::SharedFile(path, _) => fs::read(path).ok().and_then(Font::try_from_vec),
            Source::Binary(bytes) => Font::try_from_vec(bytes.as_ref().as_ref().to_vec()),
        };
        if loaded.is_some() {
            return loaded;
        }
    }
    None
}

/// Measures the ink-and-advance box of a single line of text.
pub fn measure(text: &str, font_size: f64) -> Size {
    if text.is_empty() {
        return Size::new(0.0, 0.0);
    }
    let Some(font) = font() else {
        return Size::new(
            text.chars().count() as f64 * font_size * FALLBACK_ADVANCE_RATIO,
            font_size * FALLBACK_HEIGHT_RATIO,
        );
    };
    let scale = Scale::uniform(font_size as f32);
    let v_metrics = font.v_metrics(scale);
    let width = font
        .layout(text, scale, rt_point(0.0, 0.0))
        .last()
        .map(|glyph| glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0);
    Size::new(
        width as f64,
        (v_metrics.ascent - v_metrics.descent) as f64,
    )
}

/// Baseline offset from the top of the measured box.
pub fn ascent(font_size: f64) -> f64 {
    match font() {
        Some(font) => font.v_metrics(Scale::uniform(font_size as f32)).ascent as f64,
        None => font_size * 0.8,
    }
}

/// Rasterizes one line of text into its own pixmap, sized to [`measure`].
///
/// Returns `None` when no font is available or the text is empty; the
/// caller simply skips the glyph pass.
pub fn rasterize(text: &str, font_size: f64, color: Color) -> Option<Pixmap> {
    let font = font()?;
    let measured = measure(text, font_size);
    let width = measured.width.ceil() as u32 + 1;
    let height = measured.height.ceil() as u32 + 1;
    if width == 0 || height == 0 {
        return None;
    }
    let mut pixmap = Pixmap::new(width, height)?;

    let scale = Scale::uniform(font_size as f32);
    let v_metrics = font.v_metrics(scale);
    let start = rt_point(0.0, v_metrics.ascent);

    let data = pixmap.data_mut();
    for glyph in font.layout(text, scale, start) {
        let Some(bounding_box) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, v| {
            let px = gx as i32 + bounding_box.min.x;
            let py = gy as i32 + bounding_box.min.y;
            if px < 0 || px >= width as i32 || py < 0 || py >= height as i32 {
                return;
            }
            let alpha = (v * color.a as f32) as u16;
            if alpha == 0 {
                return;
            }
            // Premultiplied RGBA, max-blended so overlapping glyph edges
            // do not double-darken.
            let idx = ((py as u32 * width + px as u32) * 4) as usize;
            let pixel = &mut data[idx..idx + 4];
            if alpha as u8 > pixel[3] {
                pixel[0] = (color.r as u16 * alpha / 255) as u8;
                pixel[1] = (color.g as u16 * alpha / 255) as u8;
                pixel[2] = (color.b as u16 * alpha / 255) as u8;
                pixel[3] = alpha as u8;
            }
        });
    }
    Some(pixmap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_measures_zero() {
        let m = measure("", 12.0);
        assert_eq!(m.width, 0.0);
    }

    #[test]
    fn longer_text_measures_wider() {
        let short = measure("1", 12.0);
        let long = measure("100.25", 12.0);
        assert!(long.width > short.width);
    }

    #[test]
    fn larger_size_measures_larger() {
        let small = measure("42", 10.0);
        let big = measure("42", 20.0);
        assert!(big.width > small.width);
        assert!(big.height > small.height);
    }
}
