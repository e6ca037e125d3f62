//! The drawing surface contract and its tiny-skia raster implementation.
//!
//! The render pipeline only talks to [`DrawSurface`]; swapping the raster
//! backend for a different target means implementing this one trait. Paths
//! arrive in lyon form with a render-space transform; stroke widths, text
//! sizes, and positions are render units and are scaled to device pixels
//! here.

use geoscope_core::error::{Error, Result};
use geoscope_core::geom::{Point, Rect, RectAlign, Size, Transform};
use image::RgbaImage;
use tiny_skia::{FillRule, Paint, Pixmap, PixmapPaint, Stroke};

use crate::font;
use crate::path;
use crate::style::{BackgroundShape, Color, StrokeStyle, TextStyle};

/// Drawing primitives the render elements need from a platform surface.
pub trait DrawSurface {
    /// Fills a path after applying `transform` to its points.
    fn fill_path(&mut self, path: &lyon::path::Path, color: Color, transform: &Transform);

    /// Strokes a path after applying `transform` to its points. The stroke
    /// width is in render units, not value units.
    fn stroke_path(&mut self, path: &lyon::path::Path, stroke: &StrokeStyle, transform: &Transform);

    /// Draws one line of styled text anchored at `position` (render units),
    /// rotated by `angle` radians about the anchor.
    fn draw_text(&mut self, text: &str, style: &TextStyle, position: Point, angle: f64);

    /// Measures one line of text at the given font size, in render units.
    fn measure_text(&self, text: &str, font_size: f64) -> Size;

    /// Logical surface size in render units.
    fn size(&self) -> Size;

    /// Device pixels per render unit.
    fn pixel_scale(&self) -> f64;
}

/// Anchor fractions with "top" meaning the visually upper edge of the text
/// box in raster space.
fn visual_fractions(align: RectAlign) -> (f64, f64) {
    match align {
        RectAlign::TopLeft => (0.0, 0.0),
        RectAlign::TopCenter => (0.5, 0.0),
        RectAlign::TopRight => (1.0, 0.0),
        RectAlign::MidLeft => (0.0, 0.5),
        RectAlign::MidCenter => (0.5, 0.5),
        RectAlign::MidRight => (1.0, 0.5),
        RectAlign::BottomLeft => (0.0, 1.0),
        RectAlign::BottomCenter => (0.5, 1.0),
        RectAlign::BottomRight => (1.0, 1.0),
    }
}

/// Raster surface backed by a tiny-skia pixmap.
pub struct RasterSurface {
    pixmap: Pixmap,
    size: Size,
    scale: f64,
}

impl RasterSurface {
    /// Allocates a surface of `size` render units at `pixel_scale` device
    /// pixels per unit.
    pub fn new(size: Size, pixel_scale: f64) -> Result<Self> {
        let scale = if pixel_scale > 0.0 && pixel_scale.is_finite() {
            pixel_scale
        } else {
            1.0
        };
        let width = (size.width * scale).ceil().max(1.0) as u32;
        let height = (size.height * scale).ceil().max(1.0) as u32;
        let pixmap =
            Pixmap::new(width, height).ok_or(Error::SurfaceAllocation { width, height })?;
        Ok(Self {
            pixmap,
            size,
            scale,
        })
    }

    /// Fills the whole surface with a color.
    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(color.to_skia());
    }

    /// Device transform: render units to pixels.
    fn device(&self, transform: &Transform) -> Transform {
        transform.then_scale(self.scale, self.scale)
    }

    fn to_skia_transform(t: &Transform) -> tiny_skia::Transform {
        tiny_skia::Transform::from_row(
            t.a as f32,
            t.b as f32,
            t.c as f32,
            t.d as f32,
            t.tx as f32,
            t.ty as f32,
        )
    }

    /// Consumes the surface into an RGBA image.
    pub fn into_image(self) -> RgbaImage {
        let width = self.pixmap.width();
        let height = self.pixmap.height();
        let data = self.pixmap.data();
        RgbaImage::from_fn(width, height, |x, y| {
            let idx = ((y * width + x) * 4) as usize;
            let a = data[idx + 3];
            // Demultiply; the canvas background is opaque so rounding noise
            // stays in the low bits.
            let demul = |v: u8| {
                if a == 0 {
                    0
                } else {
                    ((v as u16 * 255) / a as u16).min(255) as u8
                }
            };
            image::Rgba([demul(data[idx]), demul(data[idx + 1]), demul(data[idx + 2]), a])
        })
    }

    fn draw_label_background(
        &mut self,
        style: &TextStyle,
        box_rect: Rect,
        position: Point,
        angle: f64,
    ) {
        let Some(background) = &style.background else {
            return;
        };
        let plate = box_rect.expanded(background.padding);
        let plate_path = match background.shape {
            BackgroundShape::Rect => path::rect(plate),
            BackgroundShape::RoundedRect => path::rounded_rect(plate, 3.0),
            BackgroundShape::Capsule => path::rounded_rect(plate, plate.height() / 2.0),
        };
        let local_to_render = Transform::rotation(angle).then_translate(position.x, position.y);
        if let Some(fill) = background.fill {
            self.fill_path(&plate_path, fill, &local_to_render);
        }
        if let Some(stroke) = &background.stroke {
            self.stroke_path(&plate_path, stroke, &local_to_render);
        }
    }
}

impl DrawSurface for RasterSurface {
    fn fill_path(&mut self, path: &lyon::path::Path, color: Color, transform: &Transform) {
        let Some(skia_path) = path::to_skia(path, &self.device(transform)) else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        paint.anti_alias = true;
        self.pixmap.fill_path(
            &skia_path,
            &paint,
            FillRule::Winding,
            tiny_skia::Transform::identity(),
            None,
        );
    }

    fn stroke_path(&mut self, path: &lyon::path::Path, stroke: &StrokeStyle, transform: &Transform) {
        let Some(skia_path) = path::to_skia(path, &self.device(transform)) else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color(stroke.color.to_skia());
        paint.anti_alias = true;
        let mut skia_stroke = Stroke {
            width: (stroke.width * self.scale) as f32,
            ..Default::default()
        };
        if let Some(dash) = &stroke.dash {
            let pattern: Vec<f32> = dash.iter().map(|d| (d * self.scale) as f32).collect();
            skia_stroke.dash = tiny_skia::StrokeDash::new(pattern, 0.0);
        }
        self.pixmap.stroke_path(
            &skia_path,
            &paint,
            &skia_stroke,
            tiny_skia::Transform::identity(),
            None,
        );
    }

    fn draw_text(&mut self, text: &str, style: &TextStyle, position: Point, angle: f64) {
        if text.is_empty() {
            return;
        }
        let measured = font::measure(text, style.font_size);
        let (fx, fy) = visual_fractions(style.align);
        let offset = Point::new(-measured.width * fx, -measured.height * fy);
        let box_rect = Rect::new(offset.x, offset.y, measured.width, measured.height);

        self.draw_label_background(style, box_rect, position, angle);

        let size_px = style.font_size * self.scale;

        // Halo outline: the glyph mask stamped around the text before the
        // fill pass.
        if let Some(outline) = &style.outline {
            if let Some(halo) = font::rasterize(text, size_px, outline.color) {
                let w = outline.width.max(0.5);
                for (dx, dy) in [
                    (w, 0.0),
                    (-w, 0.0),
                    (0.0, w),
                    (0.0, -w),
                    (w, w),
                    (w, -w),
                    (-w, w),
                    (-w, -w),
                ] {
                    self.stamp_text_pixmap(&halo, offset + Point::new(dx, dy), position, angle);
                }
            }
        }

        if let Some(glyphs) = font::rasterize(text, size_px, style.color) {
            self.stamp_text_pixmap(&glyphs, offset, position, angle);
        }
    }

    fn measure_text(&self, text: &str, font_size: f64) -> Size {
        font::measure(text, font_size)
    }

    fn size(&self) -> Size {
        self.size
    }

    fn pixel_scale(&self) -> f64 {
        self.scale
    }
}

impl RasterSurface {
    /// Composites a pre-rasterized text pixmap. `offset` is the box origin
    /// relative to the anchor in render units; the pixmap itself is already
    /// at device resolution.
    fn stamp_text_pixmap(&mut self, glyphs: &Pixmap, offset: Point, position: Point, angle: f64) {
        let transform = Transform::scale(1.0 / self.scale, 1.0 / self.scale)
            .then_translate(offset.x, offset.y)
            .then_rotate(angle)
            .then_translate(position.x, position.y)
            .then_scale(self.scale, self.scale);
        self.pixmap.draw_pixmap(
            0,
            0,
            glyphs.as_ref(),
            &PixmapPaint::default(),
            Self::to_skia_transform(&transform),
            None,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_failure_is_reported() {
        // Saturates to u32::MAX per side; the byte length overflows and
        // tiny-skia refuses the pixmap instead of attempting the alloc.
        let result = RasterSurface::new(Size::new(5e9, 5e9), 1.0);
        assert!(matches!(result, Err(Error::SurfaceAllocation { .. })));
    }

    #[test]
    fn fill_covers_pixels() {
        let mut surface = RasterSurface::new(Size::new(10.0, 10.0), 1.0).unwrap();
        surface.clear(Color::rgb(10, 20, 30));
        let r = path::rect(Rect::new(2.0, 2.0, 6.0, 6.0));
        surface.fill_path(&r, Color::rgb(200, 0, 0), &Transform::IDENTITY);
        let image = surface.into_image();
        assert_eq!(image.get_pixel(5, 5).0[0], 200);
        assert_eq!(image.get_pixel(0, 0).0[0], 10);
    }

    #[test]
    fn pixel_scale_scales_device_size() {
        let surface = RasterSurface::new(Size::new(100.0, 50.0), 2.0).unwrap();
        let image = surface.into_image();
        assert_eq!(image.width(), 200);
        assert_eq!(image.height(), 100);
    }
}
