//! Element render-contract tests against a recording surface.
//!
//! A mock `DrawSurface` captures the draw calls, making the transform
//! decomposition rules observable: upright content must shed rotation and
//! scale, rotatable text must normalize its angle.

use std::f64::consts::{FRAC_PI_4, PI};

use geoscope_core::geom::{Point, Size, Transform};
use geoscope_render::element::{PointElement, SegmentElement, TextElement};
use geoscope_render::{
    ArrowSpec, Color, DrawSurface, MarkerStyle, StrokeStyle, TextStyle,
};

#[derive(Default)]
struct Recorder {
    fills: Vec<Transform>,
    strokes: Vec<Transform>,
    texts: Vec<(String, Point, f64)>,
}

impl DrawSurface for Recorder {
    fn fill_path(&mut self, _path: &lyon::path::Path, _color: Color, transform: &Transform) {
        self.fills.push(*transform);
    }

    fn stroke_path(
        &mut self,
        _path: &lyon::path::Path,
        _stroke: &StrokeStyle,
        transform: &Transform,
    ) {
        self.strokes.push(*transform);
    }

    fn draw_text(&mut self, text: &str, _style: &TextStyle, position: Point, angle: f64) {
        self.texts.push((text.to_string(), position, angle));
    }

    fn measure_text(&self, text: &str, font_size: f64) -> Size {
        Size::new(text.chars().count() as f64 * font_size * 0.6, font_size)
    }

    fn size(&self) -> Size {
        Size::new(800.0, 600.0)
    }

    fn pixel_scale(&self) -> f64 {
        1.0
    }
}

/// A transform with scale, rotation, and translation all present.
fn busy_transform() -> Transform {
    Transform::scale(3.0, 3.0)
        .then_rotate(FRAC_PI_4)
        .then_translate(100.0, 200.0)
}

#[test]
fn upright_text_sheds_rotation() {
    let mut surface = Recorder::default();
    let label = TextElement::new("anchor", TextStyle::default())
        .with_transform(Transform::translation(10.0, 0.0));
    label.render(&busy_transform(), &mut surface);

    let (text, position, angle) = &surface.texts[0];
    assert_eq!(text, "anchor");
    assert_eq!(*angle, 0.0);
    // The anchor position still went through the full transform.
    let expected = Transform::translation(10.0, 0.0)
        .then(&busy_transform())
        .apply(Point::ZERO);
    assert!((position.x - expected.x).abs() < 1e-9);
    assert!((position.y - expected.y).abs() < 1e-9);
}

#[test]
fn rotatable_text_follows_transform_angle() {
    let mut surface = Recorder::default();
    let label = TextElement::new("along", TextStyle::default()).with_rotatable(true);
    label.render(&Transform::rotation(0.3), &mut surface);
    let (_, _, angle) = &surface.texts[0];
    assert!((angle - 0.3).abs() < 1e-9);
}

#[test]
fn rotatable_text_never_renders_upside_down() {
    let mut surface = Recorder::default();
    let label = TextElement::new("flip", TextStyle::default()).with_rotatable(true);
    // A transform pointing into the left half-plane: 3/4 turn.
    label.render(&Transform::rotation(0.75 * PI), &mut surface);
    let (_, _, angle) = &surface.texts[0];
    assert!(
        (-FRAC_PI_4 - angle).abs() < 1e-9,
        "expected -pi/4, got {angle}"
    );
}

#[test]
fn point_marker_keeps_pixel_size() {
    let mut surface = Recorder::default();
    let element = PointElement::new(Point::new(2.0, 2.0), &MarkerStyle::default());
    element.render(&busy_transform(), &mut surface);

    // The marker fill must arrive with a pure translation: no scale, no
    // rotation leaks into the pixel-sized glyph.
    let t = surface.fills[0];
    assert_eq!(t.a, 1.0);
    assert_eq!(t.b, 0.0);
    assert_eq!(t.c, 0.0);
    assert_eq!(t.d, 1.0);
    let expected = busy_transform().apply(Point::new(2.0, 2.0));
    assert!((t.tx - expected.x).abs() < 1e-9);
    assert!((t.ty - expected.y).abs() < 1e-9);
}

#[test]
fn point_label_offsets_in_pixels() {
    let mut surface = Recorder::default();
    let element = PointElement::new(Point::ZERO, &MarkerStyle::default())
        .with_label("v", TextStyle::default())
        .with_label_offset(Point::new(10.0, -5.0));
    element.render(&Transform::scale(50.0, 50.0), &mut surface);

    let (_, position, _) = &surface.texts[0];
    // Marker lands at the scaled anchor; the label offset is not scaled.
    assert!((position.x - 10.0).abs() < 1e-9);
    assert!((position.y + 5.0).abs() < 1e-9);
}

#[test]
fn segment_center_label_uses_segment_angle() {
    let mut surface = Recorder::default();
    let element = SegmentElement::new(Point::ZERO, Point::new(10.0, 10.0)).with_center_label(
        TextElement::new("d", TextStyle::default()).with_rotatable(true),
    );
    element.render(&Transform::IDENTITY, &mut surface);
    let (_, position, angle) = &surface.texts[0];
    assert!((angle - FRAC_PI_4).abs() < 1e-9);
    assert!((position.x - 5.0).abs() < 1e-9);
    assert!((position.y - 5.0).abs() < 1e-9);
}

#[test]
fn segment_trims_shorten_stroked_line() {
    let mut surface = Recorder::default();
    let plain = SegmentElement::new(Point::ZERO, Point::new(100.0, 0.0));
    plain.render(&Transform::IDENTITY, &mut surface);
    // Identity transform passed straight through for pre-mapped geometry.
    assert_eq!(surface.strokes.len(), 1);

    let trimmed = SegmentElement::new(Point::ZERO, Point::new(100.0, 0.0)).with_trims(10.0, 10.0);
    let mut surface2 = Recorder::default();
    trimmed.render(&Transform::IDENTITY, &mut surface2);
    assert_eq!(surface2.strokes.len(), 1);
}

#[test]
fn arrow_segments_fill_their_tips() {
    let mut surface = Recorder::default();
    let element =
        SegmentElement::new(Point::ZERO, Point::new(100.0, 0.0)).with_arrow(ArrowSpec::forward());
    element.render(&Transform::IDENTITY, &mut surface);
    assert_eq!(surface.fills.len(), 1, "triangle tip fill");
    assert_eq!(surface.strokes.len(), 2, "body and tip outline");
}

#[test]
fn endpoint_decorations_receive_segment_frame() {
    let mut surface = Recorder::default();
    let marker = PointElement::new(Point::ZERO, &MarkerStyle::default());
    let element = SegmentElement::new(Point::ZERO, Point::new(0.0, 50.0))
        .with_end_endpoint(marker);
    element.render(&Transform::IDENTITY, &mut surface);
    // The endpoint marker is upright content: it renders translated to the
    // segment end with no rotation residue.
    let t = surface.fills[0];
    assert_eq!((t.a, t.b, t.c, t.d), (1.0, 0.0, 0.0, 1.0));
    assert!((t.tx - 0.0).abs() < 1e-9);
    assert!((t.ty - 50.0).abs() < 1e-9);
}
