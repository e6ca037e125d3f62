//! Vector path construction and conversion to the raster backend.
//!
//! Elements build lyon paths in their local space; rendering applies an
//! affine transform point-wise while converting to a tiny-skia path, so
//! stroke widths stay in pixel space.

use geoscope_core::geom::{Point, Rect, Transform};
use lyon::algorithms::aabb::bounding_box;
use lyon::math::point;
use lyon::path::Path;

use crate::style::MarkerShape;

/// Cubic Bezier circle approximation constant.
const KAPPA: f32 = 0.552_284_75;

/// Local bounding rect of a path. Empty paths bound to a zero rect.
pub fn bounds(path: &Path) -> Rect {
    if path.iter().next().is_none() {
        return Rect::default();
    }
    let aabb = bounding_box(path.iter());
    Rect::new(
        aabb.min.x as f64,
        aabb.min.y as f64,
        (aabb.max.x - aabb.min.x) as f64,
        (aabb.max.y - aabb.min.y) as f64,
    )
}

/// A single line segment path.
pub fn line(a: Point, b: Point) -> Path {
    let mut builder = Path::builder();
    builder.begin(point(a.x as f32, a.y as f32));
    builder.line_to(point(b.x as f32, b.y as f32));
    builder.end(false);
    builder.build()
}

/// Two parallel open line subpaths in one path (double-line arrow bodies).
pub fn polyline_pair(a: geoscope_core::geom::Segment, b: geoscope_core::geom::Segment) -> Path {
    let mut builder = Path::builder();
    for seg in [a, b] {
        builder.begin(point(seg.start.x as f32, seg.start.y as f32));
        builder.line_to(point(seg.end.x as f32, seg.end.y as f32));
        builder.end(false);
    }
    builder.build()
}

/// A polyline through `points`, optionally closed.
pub fn polygon(points: &[Point], close: bool) -> Path {
    let mut builder = Path::builder();
    if let Some((first, rest)) = points.split_first() {
        builder.begin(point(first.x as f32, first.y as f32));
        for p in rest {
            builder.line_to(point(p.x as f32, p.y as f32));
        }
        if close {
            builder.close();
        } else {
            builder.end(false);
        }
    }
    builder.build()
}

/// An axis-aligned rectangle path.
pub fn rect(r: Rect) -> Path {
    polygon(&r.corners(), true)
}

/// A circle approximated by four cubic Bezier arcs.
pub fn circle(center: Point, radius: f64) -> Path {
    let cx = center.x as f32;
    let cy = center.y as f32;
    let r = radius as f32;
    let k = KAPPA * r;
    let mut builder = Path::builder();
    builder.begin(point(cx + r, cy));
    builder.cubic_bezier_to(point(cx + r, cy + k), point(cx + k, cy + r), point(cx, cy + r));
    builder.cubic_bezier_to(point(cx - k, cy + r), point(cx - r, cy + k), point(cx - r, cy));
    builder.cubic_bezier_to(point(cx - r, cy - k), point(cx - k, cy - r), point(cx, cy - r));
    builder.cubic_bezier_to(point(cx + k, cy - r), point(cx + r, cy - k), point(cx + r, cy));
    builder.close();
    builder.build()
}

/// A rectangle with rounded corners. A radius of at least half the shorter
/// edge produces a capsule.
pub fn rounded_rect(r: Rect, radius: f64) -> Path {
    let radius = radius.min(r.size.min_edge() / 2.0);
    if radius <= 0.0 {
        return rect(r);
    }
    let x = r.min_x() as f32;
    let y = r.min_y() as f32;
    let w = r.width() as f32;
    let h = r.height() as f32;
    let rad = radius as f32;
    let mut builder = Path::builder();
    builder.begin(point(x + rad, y));
    builder.line_to(point(x + w - rad, y));
    builder.quadratic_bezier_to(point(x + w, y), point(x + w, y + rad));
    builder.line_to(point(x + w, y + h - rad));
    builder.quadratic_bezier_to(point(x + w, y + h), point(x + w - rad, y + h));
    builder.line_to(point(x + rad, y + h));
    builder.quadratic_bezier_to(point(x, y + h), point(x, y + h - rad));
    builder.line_to(point(x, y + rad));
    builder.quadratic_bezier_to(point(x, y), point(x + rad, y));
    builder.close();
    builder.build()
}

/// A marker glyph centered at the origin with the given pixel diameter.
pub fn marker(shape: MarkerShape, size: f64) -> Path {
    let half = size / 2.0;
    match shape {
        MarkerShape::Circle => circle(Point::ZERO, half),
        MarkerShape::Square => rect(Rect::new(-half, -half, size, size)),
        MarkerShape::Diamond => polygon(
            &[
                Point::new(0.0, -half),
                Point::new(half, 0.0),
                Point::new(0.0, half),
                Point::new(-half, 0.0),
            ],
            true,
        ),
        MarkerShape::Cross => {
            let mut builder = Path::builder();
            let h = half as f32;
            builder.begin(point(-h, -h));
            builder.line_to(point(h, h));
            builder.end(false);
            builder.begin(point(-h, h));
            builder.line_to(point(h, -h));
            builder.end(false);
            builder.build()
        }
    }
}

/// Converts a lyon path to a tiny-skia path, applying `transform` to every
/// point. Returns `None` for empty or fully degenerate paths.
pub fn to_skia(path: &Path, transform: &Transform) -> Option<tiny_skia::Path> {
    let map = |p: lyon::math::Point| {
        let mapped = transform.apply(Point::new(p.x as f64, p.y as f64));
        (mapped.x as f32, mapped.y as f32)
    };
    let mut pb = tiny_skia::PathBuilder::new();
    for event in path.iter() {
        match event {
            lyon::path::Event::Begin { at } => {
                let (x, y) = map(at);
                pb.move_to(x, y);
            }
            lyon::path::Event::Line { to, .. } => {
                let (x, y) = map(to);
                pb.line_to(x, y);
            }
            lyon::path::Event::Quadratic { ctrl, to, .. } => {
                let (cx, cy) = map(ctrl);
                let (x, y) = map(to);
                pb.quad_to(cx, cy, x, y);
            }
            lyon::path::Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => {
                let (c1x, c1y) = map(ctrl1);
                let (c2x, c2y) = map(ctrl2);
                let (x, y) = map(to);
                pb.cubic_to(c1x, c1y, c2x, c2y, x, y);
            }
            lyon::path::Event::End { close, .. } => {
                if close {
                    pb.close();
                }
            }
        }
    }
    pb.finish()
}
