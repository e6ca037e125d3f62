//! Face elements: closed polygons with an optional centroid label.

use geoscope_core::geom::{Point, Rect, Transform};
use smallvec::SmallVec;

use crate::element::TextElement;
use crate::path;
use crate::style::ShapeStyle;
use crate::surface::DrawSurface;

/// A closed polygon through an ordered point list.
#[derive(Debug, Clone)]
pub struct FaceElement {
    pub points: SmallVec<[Point; 8]>,
    pub style: ShapeStyle,
    pub label: Option<TextElement>,
    pub transform: Transform,
}

impl FaceElement {
    pub fn new(points: impl IntoIterator<Item = Point>, style: ShapeStyle) -> Self {
        Self {
            points: points.into_iter().collect(),
            style,
            label: None,
            transform: Transform::IDENTITY,
        }
    }

    pub fn with_label(self, label: TextElement) -> Self {
        Self {
            label: Some(label),
            ..self
        }
    }

    pub fn applying(&self, transform: &Transform) -> Self {
        Self {
            transform: self.transform.then(transform),
            ..self.clone()
        }
    }

    /// Winding orientation via the shoelace sum
    /// `sum (next.x - cur.x) * (next.y + cur.y)`; positive means
    /// counter-clockwise.
    pub fn is_ccw(&self) -> bool {
        shoelace_sum(&self.points) > 0.0
    }

    /// Area-weighted polygon centroid in local space. Degenerate (near
    /// zero-area) polygons fall back to the vertex mean.
    pub fn centroid(&self) -> Point {
        polygon_centroid(&self.points)
    }

    pub fn content_bounds(&self) -> Rect {
        let Some((first, rest)) = self.points.split_first() else {
            return Rect::default();
        };
        let mut bounds = Rect {
            origin: self.transform.apply(*first),
            size: Default::default(),
        };
        for p in rest {
            bounds = bounds.union_point(self.transform.apply(*p));
        }
        bounds
    }

    pub fn render(&self, transform: &Transform, surface: &mut dyn DrawSurface) {
        if self.points.len() < 3 {
            return;
        }
        let effective = self.transform.then(transform);
        let polygon = path::polygon(&self.points, true);
        if let Some(fill) = self.style.fill {
            surface.fill_path(&polygon, fill, &effective);
        }
        if let Some(stroke) = &self.style.stroke {
            surface.stroke_path(&polygon, stroke, &effective);
        }
        if let Some(label) = &self.label {
            let anchor = effective.apply(self.centroid());
            label.render(&Transform::translation(anchor.x, anchor.y), surface);
        }
    }
}

fn shoelace_sum(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let cur = points[i];
        let next = points[(i + 1) % n];
        sum += (next.x - cur.x) * (next.y + cur.y);
    }
    sum
}

fn polygon_centroid(points: &[Point]) -> Point {
    let n = points.len();
    if n == 0 {
        return Point::ZERO;
    }
    let mut area2 = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let cur = points[i];
        let next = points[(i + 1) % n];
        let cross = cur.x * next.y - next.x * cur.y;
        area2 += cross;
        cx += (cur.x + next.x) * cross;
        cy += (cur.y + next.y) * cross;
    }
    if area2.abs() <= 1e-12 {
        let mut mean = Point::ZERO;
        for p in points {
            mean = mean + *p;
        }
        return mean / n as f64;
    }
    Point::new(cx / (3.0 * area2), cy / (3.0 * area2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    fn triangle() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 3.0),
        ]
    }

    #[test]
    fn orientation_follows_shoelace_sign() {
        let ccw = FaceElement::new(triangle(), ShapeStyle::filled(Color::FACE));
        let cw = FaceElement::new(triangle().into_iter().rev(), ShapeStyle::filled(Color::FACE));
        // For this vertex order the sum (next.x-cur.x)(next.y+cur.y) is
        // negative, so the reversed order is the counter-clockwise one.
        assert!(!ccw.is_ccw());
        assert!(cw.is_ccw());
    }

    #[test]
    fn centroid_of_triangle() {
        let face = FaceElement::new(triangle(), ShapeStyle::filled(Color::FACE));
        let c = face.centroid();
        assert!((c.x - 4.0 / 3.0).abs() < 1e-9);
        assert!((c.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_polygon_centroid_is_vertex_mean() {
        let face = FaceElement::new(
            vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(4.0, 0.0)],
            ShapeStyle::filled(Color::FACE),
        );
        let c = face.centroid();
        assert!((c.x - 2.0).abs() < 1e-9);
        assert_eq!(c.y, 0.0);
    }

    #[test]
    fn bounds_cover_all_points() {
        let face = FaceElement::new(triangle(), ShapeStyle::filled(Color::FACE));
        assert_eq!(face.content_bounds(), Rect::new(0.0, 0.0, 4.0, 3.0));
    }

    #[test]
    fn empty_face_has_empty_bounds() {
        let face = FaceElement::new(Vec::new(), ShapeStyle::filled(Color::FACE));
        assert_eq!(face.content_bounds(), Rect::default());
    }
}
