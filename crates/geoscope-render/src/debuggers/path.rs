//! Polyline path debugger.

use geoscope_core::geom::Point;

use crate::element::{Element, PointElement, SegmentElement};
use crate::scene::Scene;
use crate::style::{MarkerStyle, StrokeStyle};

/// Renders an open or closed polyline with optional vertex markers.
#[derive(Debug, Clone)]
pub struct PathDebugger {
    points: Vec<Point>,
    closed: bool,
    stroke: StrokeStyle,
    vertex_marker: Option<MarkerStyle>,
}

impl PathDebugger {
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
            closed: false,
            stroke: StrokeStyle::default(),
            vertex_marker: Some(MarkerStyle::default().with_size(5.0)),
        }
    }

    pub fn closed(self, closed: bool) -> Self {
        Self { closed, ..self }
    }

    pub fn with_stroke(self, stroke: StrokeStyle) -> Self {
        Self { stroke, ..self }
    }

    pub fn with_vertex_marker(self, marker: Option<MarkerStyle>) -> Self {
        Self {
            vertex_marker: marker,
            ..self
        }
    }

    pub fn build(&self) -> Vec<Element> {
        let mut elements = Vec::new();
        if self.points.len() >= 2 {
            let clearance = self
                .vertex_marker
                .as_ref()
                .map(|m| m.size / 2.0 + 2.0)
                .unwrap_or(0.0);
            let mut pairs: Vec<(Point, Point)> = self
                .points
                .windows(2)
                .map(|pair| (pair[0], pair[1]))
                .collect();
            if self.closed && self.points.len() > 2 {
                pairs.push((self.points[self.points.len() - 1], self.points[0]));
            }
            for (a, b) in pairs {
                elements.push(
                    SegmentElement::new(a, b)
                        .with_stroke(self.stroke.clone())
                        .with_trims(clearance, clearance)
                        .into(),
                );
            }
        }
        if let Some(marker) = &self.vertex_marker {
            for p in &self.points {
                elements.push(PointElement::new(*p, marker).into());
            }
        }
        elements
    }

    pub fn scene(&self) -> Scene {
        let mut scene = Scene::new();
        scene.extend(self.build());
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zigzag() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 2.0),
        ]
    }

    #[test]
    fn open_path_segment_count() {
        let elements = PathDebugger::new(zigzag()).with_vertex_marker(None).build();
        assert_eq!(elements.len(), 3);
    }

    #[test]
    fn closed_path_adds_return_segment() {
        let elements = PathDebugger::new(zigzag())
            .closed(true)
            .with_vertex_marker(None)
            .build();
        assert_eq!(elements.len(), 4);
        let Element::Segment(last) = &elements[3] else {
            panic!("expected segment");
        };
        assert_eq!(last.end, Point::new(0.0, 0.0));
    }

    #[test]
    fn markers_add_point_elements() {
        let elements = PathDebugger::new(zigzag()).build();
        let markers = elements
            .iter()
            .filter(|e| matches!(e, Element::Point(_)))
            .count();
        assert_eq!(markers, 4);
    }

    #[test]
    fn single_point_renders_marker_only() {
        let elements = PathDebugger::new(vec![Point::ZERO]).build();
        assert_eq!(elements.len(), 1);
        assert!(matches!(elements[0], Element::Point(_)));
    }
}
