//! Triangle-mesh debugger.

use geoscope_core::geom::Point;

use crate::element::{Element, FaceElement, PointElement, SegmentElement, TextElement};
use crate::scene::Scene;
use crate::style::{Color, MarkerStyle, ShapeStyle, StrokeStyle, TextStyle};

/// Renders an indexed triangle mesh: translucent faces, edges, and indexed
/// vertices.
#[derive(Debug, Clone)]
pub struct MeshDebugger {
    vertices: Vec<Point>,
    indices: Vec<usize>,
    face_style: ShapeStyle,
    edge_stroke: StrokeStyle,
    vertex_marker: MarkerStyle,
    label_style: TextStyle,
    show_vertex_labels: bool,
    show_face_labels: bool,
}

impl MeshDebugger {
    /// Builds a mesh debugger from vertices and a flat triangle index list.
    ///
    /// The index list length must be a multiple of three and every index
    /// must address a vertex; both are construction contract violations,
    /// not recoverable inputs.
    pub fn new(vertices: Vec<Point>, indices: Vec<usize>) -> Self {
        assert!(
            indices.len() % 3 == 0,
            "triangle index list length {} is not a multiple of 3",
            indices.len()
        );
        assert!(
            indices.iter().all(|&i| i < vertices.len()),
            "triangle index out of range for {} vertices",
            vertices.len()
        );
        Self {
            vertices,
            indices,
            face_style: ShapeStyle::filled(Color::FACE),
            edge_stroke: StrokeStyle::new(Color::PRIMARY, 1.0),
            vertex_marker: MarkerStyle::default(),
            label_style: TextStyle::default(),
            show_vertex_labels: true,
            show_face_labels: true,
        }
    }

    pub fn with_face_style(self, face_style: ShapeStyle) -> Self {
        Self { face_style, ..self }
    }

    pub fn with_edge_stroke(self, edge_stroke: StrokeStyle) -> Self {
        Self {
            edge_stroke,
            ..self
        }
    }

    pub fn with_vertex_marker(self, vertex_marker: MarkerStyle) -> Self {
        Self {
            vertex_marker,
            ..self
        }
    }

    pub fn with_vertex_labels(self, show_vertex_labels: bool) -> Self {
        Self {
            show_vertex_labels,
            ..self
        }
    }

    pub fn with_face_labels(self, show_face_labels: bool) -> Self {
        Self {
            show_face_labels,
            ..self
        }
    }

    pub fn face_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn build(&self) -> Vec<Element> {
        let mut elements = Vec::new();

        // Faces first so edges and vertices draw on top of the fills.
        for (face, tri) in self.indices.chunks_exact(3).enumerate() {
            let corners = [
                self.vertices[tri[0]],
                self.vertices[tri[1]],
                self.vertices[tri[2]],
            ];
            let mut element = FaceElement::new(corners, self.face_style.clone());
            if self.show_face_labels {
                element = element.with_label(TextElement::new(face, self.label_style.clone()));
            }
            elements.push(element.into());
        }

        // Edges, trimmed to clear the vertex markers.
        let clearance = self.vertex_marker.size / 2.0 + 2.0;
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                elements.push(
                    SegmentElement::new(self.vertices[a], self.vertices[b])
                        .with_stroke(self.edge_stroke.clone())
                        .with_trims(clearance, clearance)
                        .into(),
                );
            }
        }

        for (i, vertex) in self.vertices.iter().enumerate() {
            let mut element = PointElement::new(*vertex, &self.vertex_marker);
            if self.show_vertex_labels {
                element = element.with_label(i, self.label_style.clone());
            }
            elements.push(element.into());
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

    fn quad() -> (Vec<Point>, Vec<usize>) {
        (
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
            ],
            vec![0, 1, 2, 0, 2, 3],
        )
    }

    #[test]
    fn element_counts() {
        let (vertices, indices) = quad();
        let debugger = MeshDebugger::new(vertices, indices);
        assert_eq!(debugger.face_count(), 2);
        let elements = debugger.build();
        // 2 faces + 6 edges + 4 vertices.
        assert_eq!(elements.len(), 12);
    }

    #[test]
    #[should_panic(expected = "not a multiple of 3")]
    fn partial_triangle_is_rejected() {
        let (vertices, _) = quad();
        MeshDebugger::new(vertices, vec![0, 1]);
    }

    #[test]
    #[should_panic(expected = "index out of range")]
    fn out_of_range_index_is_rejected() {
        let (vertices, _) = quad();
        MeshDebugger::new(vertices, vec![0, 1, 9]);
    }

    #[test]
    fn edges_are_trimmed_for_markers() {
        let (vertices, indices) = quad();
        let elements = MeshDebugger::new(vertices, indices).build();
        let trimmed = elements.iter().any(|e| match e {
            Element::Segment(s) => s.start_trim > 0.0 && s.end_trim > 0.0,
            _ => false,
        });
        assert!(trimmed);
    }
}
