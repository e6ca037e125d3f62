//! Point-set debugger.

use geoscope_core::geom::Point;

use crate::element::{Element, PointElement};
use crate::scene::Scene;
use crate::style::{MarkerStyle, TextStyle};

/// Renders a set of points as markers with optional index labels.
#[derive(Debug, Clone)]
pub struct PointsDebugger {
    points: Vec<Point>,
    marker: MarkerStyle,
    label_style: TextStyle,
    show_indices: bool,
}

impl PointsDebugger {
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
            marker: MarkerStyle::default(),
            label_style: TextStyle::default(),
            show_indices: true,
        }
    }

    pub fn with_marker(self, marker: MarkerStyle) -> Self {
        Self { marker, ..self }
    }

    pub fn with_label_style(self, label_style: TextStyle) -> Self {
        Self {
            label_style,
            ..self
        }
    }

    pub fn with_indices(self, show_indices: bool) -> Self {
        Self {
            show_indices,
            ..self
        }
    }

    pub fn build(&self) -> Vec<Element> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let mut element = PointElement::new(*p, &self.marker);
                if self.show_indices {
                    element = element.with_label(i, self.label_style.clone());
                }
                element.into()
            })
            .collect()
    }

    pub fn scene(&self) -> Scene {
        let mut scene = Scene::new();
        scene.extend(self.build());
        scene
    }
}
