//! Vector/ray debugger.

use geoscope_core::geom::{Point, Segment};

use crate::arrow::ArrowSpec;
use crate::element::{Element, SegmentElement, TextElement};
use crate::scene::Scene;
use crate::style::{StrokeStyle, TextStyle};

/// Renders directed vectors as arrows with optional rotatable labels along
/// the shaft.
#[derive(Debug, Clone)]
pub struct VectorDebugger {
    segments: Vec<Segment>,
    stroke: StrokeStyle,
    arrow: ArrowSpec,
    label_style: TextStyle,
    show_labels: bool,
}

impl VectorDebugger {
    pub fn new(segments: impl IntoIterator<Item = Segment>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
            stroke: StrokeStyle::default(),
            arrow: ArrowSpec::forward(),
            label_style: TextStyle::default(),
            show_labels: false,
        }
    }

    /// Vectors fanning out from a common origin.
    pub fn from_origin(origin: Point, vectors: impl IntoIterator<Item = Point>) -> Self {
        Self::new(
            vectors
                .into_iter()
                .map(|v| Segment::new(origin, origin + v)),
        )
    }

    pub fn with_stroke(self, stroke: StrokeStyle) -> Self {
        Self { stroke, ..self }
    }

    pub fn with_arrow(self, arrow: ArrowSpec) -> Self {
        Self { arrow, ..self }
    }

    pub fn with_labels(self, label_style: TextStyle) -> Self {
        Self {
            label_style,
            show_labels: true,
            ..self
        }
    }

    pub fn build(&self) -> Vec<Element> {
        self.segments
            .iter()
            .enumerate()
            .map(|(i, segment)| {
                let mut element = SegmentElement::new(segment.start, segment.end)
                    .with_stroke(self.stroke.clone())
                    .with_arrow(self.arrow);
                if self.show_labels {
                    element = element.with_center_label(
                        TextElement::new(i, self.label_style.clone()).with_rotatable(true),
                    );
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
