//! Parametric arrow construction: tip polygons plus body lines combined
//! into strokeable/fillable paths.
//!
//! A tip is built at the origin pointing along +X and rotated/translated to
//! each decorated endpoint. The body line is shrunk under solid tips so the
//! stroke does not poke out of the point.

use geoscope_core::geom::{Point, Segment};
use lyon::path::Path;
use serde::{Deserialize, Serialize};

use crate::path;

/// Geometry of a single arrow tip, local space, apex at the origin,
/// pointing along +X.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrowTip {
    /// Half opening angle in radians between the shaft and each barb.
    pub angle: f64,
    /// Distance from apex to the barb ends.
    pub length: f64,
    pub shape: TipShape,
    pub anchor: TipAnchor,
}

/// Visual style of the tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipShape {
    /// Filled triangle.
    Triangle,
    /// Two stroked barb lines (open chevron).
    Lines,
}

/// Where the tip sits relative to the decorated endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipAnchor {
    /// Apex exactly on the endpoint; the body retreats under the tip.
    Tip,
    /// Barb ends on the endpoint; the apex extends past it.
    Base,
}

impl ArrowTip {
    pub fn new(angle: f64, length: f64) -> Self {
        Self {
            angle,
            length,
            shape: TipShape::Triangle,
            anchor: TipAnchor::Tip,
        }
    }

    pub fn with_shape(self, shape: TipShape) -> Self {
        Self { shape, ..self }
    }

    pub fn with_anchor(self, anchor: TipAnchor) -> Self {
        Self { anchor, ..self }
    }

    /// Apex and the two barb corners in local space (+X is the arrow
    /// direction).
    fn local_points(&self) -> [Point; 3] {
        let back = -self.length;
        let half_width = self.length * self.angle.tan();
        [
            Point::ZERO,
            Point::new(back, half_width),
            Point::new(back, -half_width),
        ]
    }

    /// Tip points placed at `at`, pointing along `angle`.
    fn placed(&self, at: Point, angle: f64) -> [Point; 3] {
        let shift = match self.anchor {
            TipAnchor::Tip => 0.0,
            TipAnchor::Base => self.length,
        };
        self.local_points().map(|p| {
            Point::new(p.x + shift, p.y)
                .rotated_around(Point::ZERO, angle)
                + at
        })
    }

    /// Body clearance the tip needs at its endpoint.
    fn body_trim(&self) -> f64 {
        match (self.shape, self.anchor) {
            // A filled triangle hides the body under itself; retreat most of
            // the tip length so anti-aliased stroke ends stay covered.
            (TipShape::Triangle, TipAnchor::Tip) => self.length * 0.8,
            _ => 0.0,
        }
    }
}

impl Default for ArrowTip {
    fn default() -> Self {
        Self::new(25f64.to_radians(), 10.0)
    }
}

/// Which endpoints carry tips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ArrowDirection {
    /// Tip at the end point.
    #[default]
    Forward,
    /// Tip at the start point.
    Reverse,
    /// Tips at both ends.
    Double,
}

/// Body line style.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    Single,
    /// Two parallel lines offset either side of the segment.
    Double { spacing: f64 },
}

/// Complete arrow description attached to a segment element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrowSpec {
    pub tip: ArrowTip,
    pub direction: ArrowDirection,
    pub line: LineStyle,
}

impl ArrowSpec {
    pub fn forward() -> Self {
        Self {
            tip: ArrowTip::default(),
            direction: ArrowDirection::Forward,
            line: LineStyle::Single,
        }
    }

    pub fn double() -> Self {
        Self {
            direction: ArrowDirection::Double,
            ..Self::forward()
        }
    }

    pub fn with_tip(self, tip: ArrowTip) -> Self {
        Self { tip, ..self }
    }

    pub fn with_direction(self, direction: ArrowDirection) -> Self {
        Self { direction, ..self }
    }

    pub fn with_line(self, line: LineStyle) -> Self {
        Self { line, ..self }
    }

    fn tip_at_start(&self) -> bool {
        matches!(self.direction, ArrowDirection::Reverse | ArrowDirection::Double)
    }

    fn tip_at_end(&self) -> bool {
        matches!(self.direction, ArrowDirection::Forward | ArrowDirection::Double)
    }

    /// Builds the body and tip paths for the segment from `start` to `end`.
    ///
    /// Zero-length segments produce empty paths (nothing to point along).
    pub fn build_paths(&self, start: Point, end: Point) -> ArrowPaths {
        let segment = Segment::new(start, end);
        let Some(_) = segment.direction() else {
            return ArrowPaths::empty(self.tip.shape);
        };
        let angle = segment.angle();

        let trim = self.tip.body_trim();
        let mut body = segment;
        if self.tip_at_start() {
            body = body.shrinking_start(trim);
        }
        if self.tip_at_end() {
            body = body.shrinking_end(trim);
        }

        let body_path = match self.line {
            LineStyle::Single => path::line(body.start, body.end),
            LineStyle::Double { spacing } => {
                let half = spacing / 2.0;
                let a = body.offsetting(half);
                let b = body.offsetting(-half);
                path::polyline_pair(a, b)
            }
        };

        let mut tips = Vec::new();
        if self.tip_at_end() {
            tips.push(self.tip.placed(end, angle));
        }
        if self.tip_at_start() {
            tips.push(self.tip.placed(start, angle + std::f64::consts::PI));
        }
        let tip_path = build_tip_path(&tips, self.tip.shape);

        ArrowPaths {
            body: body_path,
            tips: tip_path,
            fill_tips: self.tip.shape == TipShape::Triangle,
        }
    }
}

impl Default for ArrowSpec {
    fn default() -> Self {
        Self::forward()
    }
}

/// Paths produced by [`ArrowSpec::build_paths`]. The body is always
/// stroked; triangle tips are filled (and stroked for crisp corners),
/// chevron tips are stroked only.
#[derive(Debug, Clone)]
pub struct ArrowPaths {
    pub body: Path,
    pub tips: Path,
    pub fill_tips: bool,
}

impl ArrowPaths {
    fn empty(shape: TipShape) -> Self {
        Self {
            body: Path::builder().build(),
            tips: Path::builder().build(),
            fill_tips: shape == TipShape::Triangle,
        }
    }
}

fn build_tip_path(tips: &[[Point; 3]], shape: TipShape) -> Path {
    let mut builder = Path::builder();
    for [apex, barb_a, barb_b] in tips {
        let to = |p: &Point| lyon::math::point(p.x as f32, p.y as f32);
        match shape {
            TipShape::Triangle => {
                builder.begin(to(apex));
                builder.line_to(to(barb_a));
                builder.line_to(to(barb_b));
                builder.close();
            }
            TipShape::Lines => {
                builder.begin(to(barb_a));
                builder.line_to(to(apex));
                builder.line_to(to(barb_b));
                builder.end(false);
            }
        }
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::bounds;

    #[test]
    fn forward_arrow_has_one_tip() {
        let paths = ArrowSpec::forward().build_paths(Point::ZERO, Point::new(100.0, 0.0));
        let tip_bounds = bounds(&paths.tips);
        // Tip apex at the end point, extending backwards.
        assert!((tip_bounds.max_x() - 100.0).abs() < 1e-3);
        assert!(tip_bounds.min_x() > 80.0);
        assert!(paths.fill_tips);
    }

    #[test]
    fn double_arrow_tips_at_both_ends() {
        let paths = ArrowSpec::double().build_paths(Point::ZERO, Point::new(100.0, 0.0));
        let tip_bounds = bounds(&paths.tips);
        assert!(tip_bounds.min_x() < 1e-3);
        assert!((tip_bounds.max_x() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn body_retreats_under_triangle_tip() {
        let spec = ArrowSpec::forward();
        let paths = spec.build_paths(Point::ZERO, Point::new(100.0, 0.0));
        let body_bounds = bounds(&paths.body);
        assert!(body_bounds.max_x() < 100.0);
        assert_eq!(body_bounds.min_x(), 0.0);
    }

    #[test]
    fn base_anchor_extends_past_endpoint() {
        let tip = ArrowTip::default().with_anchor(TipAnchor::Base);
        let spec = ArrowSpec::forward().with_tip(tip);
        let paths = spec.build_paths(Point::ZERO, Point::new(50.0, 0.0));
        let tip_bounds = bounds(&paths.tips);
        assert!(tip_bounds.max_x() > 50.0);
    }

    #[test]
    fn double_line_straddles_segment() {
        let spec = ArrowSpec::forward().with_line(LineStyle::Double { spacing: 6.0 });
        let paths = spec.build_paths(Point::ZERO, Point::new(100.0, 0.0));
        let body_bounds = bounds(&paths.body);
        assert!((body_bounds.min_y() + 3.0).abs() < 1e-3);
        assert!((body_bounds.max_y() - 3.0).abs() < 1e-3);
    }

    #[test]
    fn zero_length_segment_builds_nothing() {
        let paths = ArrowSpec::forward().build_paths(Point::ZERO, Point::ZERO);
        assert!(paths.body.iter().next().is_none());
        assert!(paths.tips.iter().next().is_none());
    }

    #[test]
    fn chevron_tips_are_not_filled() {
        let tip = ArrowTip::default().with_shape(TipShape::Lines);
        let spec = ArrowSpec::forward().with_tip(tip);
        let paths = spec.build_paths(Point::ZERO, Point::new(10.0, 0.0));
        assert!(!paths.fill_tips);
    }
}
