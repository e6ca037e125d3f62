//! The coordinate model: a shared-step grid derived from input bounds.
//!
//! Both axes use one step value (computed from the larger extent) so grid
//! cells stay visually square. The model is computed once per render pass
//! and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::axis::{divide, AxisData};
use crate::geom::{Point, Rect};

/// Fraction of one segment the axis line extends past the last mark, making
/// room for the axis arrowhead.
pub const AXIS_OVERSHOOT_RATIO: f64 = 0.4;

/// Per-axis descriptor: marks, origin mark, and arrowhead overshoot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    data: AxisData,
}

impl Axis {
    fn new(data: AxisData) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &AxisData {
        &self.data
    }

    /// Mark values from grid start to grid end inclusive.
    pub fn marks(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.marks()
    }

    pub fn start_value(&self) -> f64 {
        self.data.start_value
    }

    pub fn end_value(&self) -> f64 {
        self.data.end_value()
    }

    pub fn num_segments(&self) -> usize {
        self.data.num_segments
    }

    /// Index of the origin mark within [`Axis::marks`].
    pub fn origin_index(&self) -> usize {
        self.data.start_segments
    }

    /// The origin mark value (zero, or the grid extremity nearest zero).
    pub fn origin_value(&self) -> f64 {
        self.data.origin_value()
    }

    /// Value the axis line extends to past the last mark, for the arrowhead.
    pub fn overshoot_value(&self) -> f64 {
        self.data.end_value() + self.data.segment_value * AXIS_OVERSHOOT_RATIO
    }
}

/// Grid model shared by both axes of a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    segment_value: f64,
    value_rect: Rect,
    origin: Point,
    x_axis: Axis,
    y_axis: Axis,
}

impl Coordinate {
    /// Builds the grid model for the given value-space bounds.
    ///
    /// The step is divided from `max(width, height)` once and shared by both
    /// axes. A degenerate (zero-area) input is expanded to at least a unit
    /// extent per axis before any computation.
    pub fn new(rect: Rect, num_segments: usize) -> Self {
        let rect = if rect.is_degenerate() {
            tracing::debug!(?rect, "degenerate bounds, substituting unit extent");
            rect.with_min_extent(1.0)
        } else {
            rect
        };

        let range = rect.width().max(rect.height());
        let mut segment_value = divide(range, num_segments);
        if !(segment_value > 0.0) {
            segment_value = 1.0;
        }

        let x_axis = Axis::new(AxisData::new(rect.min_x(), rect.max_x(), segment_value));
        let y_axis = Axis::new(AxisData::new(rect.min_y(), rect.max_y(), segment_value));

        let value_rect = Rect::new(
            x_axis.start_value(),
            y_axis.start_value(),
            x_axis.data().length_value(),
            y_axis.data().length_value(),
        );
        let origin = Point::new(x_axis.origin_value(), y_axis.origin_value());

        Self {
            segment_value,
            value_rect,
            origin,
            x_axis,
            y_axis,
        }
    }

    /// The shared grid step.
    pub fn segment_value(&self) -> f64 {
        self.segment_value
    }

    /// Grid-aligned superset of the input bounds.
    pub fn value_rect(&self) -> Rect {
        self.value_rect
    }

    /// Value-space origin, clamped into the visible range when zero lies
    /// outside it.
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &Axis {
        &self.y_axis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_step_from_larger_extent() {
        // 100 wide, 40 tall: the step comes from the width.
        let coord = Coordinate::new(Rect::new(0.0, 0.0, 100.0, 40.0), 5);
        assert_eq!(coord.segment_value(), 20.0);
        assert_eq!(coord.x_axis().num_segments(), 5);
        assert_eq!(coord.y_axis().num_segments(), 2);
    }

    #[test]
    fn value_rect_contains_input() {
        let input = Rect::new(-3.0, 7.0, 50.0, 11.0);
        let coord = Coordinate::new(input, 5);
        let grid = coord.value_rect();
        assert!(grid.min_x() <= input.min_x());
        assert!(grid.min_y() <= input.min_y());
        assert!(grid.max_x() >= input.max_x());
        assert!(grid.max_y() >= input.max_y());
    }

    #[test]
    fn origin_straddling_zero() {
        let coord = Coordinate::new(Rect::new(-50.0, -50.0, 100.0, 100.0), 5);
        assert_eq!(coord.origin(), Point::new(0.0, 0.0));
    }

    #[test]
    fn origin_clamped_for_offset_bounds() {
        let coord = Coordinate::new(Rect::new(10.0, -90.0, 80.0, 80.0), 5);
        // X all positive: origin at the grid start. Y all negative: at the
        // grid end, nearest zero.
        assert_eq!(coord.origin().x, coord.x_axis().start_value());
        assert_eq!(coord.origin().y, coord.y_axis().end_value());
    }

    #[test]
    fn degenerate_rect_substituted() {
        let coord = Coordinate::new(Rect::new(5.0, 5.0, 0.0, 0.0), 5);
        assert!(coord.segment_value() > 0.0);
        assert!(coord.value_rect().width() >= 1.0);
        assert!(coord.value_rect().height() >= 1.0);
    }

    #[test]
    fn overshoot_extends_past_end() {
        let coord = Coordinate::new(Rect::new(0.0, 0.0, 100.0, 100.0), 5);
        let axis = coord.x_axis();
        assert!(axis.overshoot_value() > axis.end_value());
        assert!(axis.overshoot_value() - axis.end_value() < coord.segment_value());
    }

    #[test]
    fn coordinate_serde_roundtrip() {
        let coord = Coordinate::new(Rect::new(-3.0, 7.0, 50.0, 11.0), 5);
        let json = serde_json::to_string(&coord).unwrap();
        let back: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(coord, back);
    }

    #[test]
    fn spec_grid_example() {
        // Bounds (0, 0, 100, 100) at 5 segments: step 20, marks every 20.
        let coord = Coordinate::new(Rect::new(0.0, 0.0, 100.0, 100.0), 5);
        assert_eq!(coord.segment_value(), 20.0);
        let marks: Vec<f64> = coord.x_axis().marks().collect();
        assert_eq!(marks, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        assert_eq!(coord.x_axis().origin_index(), 0);
    }
}
