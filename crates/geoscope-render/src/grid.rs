//! Grid, axis, and mark-label rendering.

use geoscope_core::coordinate::Coordinate;
use geoscope_core::geom::{Point, RectAlign, Transform};
use geoscope_core::projection::Projection;

use crate::arrow::ArrowSpec;
use crate::element::format_number;
use crate::style::{Color, StrokeStyle, TextStyle};
use crate::surface::DrawSurface;

/// Gap between an axis line and its mark labels, render pixels.
const LABEL_GAP: f64 = 6.0;

const GRID_STROKE_WIDTH: f64 = 1.0;
const AXIS_STROKE_WIDTH: f64 = 1.5;

/// Formats every mark label on both axes, for width measurement.
pub(crate) fn mark_labels(coordinate: &Coordinate) -> Vec<String> {
    coordinate
        .x_axis()
        .marks()
        .chain(coordinate.y_axis().marks())
        .map(format_number)
        .collect()
}

/// Draws grid lines, the two axis lines with arrowheads, and mark labels.
pub(crate) fn render(
    coordinate: &Coordinate,
    projection: &Projection,
    label_font_size: f64,
    surface: &mut dyn DrawSurface,
) {
    let composite = projection.composite();
    render_grid_lines(coordinate, &composite, surface);
    render_axes(coordinate, &composite, surface);
    render_labels(coordinate, &composite, label_font_size, surface);
}

fn render_grid_lines(coordinate: &Coordinate, composite: &Transform, surface: &mut dyn DrawSurface) {
    let grid_stroke = StrokeStyle::new(Color::GRID, GRID_STROKE_WIDTH);
    let value = coordinate.value_rect();
    for x in coordinate.x_axis().marks() {
        let a = composite.apply(Point::new(x, value.min_y()));
        let b = composite.apply(Point::new(x, value.max_y()));
        surface.stroke_path(&crate::path::line(a, b), &grid_stroke, &Transform::IDENTITY);
    }
    for y in coordinate.y_axis().marks() {
        let a = composite.apply(Point::new(value.min_x(), y));
        let b = composite.apply(Point::new(value.max_x(), y));
        surface.stroke_path(&crate::path::line(a, b), &grid_stroke, &Transform::IDENTITY);
    }
}

fn render_axes(coordinate: &Coordinate, composite: &Transform, surface: &mut dyn DrawSurface) {
    let stroke = StrokeStyle::new(Color::AXIS, AXIS_STROKE_WIDTH);
    let origin = coordinate.origin();
    let arrow = ArrowSpec::forward();

    let x_start = composite.apply(Point::new(coordinate.x_axis().start_value(), origin.y));
    let x_end = composite.apply(Point::new(coordinate.x_axis().overshoot_value(), origin.y));
    let y_start = composite.apply(Point::new(origin.x, coordinate.y_axis().start_value()));
    let y_end = composite.apply(Point::new(origin.x, coordinate.y_axis().overshoot_value()));

    for (start, end) in [(x_start, x_end), (y_start, y_end)] {
        let paths = arrow.build_paths(start, end);
        surface.stroke_path(&paths.body, &stroke, &Transform::IDENTITY);
        if paths.fill_tips {
            surface.fill_path(&paths.tips, stroke.color, &Transform::IDENTITY);
        }
        surface.stroke_path(&paths.tips, &stroke, &Transform::IDENTITY);
    }
}

fn render_labels(
    coordinate: &Coordinate,
    composite: &Transform,
    label_font_size: f64,
    surface: &mut dyn DrawSurface,
) {
    let origin = coordinate.origin();
    let x_axis = coordinate.x_axis();
    let y_axis = coordinate.y_axis();

    // X labels hang below the axis line; the label at the origin mark moves
    // diagonally down-left so it clears the y-axis line.
    let below = TextStyle::new(label_font_size)
        .with_color(Color::LABEL)
        .with_align(RectAlign::TopCenter);
    let below_left = TextStyle::new(label_font_size)
        .with_color(Color::LABEL)
        .with_align(RectAlign::TopRight);
    for (i, x) in x_axis.marks().enumerate() {
        let at = composite.apply(Point::new(x, origin.y));
        if i == x_axis.origin_index() {
            surface.draw_text(
                &format_number(x),
                &below_left,
                at + Point::new(-LABEL_GAP, LABEL_GAP),
                0.0,
            );
        } else {
            surface.draw_text(&format_number(x), &below, at + Point::new(0.0, LABEL_GAP), 0.0);
        }
    }

    // Y labels sit left of the axis line. When both origins share a value
    // (the usual shared zero) the corner is already labelled by the x pass.
    let left = TextStyle::new(label_font_size)
        .with_color(Color::LABEL)
        .with_align(RectAlign::MidRight);
    let shared_origin_label = format_number(origin.x) == format_number(origin.y);
    for (i, y) in y_axis.marks().enumerate() {
        if i == y_axis.origin_index() && shared_origin_label {
            continue;
        }
        let at = composite.apply(Point::new(origin.x, y));
        surface.draw_text(&format_number(y), &left, at + Point::new(-LABEL_GAP, 0.0), 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoscope_core::geom::Rect;

    #[test]
    fn mark_labels_cover_both_axes() {
        let coordinate = Coordinate::new(Rect::new(0.0, 0.0, 100.0, 40.0), 5);
        let labels = mark_labels(&coordinate);
        // X: 0..=100 by 20 (6 marks); Y: 0..=40 by 20 (3 marks).
        assert_eq!(labels.len(), 9);
        assert!(labels.contains(&"100".to_string()));
        assert!(labels.contains(&"40".to_string()));
    }

    #[test]
    fn fractional_steps_format_cleanly() {
        let coordinate = Coordinate::new(Rect::new(0.0, 0.0, 1.0, 1.0), 4);
        let labels = mark_labels(&coordinate);
        assert!(labels.contains(&"0.25".to_string()) || labels.contains(&"0.5".to_string()));
        for label in &labels {
            assert!(!label.ends_with('0') || !label.contains('.'), "untrimmed: {label}");
        }
    }
}
