//! Axis-aligned rectangles and the 9-point anchor grid.

use serde::{Deserialize, Serialize};

use super::{Point, Size};

/// An axis-aligned rectangle defined by its origin (minimum corner) and size.
///
/// The size is never negative: constructors normalize flipped corners.
/// Anchor points (corners, edge midpoints, center) are derived on demand
/// rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

/// One of the nine anchor points of a rectangle, on a 3x3 grid.
///
/// "Top" is the maximum-Y edge; in value space (Y up) that is the visually
/// upper edge, in raster space it is the lower one. Alignment code only ever
/// matches anchors of one rect against the same-named anchor of another, so
/// the convention cancels out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RectAlign {
    TopLeft,
    TopCenter,
    TopRight,
    MidLeft,
    MidCenter,
    MidRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl RectAlign {
    /// Fractional position of the anchor within a unit rect, as (fx, fy).
    fn fractions(self) -> (f64, f64) {
        match self {
            RectAlign::BottomLeft => (0.0, 0.0),
            RectAlign::BottomCenter => (0.5, 0.0),
            RectAlign::BottomRight => (1.0, 0.0),
            RectAlign::MidLeft => (0.0, 0.5),
            RectAlign::MidCenter => (0.5, 0.5),
            RectAlign::MidRight => (1.0, 0.5),
            RectAlign::TopLeft => (0.0, 1.0),
            RectAlign::TopCenter => (0.5, 1.0),
            RectAlign::TopRight => (1.0, 1.0),
        }
    }

    /// All nine anchors, for exhaustive tests.
    pub const ALL: [RectAlign; 9] = [
        RectAlign::TopLeft,
        RectAlign::TopCenter,
        RectAlign::TopRight,
        RectAlign::MidLeft,
        RectAlign::MidCenter,
        RectAlign::MidRight,
        RectAlign::BottomLeft,
        RectAlign::BottomCenter,
        RectAlign::BottomRight,
    ];
}

impl Rect {
    /// Creates a rectangle from origin coordinates and size, normalizing
    /// negative dimensions by shifting the origin.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        let (x, width) = if width < 0.0 { (x + width, -width) } else { (x, width) };
        let (y, height) = if height < 0.0 { (y + height, -height) } else { (y, height) };
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Creates the smallest rectangle containing both points.
    pub fn from_points(a: Point, b: Point) -> Self {
        Rect::new(a.x.min(b.x), a.y.min(b.y), (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Center of the rectangle.
    pub fn center(&self) -> Point {
        self.anchor(RectAlign::MidCenter)
    }

    /// The named anchor point on the 3x3 grid.
    pub fn anchor(&self, align: RectAlign) -> Point {
        let (fx, fy) = align.fractions();
        Point::new(
            self.origin.x + self.size.width * fx,
            self.origin.y + self.size.height * fy,
        )
    }

    /// The four corners in counter-clockwise order starting at the origin.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min_x(), self.min_y()),
            Point::new(self.max_x(), self.min_y()),
            Point::new(self.max_x(), self.max_y()),
            Point::new(self.min_x(), self.max_y()),
        ]
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let min_x = self.min_x().min(other.min_x());
        let min_y = self.min_y().min(other.min_y());
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Smallest rectangle containing `self` and the given point.
    pub fn union_point(&self, p: Point) -> Rect {
        let min_x = self.min_x().min(p.x);
        let min_y = self.min_y().min(p.y);
        let max_x = self.max_x().max(p.x);
        let max_y = self.max_y().max(p.y);
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Rectangle grown outward by `margin` on every side.
    pub fn expanded(&self, margin: f64) -> Rect {
        Rect::new(
            self.origin.x - margin,
            self.origin.y - margin,
            self.size.width + margin * 2.0,
            self.size.height + margin * 2.0,
        )
    }

    /// True when the point lies inside or on the boundary.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x() <= other.max_x()
            && other.min_x() <= self.max_x()
            && self.min_y() <= other.max_y()
            && other.min_y() <= self.max_y()
    }

    /// True when either dimension is zero (or collapsed below tolerance).
    pub fn is_degenerate(&self) -> bool {
        self.size.width <= f64::EPSILON || self.size.height <= f64::EPSILON
    }

    /// Substitutes a minimal extent for degenerate axes, keeping the rect
    /// centered on the collapsed dimension. Debug rendering degrades rather
    /// than dividing by zero downstream.
    pub fn with_min_extent(&self, min_extent: f64) -> Rect {
        let mut r = *self;
        if r.size.width < min_extent {
            r.origin.x -= (min_extent - r.size.width) / 2.0;
            r.size.width = min_extent;
        }
        if r.size.height < min_extent {
            r.origin.y -= (min_extent - r.size.height) / 2.0;
            r.size.height = min_extent;
        }
        r
    }
}
