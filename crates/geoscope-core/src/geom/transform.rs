//! Affine transforms over row vectors.
//!
//! `[x', y'] = [x, y] . [[a, b], [c, d]] + [tx, ty]`
//!
//! Composition reads left to right: `t1.then(t2)` applies `t1` first. The
//! `then_*` conveniences mirror the lyon transform API used elsewhere in the
//! render crate.

use serde::{Deserialize, Serialize};

use super::{Point, Rect};

/// A 2D affine transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

/// Scale, rotation, and translation extracted from a transform.
///
/// Extraction is only faithful when `has_skew` is false: a skewed matrix
/// cannot be written as scale-then-rotate, and callers that ignore the flag
/// will reconstruct a different transform. Mirrored transforms are not skew;
/// the sign lands on `scale_y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decomposition {
    pub scale_x: f64,
    pub scale_y: f64,
    /// Rotation in radians from the `atan2(b, a)` branch.
    pub rotation: f64,
    pub translation: Point,
    /// True when the matrix carries shear that scale+rotation cannot express.
    pub has_skew: bool,
}

impl Decomposition {
    /// Rebuilds the transform as scale, then rotation, then translation.
    ///
    /// Reproduces the source transform exactly (within floating tolerance)
    /// when `has_skew` is false.
    pub fn recompose(&self) -> Transform {
        Transform::scale(self.scale_x, self.scale_y)
            .then_rotate(self.rotation)
            .then_translate(self.translation.x, self.translation.y)
    }
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Transform = Transform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Pure translation.
    pub fn translation(tx: f64, ty: f64) -> Self {
        Transform {
            tx,
            ty,
            ..Self::IDENTITY
        }
    }

    /// Pure scale about the origin.
    pub fn scale(sx: f64, sy: f64) -> Self {
        Transform {
            a: sx,
            d: sy,
            ..Self::IDENTITY
        }
    }

    /// Pure rotation about the origin, in radians. The +X axis maps to
    /// `(cos angle, sin angle)`.
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Transform {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Scale about an arbitrary pivot point.
    pub fn scale_around(pivot: Point, sx: f64, sy: f64) -> Self {
        Transform::translation(-pivot.x, -pivot.y)
            .then(&Transform::scale(sx, sy))
            .then_translate(pivot.x, pivot.y)
    }

    /// Rotation about an arbitrary pivot point.
    pub fn rotation_around(pivot: Point, angle: f64) -> Self {
        Transform::translation(-pivot.x, -pivot.y)
            .then(&Transform::rotation(angle))
            .then_translate(pivot.x, pivot.y)
    }

    /// Composes transforms: `self` is applied first, `other` second.
    ///
    /// Matrix product `self x other` under the row-vector convention.
    /// Not commutative.
    pub fn then(&self, other: &Transform) -> Transform {
        Transform {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            tx: self.tx * other.a + self.ty * other.c + other.tx,
            ty: self.tx * other.b + self.ty * other.d + other.ty,
        }
    }

    pub fn then_translate(&self, tx: f64, ty: f64) -> Transform {
        self.then(&Transform::translation(tx, ty))
    }

    pub fn then_scale(&self, sx: f64, sy: f64) -> Transform {
        self.then(&Transform::scale(sx, sy))
    }

    pub fn then_rotate(&self, angle: f64) -> Transform {
        self.then(&Transform::rotation(angle))
    }

    /// Composes a translation before `self`.
    pub fn pre_translate(&self, tx: f64, ty: f64) -> Transform {
        Transform::translation(tx, ty).then(self)
    }

    /// Applies the transform to a point.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            p.x * self.a + p.y * self.c + self.tx,
            p.x * self.b + p.y * self.d + self.ty,
        )
    }

    /// Maps the four corners and returns their axis-aligned bounding rect.
    pub fn apply_rect(&self, rect: &Rect) -> Rect {
        let corners = rect.corners().map(|p| self.apply(p));
        let mut min = corners[0];
        let mut max = corners[0];
        for p in &corners[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Rect::from_points(min, max)
    }

    /// Determinant of the linear part.
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Inverse transform, or `None` when the matrix is singular.
    pub fn invert(&self) -> Option<Transform> {
        let det = self.determinant();
        if det.abs() <= f64::EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;
        let a = self.d * inv_det;
        let b = -self.b * inv_det;
        let c = -self.c * inv_det;
        let d = self.a * inv_det;
        Some(Transform {
            a,
            b,
            c,
            d,
            tx: -(self.tx * a + self.ty * c),
            ty: -(self.tx * b + self.ty * d),
        })
    }

    /// Extracts scale, rotation, and translation.
    ///
    /// `scale_x` is always non-negative; a mirrored transform carries the
    /// sign on `scale_y` via the determinant. Shear is reported through
    /// `has_skew` instead of silently zeroing the rotation.
    pub fn decompose(&self) -> Decomposition {
        let scale_x = self.a.hypot(self.b);
        let rotation = if scale_x > f64::EPSILON {
            self.b.atan2(self.a)
        } else {
            0.0
        };
        let scale_y = if scale_x > f64::EPSILON {
            self.determinant() / scale_x
        } else {
            self.c.hypot(self.d)
        };

        // The second row of a skew-free matrix is fully determined by the
        // first: c = -scale_y*sin, d = scale_y*cos.
        let (sin, cos) = rotation.sin_cos();
        let expected_c = -scale_y * sin;
        let expected_d = scale_y * cos;
        let magnitude = scale_x.abs().max(scale_y.abs()).max(1.0);
        let has_skew = (self.c - expected_c).abs() > 1e-9 * magnitude
            || (self.d - expected_d).abs() > 1e-9 * magnitude;

        Decomposition {
            scale_x,
            scale_y,
            rotation,
            translation: Point::new(self.tx, self.ty),
            has_skew,
        }
    }

    /// The rotation component in radians, ignoring any skew.
    pub fn rotation_angle(&self) -> f64 {
        self.decompose().rotation
    }

    /// The translation component.
    pub fn translation_part(&self) -> Point {
        Point::new(self.tx, self.ty)
    }

    /// A transform carrying only this transform's translation. Used by
    /// render elements whose content must stay upright.
    pub fn translation_only(&self) -> Transform {
        Transform::translation(self.tx, self.ty)
    }

    /// Approximate equality within `eps`, component-wise.
    pub fn approx_eq(&self, other: &Transform, eps: f64) -> bool {
        (self.a - other.a).abs() <= eps
            && (self.b - other.b).abs() <= eps
            && (self.c - other.c).abs() <= eps
            && (self.d - other.d).abs() <= eps
            && (self.tx - other.tx).abs() <= eps
            && (self.ty - other.ty).abs() <= eps
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
