//! Property tests for affine transform composition and decomposition.

use geoscope_core::geom::{Point, Transform};
use proptest::prelude::*;

/// Finite coefficient values in a range that keeps products well away from
/// overflow while still exercising sign and magnitude variety.
fn coeff() -> impl Strategy<Value = f64> {
    (-10_000i64..10_000i64).prop_map(|v| v as f64 * 1e-2)
}

fn transform() -> impl Strategy<Value = Transform> {
    (coeff(), coeff(), coeff(), coeff(), coeff(), coeff()).prop_map(|(a, b, c, d, tx, ty)| {
        Transform { a, b, c, d, tx, ty }
    })
}

/// Nonzero scale factors for decomposition round-trips.
fn scale_factor() -> impl Strategy<Value = f64> {
    prop_oneof![(1i64..500i64).prop_map(|v| v as f64 * 1e-2), (1i64..500i64).prop_map(|v| v as f64 * -1e-2)]
}

proptest! {
    #[test]
    fn composition_is_associative(a in transform(), b in transform(), c in transform()) {
        let left = a.then(&b).then(&c);
        let right = a.then(&b.then(&c));
        // Tolerance scales with coefficient magnitude (products of three
        // transforms can reach ~1e6).
        prop_assert!(left.approx_eq(&right, 1e-6));
    }

    #[test]
    fn composition_applies_left_to_right(a in transform(), b in transform(), x in coeff(), y in coeff()) {
        let p = Point::new(x, y);
        let composed = a.then(&b).apply(p);
        let stepped = b.apply(a.apply(p));
        prop_assert!((composed.x - stepped.x).abs() < 1e-6);
        prop_assert!((composed.y - stepped.y).abs() < 1e-6);
    }

    #[test]
    fn decompose_recompose_roundtrip(
        sx in (1i64..500i64).prop_map(|v| v as f64 * 1e-2),
        sy in scale_factor(),
        angle in (-314i64..314i64).prop_map(|v| v as f64 * 1e-2),
        tx in coeff(),
        ty in coeff(),
    ) {
        // Any scale-then-rotate-then-translate transform is skew-free and
        // must survive the round trip.
        let t = Transform::scale(sx, sy)
            .then_rotate(angle)
            .then_translate(tx, ty);
        let d = t.decompose();
        prop_assert!(!d.has_skew, "skew flagged for skew-free transform {t:?}");
        prop_assert!(d.recompose().approx_eq(&t, 1e-6));
    }

    #[test]
    fn invert_roundtrips_points(t in transform(), x in coeff(), y in coeff()) {
        prop_assume!(t.determinant().abs() > 1e-3);
        let inv = t.invert().expect("well-conditioned transform");
        let p = Point::new(x, y);
        let back = inv.apply(t.apply(p));
        prop_assert!((back.x - p.x).abs() < 1e-5);
        prop_assert!((back.y - p.y).abs() < 1e-5);
    }

    #[test]
    fn translation_only_strips_linear_part(t in transform(), x in coeff(), y in coeff()) {
        let only = t.translation_only();
        let p = Point::new(x, y);
        let moved = only.apply(p);
        prop_assert!((moved.x - (p.x + t.tx)).abs() < 1e-9);
        prop_assert!((moved.y - (p.y + t.ty)).abs() < 1e-9);
    }
}
