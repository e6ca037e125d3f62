//! Property tests for the rectangle fitter.

use geoscope_core::fit::{fit, AspectMatch, FitScaling, StretchMatch};
use geoscope_core::geom::{Rect, RectAlign, Transform};
use proptest::prelude::*;

fn rect() -> impl Strategy<Value = Rect> {
    (
        -10_000i64..10_000i64,
        -10_000i64..10_000i64,
        1i64..10_000i64,
        1i64..10_000i64,
    )
        .prop_map(|(x, y, w, h)| {
            Rect::new(x as f64 * 0.1, y as f64 * 0.1, w as f64 * 0.1, h as f64 * 0.1)
        })
}

fn align() -> impl Strategy<Value = RectAlign> {
    prop::sample::select(RectAlign::ALL.to_vec())
}

proptest! {
    #[test]
    fn fit_to_self_unscaled_is_identity(r in rect(), a in align()) {
        let t = fit(&r, &r, a, FitScaling::None);
        prop_assert!(t.approx_eq(&Transform::IDENTITY, 1e-6));
    }

    #[test]
    fn min_edge_fits_inside_target(source in rect(), target in rect(), a in align()) {
        let t = fit(&source, &target, a, FitScaling::Aspect(AspectMatch::MinEdge));
        let mapped = t.apply_rect(&source);
        let tol = 1e-6 * target.width().max(target.height()).max(1.0);
        prop_assert!(mapped.min_x() >= target.min_x() - tol);
        prop_assert!(mapped.min_y() >= target.min_y() - tol);
        prop_assert!(mapped.max_x() <= target.max_x() + tol);
        prop_assert!(mapped.max_y() <= target.max_y() + tol);
    }

    #[test]
    fn max_edge_covers_target(source in rect(), target in rect()) {
        let t = fit(&source, &target, RectAlign::MidCenter, FitScaling::Aspect(AspectMatch::MaxEdge));
        let mapped = t.apply_rect(&source);
        let tol = 1e-6 * mapped.width().max(mapped.height()).max(1.0);
        prop_assert!(mapped.min_x() <= target.min_x() + tol);
        prop_assert!(mapped.min_y() <= target.min_y() + tol);
        prop_assert!(mapped.max_x() >= target.max_x() - tol);
        prop_assert!(mapped.max_y() >= target.max_y() - tol);
    }

    #[test]
    fn aspect_scale_is_uniform(source in rect(), target in rect(), a in align()) {
        let t = fit(&source, &target, a, FitScaling::Aspect(AspectMatch::MinEdge));
        let d = t.decompose();
        prop_assert!(!d.has_skew);
        prop_assert!((d.scale_x - d.scale_y).abs() < 1e-6 * d.scale_x.abs().max(1.0));
        prop_assert!(d.rotation.abs() < 1e-9);
    }

    #[test]
    fn stretch_both_matches_target_exactly(source in rect(), target in rect(), a in align()) {
        let t = fit(&source, &target, a, FitScaling::Stretch(StretchMatch::Both));
        let mapped = t.apply_rect(&source);
        let tol = 1e-6 * target.width().max(target.height()).max(1.0);
        prop_assert!((mapped.width() - target.width()).abs() < tol);
        prop_assert!((mapped.height() - target.height()).abs() < tol);
    }

    #[test]
    fn anchor_lands_on_target_anchor(source in rect(), target in rect(), a in align()) {
        let t = fit(&source, &target, a, FitScaling::Aspect(AspectMatch::MinEdge));
        let mapped = t.apply_rect(&source);
        let want = target.anchor(a);
        let got = mapped.anchor(a);
        let tol = 1e-6 * target.width().max(target.height()).max(1.0);
        prop_assert!((got.x - want.x).abs() < tol);
        prop_assert!((got.y - want.y).abs() < tol);
    }
}

/// The worked example from the design discussion: a tall half-aspect source
/// into a square target scales uniformly by 2 and centers horizontally.
#[test]
fn tall_source_into_square_target() {
    let t = fit(
        &Rect::new(0.0, 0.0, 50.0, 100.0),
        &Rect::new(0.0, 0.0, 200.0, 200.0),
        RectAlign::MidCenter,
        FitScaling::Aspect(AspectMatch::MinEdge),
    );
    let d = t.decompose();
    assert!((d.scale_x - 2.0).abs() < 1e-12);
    assert!((d.scale_y - 2.0).abs() < 1e-12);
    let mapped = t.apply_rect(&Rect::new(0.0, 0.0, 50.0, 100.0));
    assert_eq!(mapped, Rect::new(50.0, 0.0, 100.0, 200.0));
}
