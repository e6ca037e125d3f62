//! Rectangle fitting: one affine transform aligning a source rect to a
//! target rect under a scaling mode.

use serde::{Deserialize, Serialize};

use crate::geom::{Point, Rect, RectAlign, Transform};

/// Which source edge ratio a uniform (aspect-preserving) scale matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectMatch {
    /// Match the width ratio.
    Width,
    /// Match the height ratio.
    Height,
    /// The smaller ratio: the scaled source fits fully inside the target.
    MinEdge,
    /// The larger ratio: the scaled source fully covers the target.
    MaxEdge,
}

/// Which axes an independent (aspect-breaking) scale matches. Unmatched
/// axes keep scale 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StretchMatch {
    Width,
    Height,
    Both,
}

/// Scaling mode for [`fit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitScaling {
    /// No scaling; alignment only.
    None,
    /// Uniform scale preserving aspect ratio.
    Aspect(AspectMatch),
    /// Independent per-axis scale.
    Stretch(StretchMatch),
}

/// Computes the transform that scales `source` per `scaling` and aligns its
/// named anchor onto the target's same-named anchor.
///
/// The returned transform scales about the coordinate origin and then
/// translates; inputs are not mutated. Fitting a rect to itself without
/// scaling yields the identity. A degenerate source edge contributes scale 1
/// on that axis.
pub fn fit(source: &Rect, target: &Rect, align: RectAlign, scaling: FitScaling) -> Transform {
    let ratio_x = safe_ratio(target.width(), source.width());
    let ratio_y = safe_ratio(target.height(), source.height());

    let (sx, sy) = match scaling {
        FitScaling::None => (1.0, 1.0),
        FitScaling::Aspect(m) => {
            let s = match m {
                AspectMatch::Width => ratio_x,
                AspectMatch::Height => ratio_y,
                AspectMatch::MinEdge => ratio_x.min(ratio_y),
                AspectMatch::MaxEdge => ratio_x.max(ratio_y),
            };
            (s, s)
        }
        FitScaling::Stretch(m) => match m {
            StretchMatch::Width => (ratio_x, 1.0),
            StretchMatch::Height => (1.0, ratio_y),
            StretchMatch::Both => (ratio_x, ratio_y),
        },
    };

    // The scaled source rect, origin held fixed. Its anchor offset tells us
    // where the anchor sits relative to the origin; the scale-about-origin
    // transform moves the origin itself to origin*S, hence the correction
    // term in the translation.
    let scaled = Rect {
        origin: source.origin,
        size: crate::geom::Size::new(source.width() * sx, source.height() * sy),
    };
    let anchor_offset = scaled.anchor(align) - source.origin;
    let anchor_target = target.anchor(align);
    let origin_scaled = Point::new(source.origin.x * sx, source.origin.y * sy);
    let t = anchor_target - anchor_offset - origin_scaled;

    Transform::scale(sx, sy).then_translate(t.x, t.y)
}

fn safe_ratio(target: f64, source: f64) -> f64 {
    if source.abs() <= f64::EPSILON {
        tracing::debug!(target, source, "degenerate source edge, scale 1");
        1.0
    } else {
        target / source
    }
}
