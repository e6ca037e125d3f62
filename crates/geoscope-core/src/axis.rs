//! Axis division: choosing a human-readable grid step for a value range.
//!
//! Grid lines land on "nice" values by restricting the step to the
//! multiplier set `{1, 2, 2.5, 5, 10}` times a power of ten.

use serde::{Deserialize, Serialize};

/// Step multipliers, in ascending order. `10` closes the set so a candidate
/// always exists within one decade.
const MULTIPLIERS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Returns the smallest nice step value such that `segments` steps cover
/// `range`.
///
/// The step is the smallest candidate `m * 10^k >= range / segments` with
/// `m` in `{1, 2, 2.5, 5, 10}`. A non-positive or non-finite range (or zero
/// segments) returns `0.0`; callers substitute a minimum extent before
/// dividing a degenerate axis.
///
/// ```
/// assert_eq!(geoscope_core::axis::divide(100.0, 5), 20.0);
/// assert_eq!(geoscope_core::axis::divide(110.0, 5), 25.0);
/// assert_eq!(geoscope_core::axis::divide(0.0, 5), 0.0);
/// ```
pub fn divide(range: f64, segments: usize) -> f64 {
    if segments == 0 || !range.is_finite() || range <= 0.0 {
        return 0.0;
    }
    let test = range / segments as f64;
    let exp = test.log10().floor();
    let p = 10f64.powf(exp);
    for m in MULTIPLIERS {
        let candidate = m * p;
        if candidate >= test {
            return candidate;
        }
    }
    // test <= 10^(exp+1) by construction, so the loop always returns; this
    // only guards floating point dust at the decade boundary.
    10.0 * p
}

/// Derived grid state for a single axis.
///
/// The grid always contains the input range: `start_value <= min` and
/// `start_value + length_value() >= max`, possibly overshooting by less than
/// one segment on each side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisData {
    /// Grid-aligned minimum: largest step multiple `<= min`.
    pub start_value: f64,
    /// Grid step between adjacent marks.
    pub segment_value: f64,
    /// Number of steps needed to reach past `max`.
    pub num_segments: usize,
    /// Whole segments between `start_value` and the axis origin.
    pub start_segments: usize,
}

impl AxisData {
    /// Computes grid state for the `[min, max]` range with the given step.
    ///
    /// A non-positive step produces the degenerate zero-segment axis anchored
    /// at `min`.
    pub fn new(min: f64, max: f64, segment_value: f64) -> Self {
        if !(segment_value > 0.0) || !segment_value.is_finite() {
            tracing::debug!(min, max, segment_value, "degenerate axis step, zero segments");
            return Self {
                start_value: min,
                segment_value: 0.0,
                num_segments: 0,
                start_segments: 0,
            };
        }
        let start_value = (min / segment_value).floor() * segment_value;
        let num_segments = ((max - start_value) / segment_value).ceil().max(0.0) as usize;
        let origin = Self::clamped_origin(start_value, segment_value, num_segments);
        let start_segments = ((origin - start_value) / segment_value).round() as usize;
        Self {
            start_value,
            segment_value,
            num_segments,
            start_segments,
        }
    }

    /// Total value length covered by the grid.
    pub fn length_value(&self) -> f64 {
        self.segment_value * self.num_segments as f64
    }

    /// Grid-aligned maximum.
    pub fn end_value(&self) -> f64 {
        self.start_value + self.length_value()
    }

    /// The axis origin: zero when the grid straddles it, else the nearest
    /// grid extremity. Always a mark value.
    pub fn origin_value(&self) -> f64 {
        Self::clamped_origin(self.start_value, self.segment_value, self.num_segments)
    }

    fn clamped_origin(start: f64, step: f64, segments: usize) -> f64 {
        let end = start + step * segments as f64;
        0.0_f64.clamp(start, end.max(start))
    }

    /// Mark values from `start_value` to `end_value` inclusive.
    pub fn marks(&self) -> impl Iterator<Item = f64> + '_ {
        (0..=self.num_segments).map(move |i| self.start_value + self.segment_value * i as f64)
    }
}
