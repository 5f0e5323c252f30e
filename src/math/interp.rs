//! Linear interpolation over keyframe sequences.
//!
//! Two primitives:
//! - `bracket`: find the adjacent pair of keyframes straddling a time
//! - `evaluate`: the value of the line through a pair at a time
//!
//! Outside a curve's domain the bracket collapses to a doubled endpoint
//! `(k, k)`, which `evaluate` resolves to `k.value` (flat extrapolation).

use crate::domain::Keyframe;

/// A pair of keyframes straddling a query time.
pub type Bracket<'a> = (&'a Keyframe, &'a Keyframe);

/// Value at `t` of the line through `k1` and `k2`.
///
/// Extrapolates when `t` lies outside `[k1.time, k2.time]`. A zero-width pair
/// (`k1.time == k2.time`) has slope 0 and yields `k1.value`.
pub fn evaluate(k1: &Keyframe, k2: &Keyframe, t: f64) -> f64 {
    let width = k2.time - k1.time;
    if width == 0.0 {
        return k1.value;
    }
    let slope = (k2.value - k1.value) / width;
    k1.value + slope * (t - k1.time)
}

/// Adjacent keyframes whose times straddle `t`.
///
/// - empty curve: `None`
/// - `t` before the first keyframe: `(first, first)`
/// - `t` after the last keyframe: `(last, last)`
/// - otherwise the first pair (left to right) with `a.time <= t <= b.time`,
///   so an exact hit on an interior keyframe pairs it with its left neighbour
///
/// A single-keyframe curve always brackets to `(k, k)`.
pub fn bracket(keys: &[Keyframe], t: f64) -> Option<Bracket<'_>> {
    let first = keys.first()?;
    let last = keys.last()?;

    if t < first.time {
        return Some((first, first));
    }
    if t > last.time {
        return Some((last, last));
    }

    let inner = keys
        .windows(2)
        .find(|w| w[0].time <= t && t <= w[1].time)
        .map(|w| (&w[0], &w[1]));

    // Only a single keyframe or an unordered time (NaN) falls through.
    Some(inner.unwrap_or((last, last)))
}

/// `bracket` followed by `evaluate`; `None` for an empty curve.
pub fn interpolate(keys: &[Keyframe], t: f64) -> Option<f64> {
    bracket(keys, t).map(|(k1, k2)| evaluate(k1, k2, t))
}
