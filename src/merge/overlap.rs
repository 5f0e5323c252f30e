//! Overlap detection between two time-ordered curves.
//!
//! Given curves `A` and `B` with `A` starting no later than `B`, the overlap is
//! the trailing run of `A` that lies strictly after `B`'s first time, plus the
//! one keyframe just before that run. The extra keyframe gives interpolation a
//! left bracket for `B`'s leading keys.
//!
//! The overlap is reported as an index range into `A` rather than as borrowed
//! keyframes, because the merger later mutates those keyframes in place.

use std::ops::Range;

use crate::domain::Keyframe;
use crate::error::MergeError;

/// Index range of `a`'s suffix that overlaps the start of `b`.
///
/// Empty when either curve is empty or when `a` ends at or before `b` starts.
///
/// # Errors
/// `MergeError::InvalidOrder` if both curves are non-empty and `a` starts after `b`.
pub fn find_overlap(a: &[Keyframe], b: &[Keyframe]) -> Result<Range<usize>, MergeError> {
    let (Some(a_first), Some(b_first)) = (a.first(), b.first()) else {
        return Ok(0..0);
    };

    if a_first.time > b_first.time {
        return Err(MergeError::InvalidOrder {
            inserted_start: a_first.time,
            next_start: b_first.time,
        });
    }

    let b_start = b_first.time;
    let start = match a.iter().rposition(|k| k.time <= b_start) {
        // Nothing strictly after b's start: no overlap at all.
        Some(i) if i + 1 == a.len() => a.len(),
        // Boundary keyframe is kept as the left bracket.
        Some(i) => i,
        None => 0,
    };

    Ok(start..a.len())
}
