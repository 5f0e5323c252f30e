//! Shared domain types.
//!
//! Keyframes and curves are kept small and serializable so they can be:
//!
//! - mutated in place during a merge
//! - written to / read from JSON as plain `[time, value]` pairs
//! - rendered for terminal output

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::MergeError;
use crate::math::interpolate;
use crate::merge::find_overlap;

/// A single `(time, value)` point on a curve.
///
/// `time` is the identity of the keyframe; `value` accumulates during a merge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Keyframe {
    pub time: f64,
    pub value: f64,
}

impl Keyframe {
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

impl From<(f64, f64)> for Keyframe {
    fn from((time, value): (f64, f64)) -> Self {
        Self { time, value }
    }
}

impl From<Keyframe> for (f64, f64) {
    fn from(key: Keyframe) -> Self {
        (key.time, key.value)
    }
}

impl fmt::Display for Keyframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.time, self.value)
    }
}

/// A piecewise-linear curve: keyframes ordered by non-decreasing time.
///
/// Outside its domain the curve is flat, equal to the nearest endpoint's value.
/// Nothing here enforces the ordering; use [`Curve::is_time_ordered`] when the
/// source is untrusted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curve {
    keys: Vec<Keyframe>,
}

impl Curve {
    pub fn new(keys: Vec<Keyframe>) -> Self {
        Self { keys }
    }

    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self {
            keys: pairs.iter().copied().map(Keyframe::from).collect(),
        }
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    pub(crate) fn keys_mut(&mut self) -> &mut Vec<Keyframe> {
        &mut self.keys
    }

    pub fn into_keys(self) -> Vec<Keyframe> {
        self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn first(&self) -> Option<&Keyframe> {
        self.keys.first()
    }

    pub fn last(&self) -> Option<&Keyframe> {
        self.keys.last()
    }

    /// `true` when every keyframe's time is >= the previous one's.
    pub fn is_time_ordered(&self) -> bool {
        self.keys.windows(2).all(|w| w[0].time <= w[1].time)
    }

    /// A copy of this curve moved by `delta` in time.
    pub fn shifted(&self, delta: f64) -> Curve {
        Curve {
            keys: self
                .keys
                .iter()
                .map(|k| Keyframe::new(k.time + delta, k.value))
                .collect(),
        }
    }

    /// Evaluate the curve at `t` (linear inside, flat outside).
    ///
    /// Returns `None` for an empty curve.
    pub fn value_at(&self, t: f64) -> Option<f64> {
        interpolate(&self.keys, t)
    }

    /// The keyframes of this curve that overlap the start of `next`.
    ///
    /// See [`find_overlap`] for the exact rule.
    pub fn overlap_with(&self, next: &Curve) -> Result<&[Keyframe], MergeError> {
        let range = find_overlap(&self.keys, &next.keys)?;
        Ok(&self.keys[range])
    }

    /// `(min, max)` of the keyframe times, if the curve is non-empty.
    pub fn time_range(&self) -> Option<(f64, f64)> {
        Some((self.first()?.time, self.last()?.time))
    }
}

impl From<Vec<Keyframe>> for Curve {
    fn from(keys: Vec<Keyframe>) -> Self {
        Self::new(keys)
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}")?;
        }
        f.write_str("]")
    }
}

/// Where the two input curves of a run come from.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveSource {
    /// The built-in envelope plus a copy shifted by `delta`.
    Demo { delta: f64 },
    /// Two curve JSON files.
    Files { inserted: PathBuf, next: PathBuf },
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct MergeConfig {
    pub source: CurveSource,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
    pub export_curve: Option<PathBuf>,
}
