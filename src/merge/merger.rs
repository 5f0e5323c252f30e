//! Summing merge of two keyframe curves.
//!
//! `merge` adds a newly triggered curve (`next`) onto an existing one
//! (`inserted`) so that wherever both are defined the result is their sum.
//!
//! Order of operations is load-bearing: every cross-curve value is computed
//! from the *original* keyframes before any keyframe is modified. Interpolating
//! against partially updated values would add contributions twice.

use tracing::{debug, trace};

use crate::domain::{Curve, Keyframe};
use crate::error::MergeError;
use crate::math::interpolate;
use crate::merge::overlap::find_overlap;

/// Merge `next` into `inserted`, summing values where the curves overlap.
///
/// Afterwards `inserted` holds every keyframe of both curves, sorted by time.
/// `next` is consumed: its keyframes are moved into `inserted` after receiving
/// their share of the overlap.
///
/// # Errors
/// `MergeError::InvalidOrder` if both curves are non-empty and `inserted`
/// starts after `next`. `inserted` is left untouched in that case.
pub fn merge(inserted: &mut Curve, next: Curve) -> Result<(), MergeError> {
    let overlap = find_overlap(inserted.keys(), next.keys())?;
    let mut next_keys = next.into_keys();

    // 1) Cross-interpolate against the untouched keyframes.
    let next_adds = contributions(&next_keys, &inserted.keys()[overlap.clone()]);
    let overlap_adds = contributions(&inserted.keys()[overlap.clone()], &next_keys);

    debug!(
        overlap = overlap.len(),
        next = next_keys.len(),
        inserted = inserted.len(),
        "merging keyframe curves"
    );

    // 2) Only now apply them.
    apply(&mut inserted.keys_mut()[overlap], &overlap_adds);
    apply(&mut next_keys, &next_adds);

    // 3) Concatenate and restore time order. The sort is stable, so on equal
    //    times keys already in `inserted` stay ahead of keys from `next`.
    let keys = inserted.keys_mut();
    keys.extend(next_keys);
    keys.sort_by(|a, b| a.time.total_cmp(&b.time));

    Ok(())
}

/// Merge a chronologically ordered sequence of curves into one.
///
/// Starts from an empty curve and merges each input in turn.
///
/// # Errors
/// `MergeError::InvalidOrder` as soon as a curve starts before the merged
/// result so far.
pub fn merge_all<I>(curves: I) -> Result<Curve, MergeError>
where
    I: IntoIterator<Item = Curve>,
{
    let mut acc = Curve::default();
    for curve in curves {
        merge(&mut acc, curve)?;
    }
    Ok(acc)
}

/// Value of `other` at each keyframe's time, or `None` when `other` is empty.
fn contributions(keys: &[Keyframe], other: &[Keyframe]) -> Vec<Option<f64>> {
    keys.iter().map(|k| interpolate(other, k.time)).collect()
}

fn apply(keys: &mut [Keyframe], adds: &[Option<f64>]) {
    for (key, add) in keys.iter_mut().zip(adds) {
        if let Some(add) = *add {
            trace!(time = key.time, add, "summing keyframe");
            key.value += add;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;
    use rand::rngs::StdRng;

    use super::*;

    const TOL: f64 = 1e-9;

    fn envelope() -> Curve {
        Curve::from_pairs(&[(0.0, 0.0), (15.0, 5.0), (18.0, 5.0), (33.0, 0.0)])
    }

    fn assert_curve_close(actual: &Curve, expected: &[(f64, f64)]) {
        assert_eq!(actual.len(), expected.len(), "length mismatch: {actual}");
        for (key, &(t, v)) in actual.keys().iter().zip(expected) {
            assert!(
                (key.time - t).abs() < TOL && (key.value - v).abs() < TOL,
                "expected ({t}, {v}), got {key} in {actual}"
            );
        }
    }

    /// Random sorted curve with distinct times starting at `start`.
    fn random_curve(rng: &mut StdRng, start: f64) -> Curve {
        let n = rng.gen_range(1..8);
        let mut t = start;
        let mut keys = Vec::with_capacity(n);
        for _ in 0..n {
            keys.push(Keyframe::new(t, rng.gen_range(-5.0..5.0)));
            t += rng.gen_range(0.5..10.0);
        }
        Curve::new(keys)
    }

    #[test]
    fn shifted_envelope_end_to_end() {
        let mut inserted = envelope();
        let next = inserted.shifted(9.0);

        merge(&mut inserted, next).unwrap();

        assert_curve_close(
            &inserted,
            &[
                (0.0, 0.0),
                (9.0, 3.0),
                (15.0, 7.0),
                (18.0, 8.0),
                (24.0, 8.0),
                (27.0, 7.0),
                (33.0, 3.0),
                (42.0, 0.0),
            ],
        );
    }

    #[test]
    fn out_of_order_fails_and_leaves_inserted_untouched() {
        let mut inserted = envelope().shifted(10.0);
        let before = inserted.clone();
        let err = merge(&mut inserted, envelope()).unwrap_err();
        assert!(matches!(err, MergeError::InvalidOrder { .. }));
        assert_eq!(inserted, before);
    }

    #[test]
    fn empty_next_is_identity() {
        let mut inserted = envelope();
        merge(&mut inserted, Curve::default()).unwrap();
        assert_eq!(inserted, envelope());
    }

    #[test]
    fn empty_inserted_takes_next_verbatim() {
        let mut inserted = Curve::default();
        merge(&mut inserted, envelope()).unwrap();
        assert_eq!(inserted, envelope());
    }

    #[test]
    fn disjoint_curves_concatenate() {
        let mut inserted = envelope();
        let next = envelope().shifted(40.0);
        merge(&mut inserted, next.clone()).unwrap();

        let mut expected = envelope().into_keys();
        expected.extend(next.into_keys());
        assert_eq!(inserted.keys(), expected.as_slice());
    }

    #[test]
    fn flat_extrapolation_on_both_sides() {
        // `next` runs past the end of `inserted`, which holds its last value.
        let mut inserted = Curve::from_pairs(&[(0.0, 1.0), (10.0, 2.0)]);
        let next = Curve::from_pairs(&[(5.0, 1.0), (20.0, 1.0)]);
        merge(&mut inserted, next).unwrap();

        assert_curve_close(&inserted, &[(0.0, 2.0), (5.0, 2.5), (10.0, 3.0), (20.0, 3.0)]);
    }

    #[test]
    fn equal_start_times_keep_inserted_first() {
        let mut inserted = Curve::from_pairs(&[(0.0, 1.0), (4.0, 1.0)]);
        let next = Curve::from_pairs(&[(0.0, 2.0), (4.0, 2.0)]);
        merge(&mut inserted, next).unwrap();

        // Both copies of each time carry the summed value 3.
        assert_curve_close(&inserted, &[(0.0, 3.0), (0.0, 3.0), (4.0, 3.0), (4.0, 3.0)]);
    }

    #[test]
    fn merge_all_folds_in_order() {
        let merged = merge_all([envelope(), envelope().shifted(9.0)]).unwrap();
        let mut pairwise = envelope();
        merge(&mut pairwise, envelope().shifted(9.0)).unwrap();
        assert_eq!(merged, pairwise);

        let err = merge_all([envelope().shifted(5.0), envelope()]).unwrap_err();
        assert!(matches!(err, MergeError::InvalidOrder { .. }));

        assert!(merge_all(Vec::<Curve>::new()).unwrap().is_empty());
    }

    #[test]
    fn random_curves_keep_count_order_and_sum() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let a_start = rng.gen_range(0.0..10.0);
            let a = random_curve(&mut rng, a_start);
            let start = a.first().map(|k| k.time).unwrap_or(0.0) + rng.gen_range(0.0..30.0);
            let b = random_curve(&mut rng, start);

            let mut merged = a.clone();
            merge(&mut merged, b.clone()).unwrap();

            assert_eq!(merged.len(), a.len() + b.len());
            assert!(merged.is_time_ordered(), "unsorted: {merged}");

            let overlap = find_overlap(a.keys(), b.keys()).unwrap();
            assert!(overlap.len() <= a.len());

            // Every original time shared by both domains carries the sum.
            let (a_lo, a_hi) = a.time_range().unwrap();
            let (b_lo, b_hi) = b.time_range().unwrap();
            let (lo, hi) = (a_lo.max(b_lo), a_hi.min(b_hi));
            if lo >= hi {
                continue;
            }
            for key in a.keys().iter().chain(b.keys()) {
                if key.time < lo || key.time > hi {
                    continue;
                }
                let want = a.value_at(key.time).unwrap() + b.value_at(key.time).unwrap();
                let got = merged
                    .keys()
                    .iter()
                    .find(|k| k.time == key.time)
                    .map(|k| k.value)
                    .unwrap();
                assert!(
                    (got - want).abs() < TOL,
                    "t={}: expected {want}, got {got} (a={a}, b={b})",
                    key.time
                );
            }
        }
    }
}
