//! Shared merge pipeline used by the `demo` and `merge` commands.
//!
//! load curves -> locate overlap -> merge -> (outputs handled by the caller)

use tracing::info;

use crate::domain::{Curve, CurveSource, MergeConfig};
use crate::error::AppError;
use crate::io::curve::read_curve_json;
use crate::merge::{find_overlap, merge};
use crate::report::MergeReport;

/// Keyframes of the built-in demo envelope: rise, hold, fall.
pub const DEMO_ENVELOPE: [(f64, f64); 4] = [(0.0, 0.0), (15.0, 5.0), (18.0, 5.0), (33.0, 0.0)];

/// All computed outputs of a single merge run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// `inserted` as it was before merging.
    pub inserted: Curve,
    /// `next` as it was before merging.
    pub next: Curve,
    pub merged: Curve,
    pub overlap: usize,
}

impl RunOutput {
    pub fn report(&self) -> MergeReport<'_> {
        MergeReport {
            inserted: &self.inserted,
            next: &self.next,
            merged: &self.merged,
            overlap: self.overlap,
        }
    }
}

/// Load both curves per `config` and merge them.
pub fn run_merge(config: &MergeConfig) -> Result<RunOutput, AppError> {
    let (inserted, next) = load_curves(&config.source)?;
    merge_curves(inserted, next)
}

/// Merge two in-memory curves, keeping copies of the inputs for reporting.
pub fn merge_curves(inserted: Curve, next: Curve) -> Result<RunOutput, AppError> {
    let overlap = find_overlap(inserted.keys(), next.keys())?.len();

    let mut merged = inserted.clone();
    merge(&mut merged, next.clone())?;

    info!(overlap, merged = merged.len(), "merge complete");

    Ok(RunOutput {
        inserted,
        next,
        merged,
        overlap,
    })
}

fn load_curves(source: &CurveSource) -> Result<(Curve, Curve), AppError> {
    match source {
        CurveSource::Demo { delta } => {
            if !delta.is_finite() {
                return Err(AppError::new(2, format!("Invalid delta: {delta} (must be finite).")));
            }
            let inserted = Curve::from_pairs(&DEMO_ENVELOPE);
            let next = inserted.shifted(*delta);
            Ok((inserted, next))
        }
        CurveSource::Files { inserted, next } => {
            Ok((read_curve_json(inserted)?, read_curve_json(next)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_config(delta: f64) -> MergeConfig {
        MergeConfig {
            source: CurveSource::Demo { delta },
            plot: false,
            plot_width: 100,
            plot_height: 25,
            export_curve: None,
        }
    }

    #[test]
    fn demo_run_matches_expected_sum() {
        let run = run_merge(&demo_config(9.0)).unwrap();
        assert_eq!(run.overlap, 4);
        assert_eq!(run.inserted, Curve::from_pairs(&DEMO_ENVELOPE));
        assert_eq!(run.next, Curve::from_pairs(&DEMO_ENVELOPE).shifted(9.0));

        let values: Vec<f64> = run.merged.keys().iter().map(|k| k.value).collect();
        let expected = [0.0, 3.0, 7.0, 8.0, 8.0, 7.0, 3.0, 0.0];
        assert_eq!(values.len(), expected.len());
        for (got, want) in values.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "expected {want}, got {got}");
        }
    }

    #[test]
    fn negative_delta_is_an_ordering_error() {
        let err = run_merge(&demo_config(-1.0)).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn non_finite_delta_is_rejected() {
        let err = run_merge(&demo_config(f64::NAN)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn file_source_missing_file() {
        let config = MergeConfig {
            source: CurveSource::Files {
                inserted: "/nonexistent/keymerge-a.json".into(),
                next: "/nonexistent/keymerge-b.json".into(),
            },
            ..demo_config(0.0)
        };
        assert_eq!(run_merge(&config).unwrap_err().exit_code(), 2);
    }
}
