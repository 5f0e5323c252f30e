//! Formatted terminal output.
//!
//! We keep formatting code in one place so the merge core stays free of
//! presentation concerns and output changes are localized.

use crate::domain::Curve;

/// Inputs and result of a single merge, as printed by the CLI.
#[derive(Debug, Clone)]
pub struct MergeReport<'a> {
    pub inserted: &'a Curve,
    pub next: &'a Curve,
    pub merged: &'a Curve,
    /// Number of `inserted` keyframes that took part in the overlap.
    pub overlap: usize,
}

/// Format both inputs, a blank line, then the merged curve.
pub fn format_merge_summary(report: &MergeReport<'_>) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", report.inserted));
    out.push_str(&format!("{}\n", report.next));
    out.push('\n');
    out.push_str(&format!("{}\n", report.merged));

    out
}

/// One-line description of the merge (counts and merged time span).
pub fn format_merge_stats(report: &MergeReport<'_>) -> String {
    let span = report
        .merged
        .time_range()
        .map(|(lo, hi)| format!("[{lo:.3}, {hi:.3}]"))
        .unwrap_or_else(|| "-".to_string());

    format!(
        "Keys: inserted={} next={} overlap={} merged={} | time={span}",
        report.inserted.len(),
        report.next.len(),
        report.overlap,
        report.merged.len(),
    )
}
