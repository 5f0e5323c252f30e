//! Read/write curve JSON files.
//!
//! A curve file is a JSON array of `[time, value]` pairs, in time order:
//!
//! ```json
//! [[0, 0], [15, 5], [18, 5], [33, 0]]
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::domain::Curve;
use crate::error::AppError;

/// Write a curve JSON file.
pub fn write_curve_json(path: &Path, curve: &Curve) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create curve JSON '{}': {e}", path.display())))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, curve)
        .map_err(|e| AppError::new(2, format!("Failed to write curve JSON: {e}")))?;
    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to write curve JSON: {e}")))?;

    info!(path = %path.display(), keys = curve.len(), "wrote curve");
    Ok(())
}

/// Read a curve JSON file.
///
/// Rejects curves whose keyframes are not in non-decreasing time order.
pub fn read_curve_json(path: &Path) -> Result<Curve, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open curve JSON '{}': {e}", path.display())))?;
    let curve: Curve = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::new(2, format!("Invalid curve JSON '{}': {e}", path.display())))?;

    if !curve.is_time_ordered() {
        return Err(AppError::new(
            2,
            format!("Curve '{}' is not sorted by time.", path.display()),
        ));
    }

    info!(path = %path.display(), keys = curve.len(), "loaded curve");
    Ok(curve)
}
