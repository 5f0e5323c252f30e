//! Error types.
//!
//! - `MergeError`: failures of the merge core (library callers match on it)
//! - `AppError`: what the binary reports, carrying a process exit code

use thiserror::Error;

/// Failure of the curve merge core.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MergeError {
    /// The curve being merged in starts before the curve it is merged into.
    #[error(
        "curves out of order: inserted curve starts at {inserted_start}, \
         after the next curve's start {next_start}"
    )]
    InvalidOrder { inserted_start: f64, next_start: f64 },
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<MergeError> for AppError {
    fn from(err: MergeError) -> Self {
        AppError::new(3, format!("Merge failed: {err}"))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_error_maps_to_exit_code_3() {
        let err = MergeError::InvalidOrder {
            inserted_start: 5.0,
            next_start: 1.0,
        };
        let app: AppError = err.into();
        assert_eq!(app.exit_code(), 3);
        assert!(app.to_string().contains("starts at 5"), "got: {app}");
    }
}
