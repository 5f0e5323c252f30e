//! Reporting utilities: formatted terminal output for merge runs.

pub mod format;

pub use format::*;
