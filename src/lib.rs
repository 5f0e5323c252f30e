//! `keymerge` library crate.
//!
//! Sums piecewise-linear keyframe curves where they overlap in time, so a
//! newly triggered curve can start before the previous one has finished
//! without a jump in playback.
//!
//! The binary (`keymerge`) is a thin wrapper around this library so that the
//! merge core stays testable and free of I/O.

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod merge;
pub mod plot;
pub mod report;

pub use domain::{Curve, Keyframe};
pub use error::MergeError;
pub use math::{bracket, evaluate, interpolate};
pub use merge::{find_overlap, merge, merge_all};
