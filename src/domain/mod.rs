//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - curve data (`Keyframe`, `Curve`)
//! - run configuration (`CurveSource`, `MergeConfig`)

pub mod types;

pub use types::*;
