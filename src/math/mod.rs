//! Mathematical utilities: bracketing and linear interpolation of keyframes.

pub mod interp;

pub use interp::*;
