//! Summing merge of overlapping keyframe curves.
//!
//! - overlap detection (`overlap`)
//! - the merge itself (`merger`)

pub mod merger;
pub mod overlap;

pub use merger::*;
pub use overlap::*;
