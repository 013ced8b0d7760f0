//! # cascade-strands
//!
//! The concurrent analysis fan-out: N independent strands analyze the same
//! read-only input, a bounded pool joins them, and the fusion aggregator
//! folds their outputs into one prediction. A structurally identical pool of
//! failure-oriented analyzers classifies failure modes over the same input.

pub mod failure;
pub mod fusion;
pub mod pool;
pub mod strands;

pub use failure::{default_analyzers, fuse_failures};
pub use fusion::fuse;
pub use pool::StrandPool;
pub use strands::default_strands;
