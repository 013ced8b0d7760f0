//! # cascade-correlation
//!
//! Noise reduction for alert batches: exact/near deduplication by signature
//! and time window, plus greedy semantic clustering over message embeddings.
//! Both passes are synchronous, pure, and composable.

pub mod dedup;
pub mod engine;
pub mod semantic;

pub use dedup::{DedupReport, DuplicateGroup};
pub use engine::{CorrelationEngine, CorrelationReport};
pub use semantic::{AlertCluster, ClusterPriority};
