//! # cascade-engine
//!
//! Pipeline orchestrator: normalize → correlate → strand fan-out → fuse →
//! narrate → decide, with outcome feedback closing the learning loop.
//! The engine always answers: internal failures downstream of input
//! validation degrade to conservative fallbacks instead of propagating.

pub mod config;
pub mod engine;
pub mod tracing_setup;

pub use config::load_config;
pub use engine::{AnalysisReport, CascadeEngine};
