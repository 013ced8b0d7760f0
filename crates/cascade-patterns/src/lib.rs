//! # cascade-patterns
//!
//! Library of named cascade patterns and the pattern-match predictor:
//! trigger-keyword matching over an alert plus its related 30-minute window,
//! tiered time-to-cascade estimates with deterministic jitter, and backfill
//! so callers always see 3–4 diverse predictions.

pub mod library;
pub mod matcher;
pub mod predictor;

pub use library::CascadePattern;
pub use predictor::{CascadePrediction, PatternPredictor};
