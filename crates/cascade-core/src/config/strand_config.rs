use serde::{Deserialize, Serialize};

use super::defaults;

/// Strand pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StrandConfig {
    /// Bounded concurrency limit for the fan-out pool.
    pub concurrency: usize,
}

impl Default for StrandConfig {
    fn default() -> Self {
        Self {
            concurrency: defaults::DEFAULT_STRAND_CONCURRENCY,
        }
    }
}

/// Pattern predictor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// How far back related alerts are considered when counting trigger hits.
    pub related_window_mins: i64,
    /// Minimum trigger-keyword hits for a pattern to match.
    pub min_trigger_hits: usize,
    /// Backfill until at least this many predictions exist.
    pub min_predictions: usize,
    /// Never report more than this many predictions.
    pub max_predictions: usize,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            related_window_mins: defaults::DEFAULT_RELATED_WINDOW_MINS,
            min_trigger_hits: defaults::DEFAULT_MIN_TRIGGER_HITS,
            min_predictions: defaults::DEFAULT_MIN_PREDICTIONS,
            max_predictions: defaults::DEFAULT_MAX_PREDICTIONS,
        }
    }
}
