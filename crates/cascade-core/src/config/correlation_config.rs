use serde::{Deserialize, Serialize};

use super::defaults;

/// Dedup/correlation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrelationConfig {
    /// Max timestamp distance (seconds) for two same-signature alerts to
    /// count as duplicates.
    pub dedup_window_secs: i64,
    /// When set, duplicates must also have message-token Jaccard similarity
    /// at or above this threshold.
    pub jaccard_threshold: Option<f64>,
    /// Cosine similarity threshold for semantic clustering.
    pub semantic_threshold: f64,
    /// Maximum number of semantic clusters reported.
    pub max_clusters: usize,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            dedup_window_secs: defaults::DEFAULT_DEDUP_WINDOW_SECS,
            jaccard_threshold: None,
            semantic_threshold: defaults::DEFAULT_SEMANTIC_THRESHOLD,
            max_clusters: defaults::DEFAULT_MAX_CLUSTERS,
        }
    }
}
