//! CorrelationEngine — composes the dedup pass and semantic clustering
//! into one report for the analysis pipeline.

use cascade_core::alert::Alert;
use cascade_core::config::CorrelationConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dedup::{self, DedupReport};
use crate::semantic::{self, AlertCluster};

/// Combined output of both correlation passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationReport {
    pub dedup: DedupReport,
    /// Clusters formed over the unique alerts, highest priority first.
    pub clusters: Vec<AlertCluster>,
}

/// Runs dedup first, then clusters the surviving unique alerts.
pub struct CorrelationEngine {
    config: CorrelationConfig,
}

impl CorrelationEngine {
    pub fn new(config: CorrelationConfig) -> Self {
        Self { config }
    }

    pub fn correlate(&self, alerts: &[Alert]) -> CorrelationReport {
        let dedup = dedup::deduplicate(alerts, &self.config);
        let clusters = semantic::cluster(&dedup.unique, &self.config);

        info!(
            total = dedup.total,
            unique = dedup.unique.len(),
            noise_reduction = dedup.noise_reduction,
            clusters = clusters.len(),
            "correlation complete"
        );

        CorrelationReport { dedup, clusters }
    }
}

impl Default for CorrelationEngine {
    fn default() -> Self {
        Self::new(CorrelationConfig::default())
    }
}
