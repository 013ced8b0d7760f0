use serde::{Deserialize, Serialize};
use std::fmt;

use crate::confidence::Confidence;

/// The independent analysis strategies in the cascade fan-out pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrandKind {
    Temporal,
    Dependency,
    Resource,
    Pattern,
    CrossClient,
    Predictive,
}

impl StrandKind {
    pub const ALL: [StrandKind; 6] = [
        StrandKind::Temporal,
        StrandKind::Dependency,
        StrandKind::Resource,
        StrandKind::Pattern,
        StrandKind::CrossClient,
        StrandKind::Predictive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StrandKind::Temporal => "temporal",
            StrandKind::Dependency => "dependency",
            StrandKind::Resource => "resource",
            StrandKind::Pattern => "pattern",
            StrandKind::CrossClient => "cross_client",
            StrandKind::Predictive => "predictive",
        }
    }
}

impl fmt::Display for StrandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The payload a strand predicts: when the cascade lands and what it hits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrandPrediction {
    /// Estimated minutes until the cascade materializes.
    pub minutes: f64,
    /// Systems expected to be affected.
    pub affected_systems: Vec<String>,
    /// Actions that would prevent or soften the cascade.
    pub prevention_actions: Vec<String>,
    /// Name of the matched cascade pattern, if any.
    pub pattern: Option<String>,
}

/// Output of one strand. Confidence 0 signals the strand failed,
/// never "no risk"; the error text lands in `reasoning`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrandResult {
    pub kind: StrandKind,
    pub confidence: Confidence,
    pub prediction: StrandPrediction,
    pub reasoning: String,
    pub latency_ms: u64,
}

impl StrandResult {
    /// A degraded result for a strand that failed or panicked.
    pub fn failed(kind: StrandKind, error: impl fmt::Display) -> Self {
        Self {
            kind,
            confidence: Confidence::zero(),
            prediction: StrandPrediction::default(),
            reasoning: format!("strand failed: {error}"),
            latency_ms: 0,
        }
    }
}
