use serde::{Deserialize, Serialize};
use std::fmt;

use super::strand::StrandKind;
use crate::confidence::Confidence;

/// Coarse severity/time bucket derived from fused confidence and time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Urgency::Critical => "critical",
            Urgency::High => "high",
            Urgency::Medium => "medium",
            Urgency::Low => "low",
        };
        f.write_str(s)
    }
}

/// Per-strand diagnostics retained for observability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrandDiagnostic {
    pub kind: StrandKind,
    pub confidence: Confidence,
    pub latency_ms: u64,
}

/// The weighted combination of all strand outputs into a single prediction.
///
/// `confidence` and `predicted_in_minutes` are derived only from strands
/// with confidence > 0; `predicted_in_minutes` is always within [1, 60].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusedPrediction {
    pub predicted_in_minutes: f64,
    pub confidence: Confidence,
    pub urgency: Urgency,
    pub affected_systems: Vec<String>,
    pub prevention_actions: Vec<String>,
    /// Reasoning of high-confidence strands, capped at 3 entries.
    pub root_causes: Vec<String>,
    /// Matched cascade pattern, if any strand identified one.
    pub pattern: Option<String>,
    pub strand_diagnostics: Vec<StrandDiagnostic>,
    /// True when this prediction came from a degraded path.
    pub fallback_used: bool,
}

impl FusedPrediction {
    /// Conservative fallback when the whole analysis path degraded.
    pub fn conservative(affected_systems: Vec<String>) -> Self {
        Self {
            predicted_in_minutes: 30.0,
            confidence: Confidence::new(Confidence::LOW),
            urgency: Urgency::Low,
            affected_systems,
            prevention_actions: vec!["escalate to on-call engineer".to_string()],
            root_causes: vec![],
            pattern: None,
            strand_diagnostics: vec![],
            fallback_used: true,
        }
    }
}
