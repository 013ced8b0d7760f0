use serde::{Deserialize, Serialize};
use std::fmt;

use crate::confidence::Confidence;

/// What the engine decided to do about a predicted cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionAction {
    Prevent,
    Monitor,
    Escalate,
    Ignore,
}

impl fmt::Display for DecisionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DecisionAction::Prevent => "prevent",
            DecisionAction::Monitor => "monitor",
            DecisionAction::Escalate => "escalate",
            DecisionAction::Ignore => "ignore",
        };
        f.write_str(s)
    }
}

/// Decision priority. Monotonic with business impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        f.write_str(s)
    }
}

/// Output of the decision policy engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    pub action: DecisionAction,
    pub priority: Priority,
    pub confidence: Confidence,
    /// Normalized impact scores in [0, 1].
    pub business_impact: f64,
    pub cost_impact: f64,
    pub sla_risk: f64,
    pub recommended_actions: Vec<String>,
    /// True when the policy engine degraded to its fixed fallback.
    pub fallback_used: bool,
}

impl Decision {
    /// Fixed fallback emitted when the policy engine fails internally.
    pub fn fallback() -> Self {
        Self {
            action: DecisionAction::Monitor,
            priority: Priority::Medium,
            confidence: Confidence::new(0.3),
            business_impact: 0.5,
            cost_impact: 0.5,
            sla_risk: 0.5,
            recommended_actions: vec!["monitor affected systems".to_string()],
            fallback_used: true,
        }
    }
}
