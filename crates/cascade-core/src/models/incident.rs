use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::decision::DecisionAction;
use super::prediction::FusedPrediction;
use crate::alert::{Alert, Severity};
use crate::confidence::Confidence;
use crate::errors::ValidationError;

/// How a predicted/handled incident actually turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Partial,
    Failure,
}

impl Outcome {
    /// Effectiveness score fed into pattern learning.
    pub fn effectiveness(self) -> f64 {
        match self {
            Outcome::Success => 1.0,
            Outcome::Partial => 0.5,
            Outcome::Failure => 0.0,
        }
    }

    /// An outcome counts as successful when effectiveness exceeds 0.5.
    pub fn is_successful(self) -> bool {
        self.effectiveness() > 0.5
    }
}

impl FromStr for Outcome {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "success" => Ok(Outcome::Success),
            "partial" => Ok(Outcome::Partial),
            "failure" => Ok(Outcome::Failure),
            other => Err(ValidationError::UnknownOutcome {
                value: other.to_string(),
            }),
        }
    }
}

/// Append-only record of one analysis cycle, kept in the learning memory
/// store. Summarizes the alerts rather than retaining them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub client_id: String,
    pub alert_count: usize,
    /// Distinct categories seen in the batch.
    pub categories: Vec<String>,
    pub max_severity: Severity,
    pub predicted_in_minutes: f64,
    pub confidence: Confidence,
    pub action: DecisionAction,
    pub pattern: Option<String>,
    /// Filled in when outcome feedback arrives.
    pub outcome: Option<Outcome>,
    pub actual_time_to_event_minutes: Option<f64>,
    pub recovery_actions: Vec<String>,
}

impl IncidentRecord {
    /// Summarize a completed analysis cycle.
    pub fn summarize(
        client_id: &str,
        alerts: &[Alert],
        prediction: &FusedPrediction,
        action: DecisionAction,
    ) -> Self {
        let mut categories: Vec<String> = alerts.iter().map(|a| a.category.clone()).collect();
        categories.sort();
        categories.dedup();
        let max_severity = alerts
            .iter()
            .map(|a| a.severity)
            .max()
            .unwrap_or(Severity::Low);
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            client_id: client_id.to_string(),
            alert_count: alerts.len(),
            categories,
            max_severity,
            predicted_in_minutes: prediction.predicted_in_minutes,
            confidence: prediction.confidence,
            action,
            pattern: prediction.pattern.clone(),
            outcome: None,
            actual_time_to_event_minutes: None,
            recovery_actions: vec![],
        }
    }
}

/// Learning feedback for a past prediction.
#[derive(Debug, Clone)]
pub struct OutcomeFeedback {
    pub client_id: String,
    pub alerts: Vec<Alert>,
    pub prediction: FusedPrediction,
    pub outcome: Outcome,
    pub actual_time_to_event_minutes: Option<f64>,
    pub recovery_actions_taken: Vec<String>,
}
