//! Predictive composite strand — fixed-weight linear blend of five
//! normalized factors: alert density, severity weight, system diversity,
//! category risk, and temporal clustering.

use std::collections::HashSet;

use cascade_core::constants::clamp_minutes;
use cascade_core::models::{StrandKind, StrandPrediction, StrandResult};
use cascade_core::traits::{IStrand, StrandInput};
use cascade_core::Confidence;

use super::{burst_factor, mean_gap_secs};

const W_DENSITY: f64 = 0.25;
const W_SEVERITY: f64 = 0.25;
const W_DIVERSITY: f64 = 0.15;
const W_CATEGORY: f64 = 0.20;
const W_CLUSTERING: f64 = 0.15;

/// Intrinsic cascade risk per alert category.
fn category_risk(category: &str) -> f64 {
    match category {
        "database" => 0.9,
        "security" => 0.85,
        "network" => 0.8,
        "storage" => 0.7,
        "application" => 0.6,
        "general" => 0.4,
        _ => 0.5,
    }
}

pub struct PredictiveStrand;

impl IStrand for PredictiveStrand {
    fn kind(&self) -> StrandKind {
        StrandKind::Predictive
    }

    fn analyze(&self, input: &StrandInput) -> StrandResult {
        if input.alerts.is_empty() {
            return StrandResult::failed(self.kind(), "empty alert batch");
        }

        let density = (input.alerts.len() as f64 / 10.0).min(1.0);

        let severity = input
            .alerts
            .iter()
            .map(|a| a.severity.weight())
            .sum::<f64>()
            / input.alerts.len() as f64;

        let systems: HashSet<&str> = input.alerts.iter().map(|a| a.system.as_str()).collect();
        let diversity = systems.len() as f64 / input.alerts.len() as f64;

        let category = input
            .alerts
            .iter()
            .map(|a| category_risk(&a.category))
            .fold(0.0f64, f64::max);

        let clustering = mean_gap_secs(input).map_or(0.0, burst_factor);

        let score = W_DENSITY * density
            + W_SEVERITY * severity
            + W_DIVERSITY * diversity
            + W_CATEGORY * category
            + W_CLUSTERING * clustering;
        let confidence = Confidence::new(score);

        StrandResult {
            kind: self.kind(),
            confidence,
            prediction: StrandPrediction {
                minutes: clamp_minutes(5.0 + 40.0 * (1.0 - score)),
                affected_systems: input.alert_systems().iter().map(|s| s.to_string()).collect(),
                prevention_actions: vec!["raise monitoring sensitivity on affected systems".to_string()],
                pattern: None,
            },
            reasoning: format!(
                "composite score {score:.2} (density {density:.2}, severity {severity:.2}, \
                 diversity {diversity:.2}, category {category:.2}, clustering {clustering:.2})"
            ),
            latency_ms: 0,
        }
    }
}
