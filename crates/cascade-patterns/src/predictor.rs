//! Pattern-match predictor.
//!
//! Matches the batch against the pattern library, estimates time-to-cascade
//! and resolution time, and backfills with unused patterns so callers always
//! see 3–4 diverse predictions. Jitter is deterministic, derived from a
//! blake3 hash, so identical inputs produce identical predictions.

use cascade_core::alert::{Alert, Severity};
use cascade_core::config::PatternConfig;
use cascade_core::constants::clamp_minutes;
use cascade_core::topology::ClientTopology;
use cascade_core::Confidence;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::library::{self, CascadePattern};
use crate::matcher;

/// Confidence multiplier applied to backfill predictions.
const BACKFILL_FACTOR: f64 = 0.6;

/// Confidence of the generic no-match fallback prediction.
const GENERIC_CONFIDENCE: f64 = 0.35;

/// One predicted cascade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CascadePrediction {
    pub pattern: String,
    pub time_to_cascade_minutes: f64,
    pub resolution_minutes: f64,
    pub confidence: Confidence,
    pub affected_systems: Vec<String>,
    pub prevention_actions: Vec<String>,
    /// True when this prediction came from the backfill pass.
    pub backfill: bool,
}

/// Deterministic jitter in [-1, 1] derived from a seed string.
fn jitter(seed: &str) -> f64 {
    let hash = blake3::hash(seed.as_bytes());
    let raw = u16::from_le_bytes([hash.as_bytes()[0], hash.as_bytes()[1]]);
    (raw as f64 / u16::MAX as f64) * 2.0 - 1.0
}

/// Resolution multiplier for the number of directly dependent systems.
fn dependency_multiplier(dependents: usize) -> f64 {
    1.0 + 0.2 * dependents.min(8) as f64
}

/// Matches alert batches against the cascade pattern library.
pub struct PatternPredictor {
    library: Vec<CascadePattern>,
    config: PatternConfig,
}

impl PatternPredictor {
    pub fn new(config: PatternConfig) -> Self {
        Self {
            library: library::builtin(),
            config,
        }
    }

    pub fn with_library(library: Vec<CascadePattern>, config: PatternConfig) -> Self {
        Self { library, config }
    }

    pub fn library(&self) -> &[CascadePattern] {
        &self.library
    }

    fn build_prediction(
        &self,
        pattern: &CascadePattern,
        alert: &Alert,
        topology: &ClientTopology,
        hits: usize,
        backfill: bool,
    ) -> CascadePrediction {
        let seed = format!("{}:{}:{}", pattern.name, topology.client_id, alert.id);

        // First tier ± 20% deterministic jitter.
        let first_tier = pattern.time_tiers_minutes.first().copied().unwrap_or(30.0);
        let time_to_cascade =
            clamp_minutes(first_tier * (1.0 + 0.2 * jitter(&format!("{seed}:time"))));

        let dependents = topology.dependent_count([alert.system.as_str()]);
        let resolution = (pattern.base_resolution_minutes
            * dependency_multiplier(dependents)
            * (1.0 + 0.2 * jitter(&format!("{seed}:resolution"))))
        .max(1.0);

        // Forward and reverse edges from the matched system, merged with the
        // pattern's canonical failure sequence.
        let mut affected = topology.blast_radius([alert.system.as_str()]);
        for system in &pattern.system_sequence {
            if !affected.contains(system) {
                affected.push(system.clone());
            }
        }

        let extra_hits = hits.saturating_sub(self.config.min_trigger_hits);
        let mut confidence = (pattern.base_confidence + 0.03 * extra_hits as f64).min(0.95);
        if backfill {
            confidence *= BACKFILL_FACTOR;
        }

        CascadePrediction {
            pattern: pattern.name.clone(),
            time_to_cascade_minutes: time_to_cascade,
            resolution_minutes: resolution,
            confidence: Confidence::new(confidence),
            affected_systems: affected,
            prevention_actions: pattern.prevention_actions.clone(),
            backfill,
        }
    }

    /// Best trigger-hit count for a pattern over the batch, with the alert
    /// that produced it.
    fn best_match<'a>(
        &self,
        pattern: &CascadePattern,
        alerts: &'a [Alert],
    ) -> Option<(&'a Alert, usize)> {
        alerts
            .iter()
            .map(|alert| {
                let related = matcher::related_window(alert, alerts, self.config.related_window_mins);
                (alert, matcher::trigger_hits(pattern, alert, &related))
            })
            .max_by_key(|(_, hits)| *hits)
            .filter(|(_, hits)| *hits > 0)
    }

    /// Produce 0 to `max_predictions` cascade predictions for the batch.
    pub fn predict(
        &self,
        alerts: &[Alert],
        topology: &ClientTopology,
    ) -> Vec<CascadePrediction> {
        if alerts.is_empty() {
            return vec![];
        }

        let mut predictions: Vec<CascadePrediction> = Vec::new();
        let mut used: Vec<&str> = Vec::new();

        // Primary pass: full trigger-hit requirement.
        for pattern in &self.library {
            if let Some((alert, hits)) = self.best_match(pattern, alerts) {
                if hits >= self.config.min_trigger_hits {
                    predictions.push(self.build_prediction(pattern, alert, topology, hits, false));
                    used.push(pattern.name.as_str());
                }
            }
        }

        // No-match fallback: a critical alert with dependents still yields a
        // lower-confidence generic prediction.
        if predictions.is_empty() {
            if let Some(alert) = alerts.iter().find(|a| {
                a.severity == Severity::Critical
                    && topology.dependent_count([a.system.as_str()]) > 0
            }) {
                predictions.push(CascadePrediction {
                    pattern: "generic_cascade".to_string(),
                    time_to_cascade_minutes: 30.0,
                    resolution_minutes: 45.0,
                    confidence: Confidence::new(GENERIC_CONFIDENCE),
                    affected_systems: topology.blast_radius([alert.system.as_str()]),
                    prevention_actions: vec![
                        "isolate the affected system".to_string(),
                        "notify dependent service owners".to_string(),
                    ],
                    backfill: false,
                });
            }
        }

        // Backfill: unused patterns matched against any alert at a single
        // hit, at reduced confidence, until enough diverse predictions exist.
        // Runs even when the primary pass found nothing; best_match still
        // requires at least one hit, so pure noise stays empty.
        if predictions.len() < self.config.min_predictions {
            for pattern in &self.library {
                if predictions.len() >= self.config.min_predictions {
                    break;
                }
                if used.contains(&pattern.name.as_str()) {
                    continue;
                }
                if let Some((alert, hits)) = self.best_match(pattern, alerts) {
                    predictions.push(self.build_prediction(pattern, alert, topology, hits, true));
                }
            }
        }

        predictions.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        predictions.truncate(self.config.max_predictions);

        debug!(
            client = %topology.client_id,
            alerts = alerts.len(),
            predictions = predictions.len(),
            "pattern prediction complete"
        );

        predictions
    }
}

impl Default for PatternPredictor {
    fn default() -> Self {
        Self::new(PatternConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_core::topology::ClientTier;
    use chrono::{Duration, Utc};

    fn alert(id: &str, system: &str, severity: Severity, message: &str) -> Alert {
        Alert {
            id: id.to_string(),
            client_id: "acme".to_string(),
            system: system.to_string(),
            severity,
            category: "database".to_string(),
            message: message.to_string(),
            timestamp: Utc::now() - Duration::minutes(5),
            cascade_risk: Confidence::new(0.5),
        }
    }

    fn topology() -> ClientTopology {
        let mut t = ClientTopology::new("acme", ClientTier::Business);
        t.add_dependency("database", "api");
        t.add_dependency("database", "reporting");
        t.add_dependency("api", "web");
        t.mark_critical("database");
        t
    }

    #[test]
    fn database_alerts_match_database_pattern() {
        let alerts = vec![
            alert("a", "database", Severity::Critical, "connection pool exhausted"),
            alert("b", "database", Severity::Warning, "slow query storm"),
        ];
        let predictions = PatternPredictor::default().predict(&alerts, &topology());
        assert!(!predictions.is_empty());
        let top = &predictions[0];
        assert_eq!(top.pattern, "database_degradation");
        assert!(!top.backfill);
        assert!(top.confidence.value() >= 0.7);
        // First tier 15 ± 20%.
        assert!(top.time_to_cascade_minutes >= 12.0 && top.time_to_cascade_minutes <= 18.0);
        assert!(top.affected_systems.contains(&"api".to_string()));
    }

    #[test]
    fn predictions_are_deterministic() {
        let alerts = vec![alert(
            "a",
            "database",
            Severity::Critical,
            "connection pool exhausted",
        )];
        let predictor = PatternPredictor::default();
        let topo = topology();
        let first = predictor.predict(&alerts, &topo);
        let second = predictor.predict(&alerts, &topo);
        assert_eq!(
            first[0].time_to_cascade_minutes,
            second[0].time_to_cascade_minutes
        );
        assert_eq!(first[0].resolution_minutes, second[0].resolution_minutes);
    }

    #[test]
    fn critical_alert_without_pattern_gets_generic_prediction() {
        let alerts = vec![alert(
            "a",
            "database",
            Severity::Critical,
            "unclassifiable event zzz",
        )];
        // Message has no two trigger hits beyond "database" category/system,
        // but "database" appears in system and category text, so use a
        // system with dependents and no trigger overlap.
        let mut topo = ClientTopology::new("acme", ClientTier::Standard);
        topo.add_dependency("edge-proxy", "web");
        let alerts = vec![Alert {
            system: "edge-proxy".to_string(),
            category: "general".to_string(),
            ..alerts[0].clone()
        }];
        let predictions = PatternPredictor::default().predict(&alerts, &topo);
        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].pattern, "generic_cascade");
        assert!(predictions[0].confidence.value() < 0.5);
    }

    #[test]
    fn backfill_reaches_minimum_diverse_predictions() {
        let alerts = vec![
            alert("a", "database", Severity::Critical, "connection pool exhausted"),
            alert("b", "app-01", Severity::Warning, "memory leak suspected in heap"),
            alert("c", "net-01", Severity::Warning, "packet loss and high latency"),
        ];
        let predictions = PatternPredictor::default().predict(&alerts, &topology());
        assert!(predictions.len() >= 3);
        assert!(predictions.len() <= 4);
        // Diverse: all pattern names distinct.
        let mut names: Vec<&str> = predictions.iter().map(|p| p.pattern.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), predictions.len());
    }

    #[test]
    fn backfill_runs_when_primary_pass_finds_nothing() {
        // One trigger hit each for queue_backlog ("queue"), memory_exhaustion
        // ("heap"), network_partition ("dns") -- all below min_trigger_hits,
        // and no critical alert so the generic fallback stays out of it.
        let mut warning = alert(
            "a",
            "mq-01",
            Severity::Warning,
            "dns hiccup while draining queue into heap snapshots",
        );
        warning.category = "general".to_string();
        let predictions = PatternPredictor::default().predict(&[warning], &topology());
        assert_eq!(predictions.len(), 3);
        assert!(predictions.iter().all(|p| p.backfill));
        let mut names: Vec<&str> = predictions.iter().map(|p| p.pattern.as_str()).collect();
        names.sort();
        assert_eq!(
            names,
            vec!["memory_exhaustion", "network_partition", "queue_backlog"]
        );
    }

    #[test]
    fn noise_only_batch_yields_no_predictions() {
        let mut noise = alert("a", "edge-proxy", Severity::Warning, "unclassifiable event zzz");
        noise.category = "general".to_string();
        assert!(PatternPredictor::default()
            .predict(&[noise], &topology())
            .is_empty());
    }

    #[test]
    fn backfill_confidence_is_reduced() {
        let alerts = vec![alert(
            "a",
            "database",
            Severity::Critical,
            "connection pool exhausted deadlock",
        )];
        let predictions = PatternPredictor::default().predict(&alerts, &topology());
        for p in predictions.iter().filter(|p| p.backfill) {
            assert!(p.confidence.value() < 0.6);
        }
    }

    #[test]
    fn time_estimates_stay_in_bounds() {
        let alerts = vec![
            alert("a", "database", Severity::Critical, "deadlock timeout replication"),
            alert("b", "storage", Severity::Warning, "disk volume almost full"),
        ];
        for p in PatternPredictor::default().predict(&alerts, &topology()) {
            assert!(p.time_to_cascade_minutes >= 1.0);
            assert!(p.time_to_cascade_minutes <= 60.0);
            assert!(p.resolution_minutes >= 1.0);
        }
    }
}
