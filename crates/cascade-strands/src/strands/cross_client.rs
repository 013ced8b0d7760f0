//! Cross-client strand — searches the incident history for category and
//! severity matches; confidence scales with match count and how often those
//! incidents were handled successfully.

use cascade_core::constants::clamp_minutes;
use cascade_core::models::{StrandKind, StrandPrediction, StrandResult};
use cascade_core::traits::{IStrand, StrandInput};
use cascade_core::Confidence;

pub struct CrossClientStrand;

impl IStrand for CrossClientStrand {
    fn kind(&self) -> StrandKind {
        StrandKind::CrossClient
    }

    fn analyze(&self, input: &StrandInput) -> StrandResult {
        let Some(max_severity) = input.alerts.iter().map(|a| a.severity).max() else {
            return StrandResult::failed(self.kind(), "empty alert batch");
        };
        let categories: Vec<&str> = input.alerts.iter().map(|a| a.category.as_str()).collect();

        let matches: Vec<_> = input
            .history
            .iter()
            .filter(|record| {
                record.max_severity == max_severity
                    && record
                        .categories
                        .iter()
                        .any(|c| categories.contains(&c.as_str()))
            })
            .collect();

        if matches.is_empty() {
            return StrandResult {
                kind: self.kind(),
                confidence: Confidence::new(0.1),
                prediction: StrandPrediction {
                    minutes: 45.0,
                    ..StrandPrediction::default()
                },
                reasoning: "no similar incidents in history".to_string(),
                latency_ms: 0,
            };
        }

        let with_outcome: Vec<_> = matches.iter().filter(|r| r.outcome.is_some()).collect();
        let success_rate = if with_outcome.is_empty() {
            0.5
        } else {
            with_outcome
                .iter()
                .filter(|r| r.outcome.is_some_and(|o| o.is_successful()))
                .count() as f64
                / with_outcome.len() as f64
        };

        let confidence = Confidence::new(
            (0.15 * matches.len() as f64).min(0.6) * (0.5 + 0.5 * success_rate),
        );

        // Lean on what similar incidents actually did: prefer observed
        // time-to-event, fall back to what was predicted then.
        let minutes = {
            let times: Vec<f64> = matches
                .iter()
                .map(|r| {
                    r.actual_time_to_event_minutes
                        .unwrap_or(r.predicted_in_minutes)
                })
                .collect();
            clamp_minutes(times.iter().sum::<f64>() / times.len() as f64)
        };

        StrandResult {
            kind: self.kind(),
            confidence,
            prediction: StrandPrediction {
                minutes,
                affected_systems: input.alert_systems().iter().map(|s| s.to_string()).collect(),
                prevention_actions: vec![
                    "apply the remediation used for similar past incidents".to_string(),
                ],
                pattern: None,
            },
            reasoning: format!(
                "{} similar incident(s) in history, success rate {:.0}%",
                matches.len(),
                success_rate * 100.0
            ),
            latency_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_core::alert::{Alert, Severity};
    use cascade_core::models::{DecisionAction, IncidentRecord, Outcome};
    use cascade_core::topology::{ClientTier, ClientTopology};
    use chrono::Utc;

    fn alert() -> Alert {
        Alert {
            id: "a".to_string(),
            client_id: "acme".to_string(),
            system: "database".to_string(),
            severity: Severity::Critical,
            category: "database".to_string(),
            message: "pool exhausted".to_string(),
            timestamp: Utc::now(),
            cascade_risk: Confidence::new(0.5),
        }
    }

    fn record(outcome: Option<Outcome>, actual: Option<f64>) -> IncidentRecord {
        IncidentRecord {
            id: uuid(),
            timestamp: Utc::now(),
            client_id: "other".to_string(),
            alert_count: 4,
            categories: vec!["database".to_string()],
            max_severity: Severity::Critical,
            predicted_in_minutes: 20.0,
            confidence: Confidence::new(0.7),
            action: DecisionAction::Prevent,
            pattern: Some("database_degradation".to_string()),
            outcome,
            actual_time_to_event_minutes: actual,
            recovery_actions: vec![],
        }
    }

    fn uuid() -> String {
        use std::sync::atomic::{AtomicU32, Ordering};
        static N: AtomicU32 = AtomicU32::new(0);
        format!("rec-{}", N.fetch_add(1, Ordering::Relaxed))
    }

    #[test]
    fn no_history_is_low_signal() {
        let input = StrandInput::new(
            vec![alert()],
            ClientTopology::new("acme", ClientTier::Standard),
            vec![],
        );
        let result = CrossClientStrand.analyze(&input);
        assert!(result.confidence.is_signal());
        assert!(result.confidence.value() <= 0.1);
    }

    #[test]
    fn matches_raise_confidence_with_success_rate() {
        let successful: Vec<IncidentRecord> = (0..3)
            .map(|_| record(Some(Outcome::Success), Some(18.0)))
            .collect();
        let failed: Vec<IncidentRecord> =
            (0..3).map(|_| record(Some(Outcome::Failure), None)).collect();
        let topo = ClientTopology::new("acme", ClientTier::Standard);

        let good = CrossClientStrand.analyze(&StrandInput::new(
            vec![alert()],
            topo.clone(),
            successful,
        ));
        let bad = CrossClientStrand.analyze(&StrandInput::new(vec![alert()], topo, failed));
        assert!(good.confidence.value() > bad.confidence.value());
        // Observed time-to-event feeds the estimate.
        assert!((good.prediction.minutes - 18.0).abs() < 1e-9);
    }

    #[test]
    fn severity_mismatch_does_not_match() {
        let mut r = record(Some(Outcome::Success), None);
        r.max_severity = Severity::Info;
        let input = StrandInput::new(
            vec![alert()],
            ClientTopology::new("acme", ClientTier::Standard),
            vec![r],
        );
        let result = CrossClientStrand.analyze(&input);
        assert!(result.confidence.value() <= 0.1);
    }
}
