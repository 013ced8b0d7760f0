//! Temporal strand — inter-arrival variance and severity progression.
//!
//! Tightly clustered, regular bursts of high-severity alerts score high;
//! sparse or low-severity traffic scores low.

use cascade_core::constants::clamp_minutes;
use cascade_core::models::{StrandKind, StrandPrediction, StrandResult};
use cascade_core::traits::{IStrand, StrandInput};
use cascade_core::Confidence;

use super::{burst_factor, mean_gap_secs};

pub struct TemporalStrand;

impl IStrand for TemporalStrand {
    fn kind(&self) -> StrandKind {
        StrandKind::Temporal
    }

    fn analyze(&self, input: &StrandInput) -> StrandResult {
        let Some(mean_gap) = mean_gap_secs(input) else {
            return StrandResult {
                kind: self.kind(),
                confidence: Confidence::new(0.25),
                prediction: StrandPrediction {
                    minutes: 45.0,
                    ..StrandPrediction::default()
                },
                reasoning: "too few alerts for inter-arrival analysis".to_string(),
                latency_ms: 0,
            };
        };

        let mut times: Vec<_> = input.alerts.iter().map(|a| a.timestamp).collect();
        times.sort();
        let gaps: Vec<f64> = times
            .windows(2)
            .map(|w| (w[1] - w[0]).num_milliseconds() as f64 / 1000.0)
            .collect();

        // Coefficient of variation of the gaps: low variance means a steady
        // burst rather than scattered noise.
        let variance =
            gaps.iter().map(|g| (g - mean_gap).powi(2)).sum::<f64>() / gaps.len() as f64;
        let cv = if mean_gap > 0.0 {
            variance.sqrt() / mean_gap
        } else {
            0.0
        };
        let regularity = 1.0 / (1.0 + cv);
        let clustering = 0.7 * burst_factor(mean_gap) + 0.3 * regularity;

        // Severity-weighted progression: escalating severity earns a bonus.
        let weights: Vec<f64> = {
            let mut sorted: Vec<_> = input.alerts.iter().collect();
            sorted.sort_by_key(|a| a.timestamp);
            sorted.iter().map(|a| a.severity.weight()).collect()
        };
        let mean_severity = weights.iter().sum::<f64>() / weights.len() as f64;
        let half = weights.len() / 2;
        let early: f64 = weights[..half].iter().sum::<f64>() / half.max(1) as f64;
        let late: f64 =
            weights[half..].iter().sum::<f64>() / (weights.len() - half).max(1) as f64;
        let escalation_bonus = if late > early { 0.1 } else { 0.0 };

        let confidence =
            Confidence::new(0.5 * clustering + 0.5 * mean_severity + escalation_bonus);

        StrandResult {
            kind: self.kind(),
            confidence,
            prediction: StrandPrediction {
                minutes: clamp_minutes(60.0 * (1.0 - confidence.value())),
                affected_systems: input.alert_systems().iter().map(|s| s.to_string()).collect(),
                prevention_actions: vec!["throttle alert storm sources".to_string()],
                pattern: None,
            },
            reasoning: format!(
                "mean inter-arrival {mean_gap:.0}s, clustering factor {clustering:.2}, \
                 mean severity weight {mean_severity:.2}"
            ),
            latency_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_core::alert::{Alert, Severity};
    use cascade_core::topology::{ClientTier, ClientTopology};
    use chrono::{Duration, Utc};

    fn alert(id: &str, offset_secs: i64, severity: Severity) -> Alert {
        Alert {
            id: id.to_string(),
            client_id: "acme".to_string(),
            system: "database".to_string(),
            severity,
            category: "database".to_string(),
            message: "connection pool exhausted".to_string(),
            timestamp: Utc::now() - Duration::minutes(10) + Duration::seconds(offset_secs),
            cascade_risk: Confidence::new(0.5),
        }
    }

    fn input(alerts: Vec<Alert>) -> StrandInput {
        StrandInput::new(
            alerts,
            ClientTopology::new("acme", ClientTier::Standard),
            vec![],
        )
    }

    #[test]
    fn dense_severe_burst_scores_above_point_six() {
        // 5 alerts, severities [critical, critical, warning, warning, info],
        // all within 3 minutes.
        let severities = [
            Severity::Critical,
            Severity::Critical,
            Severity::Warning,
            Severity::Warning,
            Severity::Info,
        ];
        let alerts: Vec<Alert> = severities
            .iter()
            .enumerate()
            .map(|(i, &s)| alert(&format!("a{i}"), i as i64 * 45, s))
            .collect();

        let result = TemporalStrand.analyze(&input(alerts));
        assert!(
            result.confidence.value() > 0.6,
            "confidence {} not above 0.6",
            result.confidence
        );
        assert!(result.prediction.minutes < 30.0);
    }

    #[test]
    fn single_alert_is_low_confidence_not_failure() {
        let result = TemporalStrand.analyze(&input(vec![alert("a", 0, Severity::Info)]));
        assert!(result.confidence.is_signal());
        assert!(result.confidence.value() < 0.4);
    }

    #[test]
    fn sparse_low_severity_scores_low() {
        let alerts: Vec<Alert> = (0..3)
            .map(|i| alert(&format!("a{i}"), i * 590, Severity::Low))
            .collect();
        let result = TemporalStrand.analyze(&input(alerts));
        assert!(result.confidence.value() < 0.5);
    }
}
