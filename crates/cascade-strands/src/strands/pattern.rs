//! Pattern strand — delegates to the pattern-match predictor and reuses its
//! top prediction.

use cascade_core::constants::clamp_minutes;
use cascade_core::models::{StrandKind, StrandPrediction, StrandResult};
use cascade_core::traits::{IStrand, StrandInput};
use cascade_core::Confidence;
use cascade_patterns::PatternPredictor;

#[derive(Default)]
pub struct PatternStrand {
    predictor: PatternPredictor,
}

impl PatternStrand {
    pub fn new(predictor: PatternPredictor) -> Self {
        Self { predictor }
    }
}

impl IStrand for PatternStrand {
    fn kind(&self) -> StrandKind {
        StrandKind::Pattern
    }

    fn analyze(&self, input: &StrandInput) -> StrandResult {
        let predictions = self.predictor.predict(&input.alerts, &input.topology);
        let Some(top) = predictions.first() else {
            return StrandResult {
                kind: self.kind(),
                confidence: Confidence::new(0.1),
                prediction: StrandPrediction {
                    minutes: 45.0,
                    ..StrandPrediction::default()
                },
                reasoning: "no cascade pattern matched the batch".to_string(),
                latency_ms: 0,
            };
        };

        StrandResult {
            kind: self.kind(),
            confidence: top.confidence,
            prediction: StrandPrediction {
                minutes: clamp_minutes(top.time_to_cascade_minutes),
                affected_systems: top.affected_systems.clone(),
                prevention_actions: top.prevention_actions.clone(),
                pattern: Some(top.pattern.clone()),
            },
            reasoning: format!(
                "matched cascade pattern '{}' ({} candidate(s), est. resolution {:.0}m)",
                top.pattern,
                predictions.len(),
                top.resolution_minutes
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
    use chrono::Utc;

    #[test]
    fn reuses_top_pattern_prediction() {
        let mut topo = ClientTopology::new("acme", ClientTier::Business);
        topo.add_dependency("database", "api");
        let alerts = vec![Alert {
            id: "a".to_string(),
            client_id: "acme".to_string(),
            system: "database".to_string(),
            severity: Severity::Critical,
            category: "database".to_string(),
            message: "connection pool exhausted".to_string(),
            timestamp: Utc::now(),
            cascade_risk: Confidence::new(0.6),
        }];
        let input = StrandInput::new(alerts, topo, vec![]);
        let result = PatternStrand::default().analyze(&input);
        assert_eq!(
            result.prediction.pattern.as_deref(),
            Some("database_degradation")
        );
        assert!(result.confidence.value() > 0.6);
    }
}
