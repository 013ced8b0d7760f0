//! The decision policy engine: features → scores → selection table →
//! decision, with the classifier hook and the adaptive threshold applied.

use cascade_core::config::DecisionConfig;
use cascade_core::models::{Decision, DecisionAction, FusedPrediction, Priority};
use cascade_core::traits::StrandInput;
use tracing::{info, warn};

use crate::classifier::{IDecisionClassifier, NoOpClassifier};
use crate::features::FeatureVector;
use crate::scorer::ImpactScores;
use crate::threshold::AdaptiveThreshold;

/// Selection table over the aggregate scores.
pub fn select_action(scores: &ImpactScores) -> DecisionAction {
    if scores.sla_risk > 0.8 && scores.business_impact > 0.7 {
        DecisionAction::Escalate
    } else if scores.business_impact > 0.6 || scores.sla_risk > 0.6 {
        DecisionAction::Prevent
    } else if scores.business_impact > 0.3 {
        DecisionAction::Monitor
    } else {
        DecisionAction::Ignore
    }
}

/// Priority from the action and the business impact; monotonic with impact
/// within each action.
pub fn priority_for(action: DecisionAction, business_impact: f64) -> Priority {
    match action {
        DecisionAction::Escalate => {
            if business_impact > 0.8 {
                Priority::Critical
            } else {
                Priority::High
            }
        }
        DecisionAction::Prevent => {
            if business_impact > 0.7 {
                Priority::High
            } else {
                Priority::Medium
            }
        }
        DecisionAction::Monitor => {
            if business_impact > 0.5 {
                Priority::Medium
            } else {
                Priority::Low
            }
        }
        DecisionAction::Ignore => Priority::Low,
    }
}

pub struct DecisionEngine {
    threshold: AdaptiveThreshold,
    classifier: Box<dyn IDecisionClassifier>,
}

impl DecisionEngine {
    pub fn new(config: DecisionConfig) -> Self {
        Self {
            threshold: AdaptiveThreshold::new(config),
            classifier: Box::new(NoOpClassifier),
        }
    }

    pub fn with_classifier(mut self, classifier: Box<dyn IDecisionClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn confidence_threshold(&self) -> f64 {
        self.threshold.value()
    }

    /// Feed the trailing success rate back into the confidence threshold.
    pub fn adapt(&mut self, trailing_success_rate: f64) {
        self.threshold.update(trailing_success_rate);
    }

    /// Decide what to do about a fused prediction.
    ///
    /// Never fails: a classifier error degrades to the fixed monitor
    /// fallback with `fallback_used` set.
    pub fn decide(&self, input: &StrandInput, prediction: &FusedPrediction) -> Decision {
        let features = FeatureVector::extract(input, prediction);
        let scores = ImpactScores::from_features(&features);
        let mut action = select_action(&scores);

        match self.classifier.classify(&features, action) {
            Ok(Some(overridden)) => {
                info!(proposed = %action, chosen = %overridden, "classifier overrode selection");
                action = overridden;
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "classifier failed; using fixed fallback decision");
                return Decision::fallback();
            }
        }

        // Below the adaptive threshold the engine does not act on its own
        // prediction; active choices demote to monitoring.
        if prediction.confidence.value() < self.threshold.value()
            && matches!(action, DecisionAction::Escalate | DecisionAction::Prevent)
        {
            info!(
                confidence = prediction.confidence.value(),
                threshold = self.threshold.value(),
                demoted_from = %action,
                "confidence below threshold, demoting to monitor"
            );
            action = DecisionAction::Monitor;
        }

        let recommended_actions = if prediction.prevention_actions.is_empty() {
            vec!["monitor affected systems".to_string()]
        } else {
            prediction.prevention_actions.clone()
        };

        Decision {
            action,
            priority: priority_for(action, scores.business_impact),
            confidence: prediction.confidence,
            business_impact: scores.business_impact,
            cost_impact: scores.cost_impact,
            sla_risk: scores.sla_risk,
            recommended_actions,
            fallback_used: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_core::alert::{Alert, Severity};
    use cascade_core::errors::DecisionError;
    use cascade_core::models::Urgency;
    use cascade_core::topology::{ClientTier, ClientTopology};
    use cascade_core::Confidence;
    use chrono::Utc;

    fn scores(business_impact: f64, sla_risk: f64) -> ImpactScores {
        ImpactScores {
            business_impact,
            cost_impact: 0.5,
            sla_risk,
        }
    }

    #[test]
    fn high_impact_high_sla_escalates_critical() {
        let s = scores(0.9, 0.9);
        let action = select_action(&s);
        assert_eq!(action, DecisionAction::Escalate);
        assert_eq!(priority_for(action, s.business_impact), Priority::Critical);
    }

    #[test]
    fn low_scores_ignore() {
        assert_eq!(select_action(&scores(0.2, 0.1)), DecisionAction::Ignore);
    }

    #[test]
    fn middle_band_prevents_or_monitors() {
        assert_eq!(select_action(&scores(0.65, 0.4)), DecisionAction::Prevent);
        assert_eq!(select_action(&scores(0.4, 0.65)), DecisionAction::Prevent);
        assert_eq!(select_action(&scores(0.4, 0.4)), DecisionAction::Monitor);
    }

    #[test]
    fn priority_is_monotonic_with_business_impact() {
        for action in [
            DecisionAction::Escalate,
            DecisionAction::Prevent,
            DecisionAction::Monitor,
            DecisionAction::Ignore,
        ] {
            let mut last = Priority::Low;
            for step in 0..=10 {
                let p = priority_for(action, step as f64 / 10.0);
                assert!(p >= last, "priority regressed for {action}");
                last = p;
            }
        }
    }

    fn prediction(confidence: f64) -> FusedPrediction {
        FusedPrediction {
            predicted_in_minutes: 10.0,
            confidence: Confidence::new(confidence),
            urgency: Urgency::High,
            affected_systems: vec!["database".to_string()],
            prevention_actions: vec!["scale database connection pool".to_string()],
            root_causes: vec![],
            pattern: None,
            strand_diagnostics: vec![],
            fallback_used: false,
        }
    }

    fn critical_input() -> StrandInput {
        let mut topo = ClientTopology::new("acme", ClientTier::Enterprise);
        topo.mark_critical("database");
        StrandInput::new(
            vec![Alert {
                id: "a".to_string(),
                client_id: "acme".to_string(),
                system: "database".to_string(),
                severity: Severity::Critical,
                category: "database".to_string(),
                message: "pool exhausted".to_string(),
                timestamp: Utc::now(),
                cascade_risk: Confidence::new(0.8),
            }],
            topo,
            vec![],
        )
    }

    #[test]
    fn confident_critical_batch_escalates() {
        let engine = DecisionEngine::new(DecisionConfig::default());
        let decision = engine.decide(&critical_input(), &prediction(0.9));
        assert!(matches!(
            decision.action,
            DecisionAction::Escalate | DecisionAction::Prevent
        ));
        assert!(decision.priority >= Priority::High);
        assert!(!decision.fallback_used);
    }

    #[test]
    fn low_confidence_demotes_to_monitor() {
        let engine = DecisionEngine::new(DecisionConfig::default());
        let decision = engine.decide(&critical_input(), &prediction(0.2));
        assert_eq!(decision.action, DecisionAction::Monitor);
    }

    #[test]
    fn classifier_error_degrades_to_fallback() {
        struct Broken;
        impl IDecisionClassifier for Broken {
            fn classify(
                &self,
                _features: &FeatureVector,
                _proposed: DecisionAction,
            ) -> Result<Option<DecisionAction>, DecisionError> {
                Err(DecisionError::Classifier {
                    reason: "model unavailable".to_string(),
                })
            }
        }
        let engine =
            DecisionEngine::new(DecisionConfig::default()).with_classifier(Box::new(Broken));
        let decision = engine.decide(&critical_input(), &prediction(0.9));
        assert!(decision.fallback_used);
        assert_eq!(decision.action, DecisionAction::Monitor);
        assert_eq!(decision.priority, Priority::Medium);
    }

    #[test]
    fn classifier_override_is_applied() {
        struct ForceIgnore;
        impl IDecisionClassifier for ForceIgnore {
            fn classify(
                &self,
                _features: &FeatureVector,
                _proposed: DecisionAction,
            ) -> Result<Option<DecisionAction>, DecisionError> {
                Ok(Some(DecisionAction::Ignore))
            }
        }
        let engine =
            DecisionEngine::new(DecisionConfig::default()).with_classifier(Box::new(ForceIgnore));
        let decision = engine.decide(&critical_input(), &prediction(0.9));
        assert_eq!(decision.action, DecisionAction::Ignore);
        assert_eq!(decision.priority, Priority::Low);
    }
}
