//! The reasoner surface the engine talks to.
//!
//! Wraps any [`IReasoner`] with retry, malformed-body salvage, and the
//! templated fallback. The result is total: every call produces a
//! narration, and `fallback_used` records which path produced it.

use cascade_core::config::ReasonerConfig;
use cascade_core::errors::ReasonerError;
use cascade_core::models::FusedPrediction;
use cascade_core::traits::IReasoner;
use serde_json::json;
use tracing::{info, warn};

use crate::extract::{extract, Extraction};
use crate::fallback::narrate;
use crate::retry::with_retry;

/// Narrated explanation of a fused prediction.
#[derive(Debug, Clone)]
pub struct Narration {
    pub text: String,
    /// True when the text came from the deterministic template rather than
    /// the external service.
    pub fallback_used: bool,
    /// Fields salvaged from the service response, when any.
    pub extraction: Extraction,
}

pub struct ReasonerService {
    inner: Option<Box<dyn IReasoner>>,
    config: ReasonerConfig,
}

impl ReasonerService {
    pub fn new(inner: Box<dyn IReasoner>, config: ReasonerConfig) -> Self {
        Self {
            inner: Some(inner),
            config,
        }
    }

    /// A service with no external reasoner; every call takes the template path.
    pub fn disabled() -> Self {
        Self {
            inner: None,
            config: ReasonerConfig::default(),
        }
    }

    fn prompt_for(prediction: &FusedPrediction) -> (String, serde_json::Value) {
        let prompt = format!(
            "An alert-fusion engine predicts a cascade in {:.0} minutes with \
             confidence {:.2} (urgency {}). Affected systems: {}. Explain the \
             likely root cause and the most effective prevention step.",
            prediction.predicted_in_minutes,
            prediction.confidence.value(),
            prediction.urgency,
            prediction.affected_systems.join(", "),
        );
        let schema = json!({
            "type": "object",
            "properties": {
                "text": { "type": "string" }
            },
            "required": ["text"]
        });
        (prompt, schema)
    }

    /// Narrate a prediction. Never fails and never blocks past the
    /// configured retry budget.
    pub fn explain(&self, prediction: &FusedPrediction) -> Narration {
        let Some(inner) = self.inner.as_ref().filter(|r| r.is_enabled()) else {
            return Narration {
                text: narrate(prediction),
                fallback_used: true,
                extraction: Extraction::default(),
            };
        };

        let (prompt, schema) = Self::prompt_for(prediction);
        match with_retry(inner.as_ref(), &self.config, &prompt, &schema) {
            Ok(text) => {
                let extraction = extract(&text);
                Narration {
                    text,
                    fallback_used: false,
                    extraction,
                }
            }
            Err(ReasonerError::MalformedResponse { body }) => {
                // Salvage what the prose contains; the template covers the rest.
                let extraction = extract(&body);
                if extraction.is_empty() {
                    warn!("reasoner response unusable; falling back to template");
                    Narration {
                        text: narrate(prediction),
                        fallback_used: true,
                        extraction,
                    }
                } else {
                    info!("salvaged fields from non-schema reasoner response");
                    let mut text = narrate(prediction);
                    if let Some(cause) = &extraction.cause {
                        text.push_str(&format!(" External analysis points to: {cause}."));
                    }
                    Narration {
                        text,
                        fallback_used: false,
                        extraction,
                    }
                }
            }
            Err(err) => {
                warn!(error = %err, "reasoner unavailable; falling back to template");
                Narration {
                    text: narrate(prediction),
                    fallback_used: true,
                    extraction: Extraction::default(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_core::models::Urgency;
    use cascade_core::Confidence;

    fn prediction() -> FusedPrediction {
        FusedPrediction {
            predicted_in_minutes: 12.0,
            confidence: Confidence::new(0.8),
            urgency: Urgency::High,
            affected_systems: vec!["database".to_string()],
            prevention_actions: vec!["fail over to read replica".to_string()],
            root_causes: vec![],
            pattern: None,
            strand_diagnostics: vec![],
            fallback_used: false,
        }
    }

    struct AlwaysFails;
    impl IReasoner for AlwaysFails {
        fn reason(
            &self,
            _prompt: &str,
            _schema: &serde_json::Value,
        ) -> Result<String, ReasonerError> {
            Err(ReasonerError::Transport {
                reason: "refused".to_string(),
            })
        }
        fn is_enabled(&self) -> bool {
            true
        }
    }

    struct NonSchema;
    impl IReasoner for NonSchema {
        fn reason(
            &self,
            _prompt: &str,
            _schema: &serde_json::Value,
        ) -> Result<String, ReasonerError> {
            Err(ReasonerError::MalformedResponse {
                body: "Expect trouble in 9 minutes, confidence 90%. \
                       Root cause: replica lag."
                    .to_string(),
            })
        }
        fn is_enabled(&self) -> bool {
            true
        }
    }

    fn fast_config() -> ReasonerConfig {
        ReasonerConfig {
            enabled: true,
            max_attempts: 2,
            backoff_base_ms: 1,
            backoff_cap_ms: 10,
            ..ReasonerConfig::default()
        }
    }

    #[test]
    fn disabled_service_uses_template() {
        let narration = ReasonerService::disabled().explain(&prediction());
        assert!(narration.fallback_used);
        assert!(narration.text.contains("12 minutes"));
    }

    #[test]
    fn persistent_failure_uses_template() {
        let service = ReasonerService::new(Box::new(AlwaysFails), fast_config());
        let narration = service.explain(&prediction());
        assert!(narration.fallback_used);
        assert!(narration.text.contains("80%"));
    }

    #[test]
    fn malformed_response_is_salvaged_not_surfaced() {
        let service = ReasonerService::new(Box::new(NonSchema), fast_config());
        let narration = service.explain(&prediction());
        assert!(!narration.fallback_used);
        assert_eq!(narration.extraction.minutes, Some(9.0));
        assert_eq!(narration.extraction.confidence, Some(0.9));
        assert!(narration.text.contains("replica lag"));
    }
}
