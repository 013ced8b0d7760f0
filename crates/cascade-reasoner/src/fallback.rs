//! Deterministic narration template.
//!
//! Used whenever the external service is disabled or unreachable: the
//! numeric fusion output is turned into readable prose with no network and
//! no randomness, so the degraded path is fully reproducible.

use cascade_core::models::FusedPrediction;

pub fn narrate(prediction: &FusedPrediction) -> String {
    let mut out = format!(
        "Cascade risk assessed at {:.0}% confidence; projected impact in \
         approximately {:.0} minutes ({} urgency).",
        prediction.confidence.value() * 100.0,
        prediction.predicted_in_minutes,
        prediction.urgency,
    );

    if let Some(pattern) = &prediction.pattern {
        out.push_str(&format!(" Matches the known '{pattern}' cascade pattern."));
    }
    if !prediction.affected_systems.is_empty() {
        out.push_str(&format!(
            " Systems at risk: {}.",
            prediction.affected_systems.join(", ")
        ));
    }
    if let Some(cause) = prediction.root_causes.first() {
        out.push_str(&format!(" Leading indicator: {cause}."));
    }
    if !prediction.prevention_actions.is_empty() {
        out.push_str(&format!(
            " Recommended actions: {}.",
            prediction.prevention_actions.join("; ")
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_core::models::Urgency;
    use cascade_core::Confidence;

    fn prediction() -> FusedPrediction {
        FusedPrediction {
            predicted_in_minutes: 14.0,
            confidence: Confidence::new(0.72),
            urgency: Urgency::High,
            affected_systems: vec!["database".to_string(), "api".to_string()],
            prevention_actions: vec!["scale database connection pool".to_string()],
            root_causes: vec!["temporal: alerts escalating".to_string()],
            pattern: Some("database_degradation".to_string()),
            strand_diagnostics: vec![],
            fallback_used: false,
        }
    }

    #[test]
    fn narration_is_deterministic_and_complete() {
        let a = narrate(&prediction());
        let b = narrate(&prediction());
        assert_eq!(a, b);
        assert!(a.contains("72%"));
        assert!(a.contains("14 minutes"));
        assert!(a.contains("database_degradation"));
        assert!(a.contains("scale database connection pool"));
    }

    #[test]
    fn sparse_prediction_still_narrates() {
        let text = narrate(&FusedPrediction::conservative(vec![]));
        assert!(text.contains("30 minutes"));
        assert!(text.contains("low urgency"));
    }
}
