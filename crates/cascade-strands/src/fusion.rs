//! Fusion aggregator — combines the strand results into one prediction.
//!
//! Fixed per-strand weights (summing to 1.0). Confidence is the
//! weighted mean over strands with confidence > 0; the time estimate is
//! additionally confidence-weighted so low-confidence strands pull less.

use std::collections::BTreeSet;

use cascade_core::constants::{clamp_minutes, MAX_ROOT_CAUSES};
use cascade_core::models::{
    FusedPrediction, StrandDiagnostic, StrandKind, StrandResult, Urgency,
};
use cascade_core::Confidence;
use tracing::{info, warn};

pub const W_TEMPORAL: f64 = 0.20;
pub const W_DEPENDENCY: f64 = 0.15;
pub const W_RESOURCE: f64 = 0.15;
pub const W_PATTERN: f64 = 0.25;
pub const W_CROSS_CLIENT: f64 = 0.10;
pub const W_PREDICTIVE: f64 = 0.15;

pub fn strand_weight(kind: StrandKind) -> f64 {
    match kind {
        StrandKind::Temporal => W_TEMPORAL,
        StrandKind::Dependency => W_DEPENDENCY,
        StrandKind::Resource => W_RESOURCE,
        StrandKind::Pattern => W_PATTERN,
        StrandKind::CrossClient => W_CROSS_CLIENT,
        StrandKind::Predictive => W_PREDICTIVE,
    }
}

fn urgency_for(confidence: f64, minutes: f64) -> Urgency {
    if confidence > 0.8 && minutes < 10.0 {
        Urgency::Critical
    } else if confidence > Confidence::HIGH && minutes < 20.0 {
        Urgency::High
    } else if confidence > Confidence::MEDIUM {
        Urgency::Medium
    } else {
        Urgency::Low
    }
}

/// Fuse all strand results into a single prediction.
///
/// Failed strands (confidence 0) are excluded from the weighted means but
/// kept in the diagnostics. When every strand failed, the conservative
/// fallback is returned instead of a fabricated estimate.
pub fn fuse(results: &[StrandResult]) -> FusedPrediction {
    let diagnostics: Vec<StrandDiagnostic> = results
        .iter()
        .map(|r| StrandDiagnostic {
            kind: r.kind,
            confidence: r.confidence,
            latency_ms: r.latency_ms,
        })
        .collect();

    let positive: Vec<&StrandResult> =
        results.iter().filter(|r| r.confidence.is_signal()).collect();
    if positive.is_empty() {
        warn!("all strands failed; falling back to conservative prediction");
        let mut fallback = FusedPrediction::conservative(vec![]);
        fallback.strand_diagnostics = diagnostics;
        return fallback;
    }

    let weight_sum: f64 = positive.iter().map(|r| strand_weight(r.kind)).sum();
    let confidence = Confidence::new(
        positive
            .iter()
            .map(|r| r.confidence.value() * strand_weight(r.kind))
            .sum::<f64>()
            / weight_sum,
    );

    // Time estimate weighted by both strand weight and strand confidence.
    let time_weight_sum: f64 = positive
        .iter()
        .map(|r| strand_weight(r.kind) * r.confidence.value())
        .sum();
    let minutes = clamp_minutes(
        positive
            .iter()
            .map(|r| r.prediction.minutes * strand_weight(r.kind) * r.confidence.value())
            .sum::<f64>()
            / time_weight_sum,
    );

    // Union of systems and actions, deduplicated and stable.
    let affected_systems: Vec<String> = positive
        .iter()
        .flat_map(|r| r.prediction.affected_systems.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let prevention_actions: Vec<String> = positive
        .iter()
        .flat_map(|r| r.prediction.prevention_actions.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    // Root causes: reasoning of the highest-confidence strands above the
    // high-confidence bar.
    let mut confident: Vec<&StrandResult> = positive
        .iter()
        .copied()
        .filter(|r| r.confidence.is_high())
        .collect();
    confident.sort_by(|a, b| {
        b.confidence
            .value()
            .partial_cmp(&a.confidence.value())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let root_causes: Vec<String> = confident
        .iter()
        .take(MAX_ROOT_CAUSES)
        .map(|r| format!("{}: {}", r.kind, r.reasoning))
        .collect();

    // Pattern from the most confident strand that named one.
    let pattern = positive
        .iter()
        .filter(|r| r.prediction.pattern.is_some())
        .max_by(|a, b| {
            a.confidence
                .value()
                .partial_cmp(&b.confidence.value())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .and_then(|r| r.prediction.pattern.clone());

    let urgency = urgency_for(confidence.value(), minutes);
    info!(
        confidence = confidence.value(),
        minutes,
        %urgency,
        strands_positive = positive.len(),
        strands_total = results.len(),
        "fused strand results"
    );

    FusedPrediction {
        predicted_in_minutes: minutes,
        confidence,
        urgency,
        affected_systems,
        prevention_actions,
        root_causes,
        pattern,
        strand_diagnostics: diagnostics,
        fallback_used: false,
    }
}
