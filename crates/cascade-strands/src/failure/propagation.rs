//! Cascade-propagation analyzer — detects an incident spreading across
//! systems over time rather than sitting in one place.

use std::collections::BTreeMap;

use cascade_core::alert::Severity;
use cascade_core::models::{FailureFinding, FailureKind};
use cascade_core::traits::{IFailureAnalyzer, StrandInput};
use cascade_core::Confidence;

pub struct PropagationAnalyzer;

impl IFailureAnalyzer for PropagationAnalyzer {
    fn kind(&self) -> FailureKind {
        FailureKind::CascadePropagation
    }

    fn analyze(&self, input: &StrandInput) -> FailureFinding {
        if input.alerts.is_empty() {
            return FailureFinding::failed(self.kind(), "empty alert batch");
        }

        // First alert timestamp per system, in batch-time order.
        let mut first_seen: BTreeMap<&str, chrono::DateTime<chrono::Utc>> = BTreeMap::new();
        for alert in &input.alerts {
            first_seen
                .entry(alert.system.as_str())
                .and_modify(|t| *t = (*t).min(alert.timestamp))
                .or_insert(alert.timestamp);
        }

        if first_seen.len() < 2 {
            return FailureFinding {
                kind: self.kind(),
                severity: Severity::Low,
                confidence: Confidence::new(0.05),
                indicators: vec![],
                reasoning: "alerts confined to a single system".to_string(),
                latency_ms: 0,
            };
        }

        let mut onsets: Vec<_> = first_seen.iter().collect();
        onsets.sort_by_key(|(_, t)| **t);
        let span_secs = (*onsets[onsets.len() - 1].1 - *onsets[0].1).num_seconds().max(0);

        // Staggered onsets across systems within a tight window read as
        // propagation; simultaneous onsets read as a shared external cause.
        let spread = ((first_seen.len() - 1) as f64 / 4.0).min(1.0);
        let staggering = if span_secs == 0 {
            0.3
        } else {
            1.0 - ((span_secs as f64 / 1800.0).min(1.0))
        };
        let score = 0.6 * spread + 0.4 * staggering;

        let max_severity = input
            .alerts
            .iter()
            .map(|a| a.severity)
            .max()
            .unwrap_or(Severity::Low);

        FailureFinding {
            kind: self.kind(),
            severity: max_severity,
            confidence: Confidence::new(0.15 + 0.6 * score),
            indicators: onsets.iter().map(|(s, _)| s.to_string()).collect(),
            reasoning: format!(
                "{} systems affected over {span_secs}s (spread {spread:.2}, staggering {staggering:.2})",
                first_seen.len()
            ),
            latency_ms: 0,
        }
    }
}
