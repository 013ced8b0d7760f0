//! Dependency-failure analyzer — looks for alerting systems whose declared
//! dependencies are also alerting, i.e. the failure follows topology edges.

use std::collections::HashSet;

use cascade_core::alert::Severity;
use cascade_core::models::{FailureFinding, FailureKind};
use cascade_core::traits::{IFailureAnalyzer, StrandInput};
use cascade_core::Confidence;

pub struct DependencyFailureAnalyzer;

impl IFailureAnalyzer for DependencyFailureAnalyzer {
    fn kind(&self) -> FailureKind {
        FailureKind::DependencyFailure
    }

    fn analyze(&self, input: &StrandInput) -> FailureFinding {
        if input.alerts.is_empty() {
            return FailureFinding::failed(self.kind(), "empty alert batch");
        }

        let alerting: HashSet<&str> = input.alerts.iter().map(|a| a.system.as_str()).collect();

        // Edges within the alerting set: system alerting while one of its
        // dependencies alerts too.
        let mut edges: Vec<String> = Vec::new();
        for system in &alerting {
            for dep in input.topology.dependencies_of(system) {
                if alerting.contains(dep.as_str()) {
                    edges.push(format!("{system} <- {dep}"));
                }
            }
        }

        if edges.is_empty() {
            return FailureFinding {
                kind: self.kind(),
                severity: Severity::Low,
                confidence: Confidence::new(0.05),
                indicators: vec![],
                reasoning: "no dependency edges between alerting systems".to_string(),
                latency_ms: 0,
            };
        }

        let max_severity = input
            .alerts
            .iter()
            .map(|a| a.severity)
            .max()
            .unwrap_or(Severity::Low);
        let score = (edges.len() as f64 / 3.0).min(1.0);
        edges.sort();

        FailureFinding {
            kind: self.kind(),
            severity: max_severity,
            confidence: Confidence::new(0.3 + 0.5 * score),
            reasoning: format!("{} dependency edge(s) among alerting systems", edges.len()),
            indicators: edges,
            latency_ms: 0,
        }
    }
}
