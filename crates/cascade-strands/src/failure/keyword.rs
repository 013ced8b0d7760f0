//! Keyword-dictionary failure analyzer, shared by the five text-driven modes.

use cascade_core::alert::Severity;
use cascade_core::models::{FailureFinding, FailureKind};
use cascade_core::traits::{IFailureAnalyzer, StrandInput};
use cascade_core::Confidence;

pub struct KeywordAnalyzer {
    kind: FailureKind,
    keywords: &'static [&'static str],
}

impl KeywordAnalyzer {
    pub fn new(kind: FailureKind, keywords: &'static [&'static str]) -> Self {
        Self { kind, keywords }
    }
}

impl IFailureAnalyzer for KeywordAnalyzer {
    fn kind(&self) -> FailureKind {
        self.kind
    }

    fn analyze(&self, input: &StrandInput) -> FailureFinding {
        if input.alerts.is_empty() {
            return FailureFinding::failed(self.kind, "empty alert batch");
        }

        let mut indicators: Vec<String> = Vec::new();
        let mut matched_weight = 0.0f64;
        let mut max_severity = Severity::Low;
        for alert in &input.alerts {
            let text = format!("{} {}", alert.category, alert.message).to_lowercase();
            let hits: Vec<&str> = self
                .keywords
                .iter()
                .copied()
                .filter(|k| text.contains(k))
                .collect();
            if hits.is_empty() {
                continue;
            }
            matched_weight += alert.severity.weight();
            max_severity = max_severity.max(alert.severity);
            for hit in hits {
                if !indicators.iter().any(|i| i == hit) {
                    indicators.push(hit.to_string());
                }
            }
        }

        let total_weight: f64 = input.alerts.iter().map(|a| a.severity.weight()).sum();
        if indicators.is_empty() || total_weight == 0.0 {
            return FailureFinding {
                kind: self.kind,
                severity: Severity::Low,
                confidence: Confidence::new(0.05),
                indicators: vec![],
                reasoning: "no matching indicators".to_string(),
                latency_ms: 0,
            };
        }

        let ratio = matched_weight / total_weight;
        FailureFinding {
            kind: self.kind,
            severity: max_severity,
            confidence: Confidence::new(0.25 + 0.55 * ratio),
            reasoning: format!(
                "{} indicator(s) at severity-weighted ratio {ratio:.2}",
                indicators.len()
            ),
            indicators,
            latency_ms: 0,
        }
    }
}
