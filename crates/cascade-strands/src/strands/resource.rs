//! Resource strand — keyword-classifies alerts into cpu/memory/disk/network
//! pressure and scores each category by severity weight; the worst category
//! drives the risk estimate.

use cascade_core::alert::Alert;
use cascade_core::constants::clamp_minutes;
use cascade_core::models::{StrandKind, StrandPrediction, StrandResult};
use cascade_core::traits::{IStrand, StrandInput};
use cascade_core::Confidence;

const CATEGORIES: [(&str, &[&str]); 4] = [
    ("cpu", &["cpu", "load", "throttle", "saturation"]),
    ("memory", &["memory", "oom", "heap", "swap", "leak"]),
    ("disk", &["disk", "storage", "volume", "inode", "iops", "full"]),
    (
        "network",
        &["network", "connection", "latency", "packet", "dns", "timeout", "unreachable"],
    ),
];

fn matches_category(alert: &Alert, keywords: &[&str]) -> bool {
    let text = format!("{} {}", alert.category, alert.message).to_lowercase();
    keywords.iter().any(|k| text.contains(k))
}

pub struct ResourceStrand;

impl IStrand for ResourceStrand {
    fn kind(&self) -> StrandKind {
        StrandKind::Resource
    }

    fn analyze(&self, input: &StrandInput) -> StrandResult {
        if input.alerts.is_empty() {
            return StrandResult::failed(self.kind(), "empty alert batch");
        }

        // Severity-weighted score per resource category, normalized by the
        // batch's total severity weight.
        let total_weight: f64 = input.alerts.iter().map(|a| a.severity.weight()).sum();
        let mut best: Option<(&str, f64)> = None;
        for (name, keywords) in CATEGORIES {
            let score: f64 = input
                .alerts
                .iter()
                .filter(|a| matches_category(a, keywords))
                .map(|a| a.severity.weight())
                .sum();
            let normalized = if total_weight > 0.0 {
                score / total_weight
            } else {
                0.0
            };
            if best.map_or(true, |(_, s)| normalized > s) {
                best = Some((name, normalized));
            }
        }

        let (category, score) = best.unwrap_or(("none", 0.0));
        if score == 0.0 {
            return StrandResult {
                kind: self.kind(),
                confidence: Confidence::new(0.15),
                prediction: StrandPrediction {
                    minutes: 45.0,
                    ..StrandPrediction::default()
                },
                reasoning: "no resource pressure indicators in batch".to_string(),
                latency_ms: 0,
            };
        }

        let confidence = Confidence::new(0.2 + 0.6 * score);
        StrandResult {
            kind: self.kind(),
            confidence,
            prediction: StrandPrediction {
                minutes: clamp_minutes(35.0 - 20.0 * score),
                affected_systems: input.alert_systems().iter().map(|s| s.to_string()).collect(),
                prevention_actions: vec![format!("relieve {category} pressure on affected systems")],
                pattern: None,
            },
            reasoning: format!(
                "dominant resource category '{category}' at severity-weighted score {score:.2}"
            ),
            latency_ms: 0,
        }
    }
}
