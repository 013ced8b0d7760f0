//! Failure-detection analyzers.
//!
//! Same fan-out shape as the cascade strands, but each analyzer classifies a
//! failure mode instead of timing a cascade. Most modes are keyword-driven;
//! cascade propagation and dependency failure look at spread and topology.

mod dependency;
mod keyword;
mod propagation;

use std::sync::Arc;

use cascade_core::alert::Severity;
use cascade_core::models::{FailureFinding, FailureKind, FailureReport};
use cascade_core::traits::IFailureAnalyzer;
use cascade_core::Confidence;

pub use dependency::DependencyFailureAnalyzer;
pub use keyword::KeywordAnalyzer;
pub use propagation::PropagationAnalyzer;

/// The full analyzer set, one per [`FailureKind`].
pub fn default_analyzers() -> Vec<Arc<dyn IFailureAnalyzer>> {
    vec![
        Arc::new(KeywordAnalyzer::new(
            FailureKind::SystemDegradation,
            &["degraded", "slow", "unresponsive", "flapping", "unstable"],
        )),
        Arc::new(KeywordAnalyzer::new(
            FailureKind::ResourceExhaustion,
            &["memory", "oom", "cpu", "disk", "full", "exhausted", "quota", "limit"],
        )),
        Arc::new(KeywordAnalyzer::new(
            FailureKind::NetworkFailure,
            &["network", "unreachable", "timeout", "dns", "packet", "connection refused"],
        )),
        Arc::new(KeywordAnalyzer::new(
            FailureKind::DatabaseFailure,
            &["database", "query", "deadlock", "replication", "pool exhausted", "sql"],
        )),
        Arc::new(KeywordAnalyzer::new(
            FailureKind::ApplicationFailure,
            &["exception", "panic", "crash", "5xx", "error rate", "stack trace"],
        )),
        Arc::new(PropagationAnalyzer),
        Arc::new(DependencyFailureAnalyzer),
        Arc::new(KeywordAnalyzer::new(
            FailureKind::PerformanceDegradation,
            &["latency", "p99", "p95", "slow query", "response time", "throughput"],
        )),
    ]
}

/// Fuse the analyzer findings into one report. The dominant mode is the
/// strongest confidence × severity signal; failed analyzers stay in
/// `findings` for diagnostics but never drive the classification.
pub fn fuse_failures(findings: Vec<FailureFinding>) -> FailureReport {
    let dominant = findings
        .iter()
        .filter(|f| f.confidence.is_signal())
        .max_by(|a, b| {
            let sa = a.confidence.value() * a.severity.weight();
            let sb = b.confidence.value() * b.severity.weight();
            sa.partial_cmp(&sb).unwrap_or(std::cmp::Ordering::Equal)
        });

    match dominant {
        Some(top) => FailureReport {
            dominant: Some(top.kind),
            severity: top.severity,
            confidence: top.confidence,
            findings: findings.clone(),
        },
        None => FailureReport {
            dominant: None,
            severity: Severity::Low,
            confidence: Confidence::zero(),
            findings,
        },
    }
}
