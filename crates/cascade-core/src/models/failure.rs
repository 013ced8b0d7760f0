use serde::{Deserialize, Serialize};
use std::fmt;

use crate::alert::Severity;
use crate::confidence::Confidence;

/// Failure modes detected by the failure-analysis pool. Same fan-out shape
/// as the cascade strands, but the output is a failure classification
/// rather than a time-to-cascade estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    SystemDegradation,
    ResourceExhaustion,
    NetworkFailure,
    DatabaseFailure,
    ApplicationFailure,
    CascadePropagation,
    DependencyFailure,
    PerformanceDegradation,
}

impl FailureKind {
    pub const ALL: [FailureKind; 8] = [
        FailureKind::SystemDegradation,
        FailureKind::ResourceExhaustion,
        FailureKind::NetworkFailure,
        FailureKind::DatabaseFailure,
        FailureKind::ApplicationFailure,
        FailureKind::CascadePropagation,
        FailureKind::DependencyFailure,
        FailureKind::PerformanceDegradation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::SystemDegradation => "system_degradation",
            FailureKind::ResourceExhaustion => "resource_exhaustion",
            FailureKind::NetworkFailure => "network_failure",
            FailureKind::DatabaseFailure => "database_failure",
            FailureKind::ApplicationFailure => "application_failure",
            FailureKind::CascadePropagation => "cascade_propagation",
            FailureKind::DependencyFailure => "dependency_failure",
            FailureKind::PerformanceDegradation => "performance_degradation",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of one failure analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureFinding {
    pub kind: FailureKind,
    pub severity: Severity,
    pub confidence: Confidence,
    /// Alert messages/keywords that triggered this finding.
    pub indicators: Vec<String>,
    pub reasoning: String,
    pub latency_ms: u64,
}

impl FailureFinding {
    /// A degraded finding for an analyzer that failed.
    pub fn failed(kind: FailureKind, error: impl fmt::Display) -> Self {
        Self {
            kind,
            severity: Severity::Low,
            confidence: Confidence::zero(),
            indicators: vec![],
            reasoning: format!("analyzer failed: {error}"),
            latency_ms: 0,
        }
    }
}

/// Fused output of the failure-analysis pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureReport {
    /// The failure mode with the strongest weighted signal, if any analyzer
    /// produced one.
    pub dominant: Option<FailureKind>,
    pub severity: Severity,
    pub confidence: Confidence,
    pub findings: Vec<FailureFinding>,
}
