use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// Alert severity. Parsed once at the boundary; unknown strings are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Info,
    Warning,
    Critical,
}

impl Severity {
    /// Weight used in severity-weighted heuristics.
    pub fn weight(self) -> f64 {
        match self {
            Severity::Critical => 1.0,
            Severity::Warning => 0.6,
            Severity::Info => 0.3,
            Severity::Low => 0.15,
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Ok(Severity::Critical),
            "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            "low" => Ok(Severity::Low),
            other => Err(ValidationError::UnknownSeverity {
                value: other.to_string(),
            }),
        }
    }
}
