pub mod normalize;
pub mod severity;

pub use normalize::{normalize_batch, RawAlert};
pub use severity::Severity;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::confidence::Confidence;

/// A canonicalized monitoring alert.
///
/// Produced only by the normalizer; raw input never crosses the boundary
/// without validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Unique alert ID.
    pub id: String,
    /// Client the alert belongs to.
    pub client_id: String,
    /// System that raised the alert.
    pub system: String,
    /// Validated severity.
    pub severity: Severity,
    /// Alert category (e.g. "database", "network", "security").
    pub category: String,
    /// Free-text alert message.
    pub message: String,
    /// When the alert fired. Never in the future.
    pub timestamp: DateTime<Utc>,
    /// Estimated probability this alert cascades.
    pub cascade_risk: Confidence,
}

impl Alert {
    /// Dedup signature: hash of (client, system, category, severity).
    ///
    /// Two alerts with the same signature are candidates for deduplication;
    /// the time window and message similarity checks are applied on top.
    pub fn signature(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.client_id.as_bytes());
        hasher.update(b"\x1f");
        hasher.update(self.system.as_bytes());
        hasher.update(b"\x1f");
        hasher.update(self.category.as_bytes());
        hasher.update(b"\x1f");
        hasher.update(self.severity.as_str().as_bytes());
        hasher.finalize().to_hex().to_string()
    }

    /// Lowercased whitespace-split message tokens, for similarity checks.
    pub fn message_tokens(&self) -> Vec<String> {
        self.message
            .split_whitespace()
            .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
            .filter(|t| !t.is_empty())
            .collect()
    }
}
