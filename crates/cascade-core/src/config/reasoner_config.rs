use serde::{Deserialize, Serialize};

use super::defaults;

/// External reasoner adapter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReasonerConfig {
    /// When false, the adapter answers from the deterministic template path
    /// without any network calls.
    pub enabled: bool,
    /// Endpoint of the external reasoning service.
    pub endpoint: String,
    /// Per-call timeout.
    pub timeout_ms: u64,
    /// Bounded retry attempts for transient failures.
    pub max_attempts: u32,
    /// Backoff seed used when the error carries no retry-after hint.
    pub backoff_base_ms: u64,
    /// Cap on the total time spent waiting between retries.
    pub backoff_cap_ms: u64,
}

impl Default for ReasonerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: String::new(),
            timeout_ms: defaults::DEFAULT_REASONER_TIMEOUT_MS,
            max_attempts: defaults::DEFAULT_REASONER_MAX_ATTEMPTS,
            backoff_base_ms: defaults::DEFAULT_BACKOFF_BASE_MS,
            backoff_cap_ms: defaults::DEFAULT_BACKOFF_CAP_MS,
        }
    }
}
