/// External reasoner adapter errors.
#[derive(Debug, thiserror::Error)]
pub enum ReasonerError {
    /// Transient rate limit. `retry_after_ms` is taken from the structured
    /// error body when present, so no error-text scraping is needed.
    #[error("rate limited (retry after {retry_after_ms:?} ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    #[error("transport failure: {reason}")]
    Transport { reason: String },

    /// The response did not match the requested schema. Handled internally
    /// by heuristic extraction; never surfaced to callers.
    #[error("response did not match requested schema")]
    MalformedResponse { body: String },

    #[error("reasoner disabled by configuration")]
    Disabled,

    #[error("retries exhausted after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },
}

impl ReasonerError {
    /// Whether retrying could help.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ReasonerError::RateLimited { .. }
                | ReasonerError::Timeout { .. }
                | ReasonerError::Transport { .. }
        )
    }
}
