use crate::errors::ReasonerError;

/// Adapter around the external reasoning service.
///
/// Implementations must return within their configured timeout; callers are
/// never allowed to block indefinitely. `reason` takes the prompt plus an
/// explicit JSON output schema the service is asked to follow.
pub trait IReasoner: Send + Sync {
    fn reason(&self, prompt: &str, schema: &serde_json::Value) -> Result<String, ReasonerError>;

    /// Whether the external service is configured and enabled.
    fn is_enabled(&self) -> bool;
}
