/// Decision policy errors. Converted to a conservative monitor fallback
/// at the engine boundary rather than surfaced to callers.
#[derive(Debug, thiserror::Error)]
pub enum DecisionError {
    #[error("classifier failed: {reason}")]
    Classifier { reason: String },
}
