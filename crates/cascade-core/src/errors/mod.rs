//! Error types, one enum per subsystem, aggregated into [`CascadeError`].

mod decision_error;
mod memory_error;
mod reasoner_error;
mod validation_error;

pub use decision_error::DecisionError;
pub use memory_error::MemoryError;
pub use reasoner_error::ReasonerError;
pub use validation_error::ValidationError;

/// Result alias used throughout the workspace.
pub type CascadeResult<T> = Result<T, CascadeError>;

/// Top-level error aggregating all subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum CascadeError {
    #[error("input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("reasoner error: {0}")]
    Reasoner(#[from] ReasonerError),

    #[error("decision error: {0}")]
    Decision(#[from] DecisionError),

    #[error("memory store error: {0}")]
    Memory(#[from] MemoryError),
}
