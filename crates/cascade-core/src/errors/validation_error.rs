use chrono::{DateTime, Utc};

/// Input boundary validation errors. These fail fast to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("unknown severity: {value}")]
    UnknownSeverity { value: String },

    #[error("unknown outcome: {value}")]
    UnknownOutcome { value: String },

    #[error("alert {alert_id} has a future timestamp: {timestamp}")]
    FutureTimestamp {
        alert_id: String,
        timestamp: DateTime<Utc>,
    },

    #[error("empty alert batch")]
    EmptyBatch,
}
