//! Alert normalizer — canonicalizes heterogeneous input into [`Alert`] entities.
//!
//! All enum parsing and bounds validation happens here, once, so downstream
//! components never see loosely-typed payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Alert, Severity};
use crate::confidence::Confidence;
use crate::errors::ValidationError;

/// A raw alert as received from a monitoring source, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAlert {
    pub id: String,
    pub client_id: String,
    pub system: String,
    /// Severity as a free string; validated into [`Severity`].
    pub severity: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Optional risk estimate from the source; clamped into [0,1].
    #[serde(default)]
    pub cascade_risk: Option<f64>,
}

/// Normalize a single raw alert.
///
/// Rejects empty ids, unknown severities, and timestamps in the future
/// (beyond a small clock-skew allowance).
pub fn normalize(raw: &RawAlert, now: DateTime<Utc>) -> Result<Alert, ValidationError> {
    if raw.id.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "id" });
    }
    if raw.client_id.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "client_id" });
    }
    if raw.system.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "system" });
    }

    let severity: Severity = raw.severity.parse()?;

    // Allow 60s of clock skew between sources.
    if raw.timestamp > now + chrono::Duration::seconds(60) {
        return Err(ValidationError::FutureTimestamp {
            alert_id: raw.id.clone(),
            timestamp: raw.timestamp,
        });
    }

    let category = if raw.category.trim().is_empty() {
        "general".to_string()
    } else {
        raw.category.trim().to_lowercase()
    };

    Ok(Alert {
        id: raw.id.clone(),
        client_id: raw.client_id.clone(),
        system: raw.system.trim().to_string(),
        severity,
        category,
        message: raw.message.clone(),
        timestamp: raw.timestamp,
        cascade_risk: Confidence::new(raw.cascade_risk.unwrap_or(0.0)),
    })
}

/// Normalize a batch, failing fast on the first invalid alert.
/// An empty batch is itself invalid; there is nothing to analyze.
pub fn normalize_batch(raw: &[RawAlert], now: DateTime<Utc>) -> Result<Vec<Alert>, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::EmptyBatch);
    }
    raw.iter().map(|r| normalize(r, now)).collect()
}
