use crate::alert::Severity;
use crate::errors::CascadeResult;
use crate::models::{IncidentRecord, Outcome, PatternEffectiveness};

/// Bounded learning memory: append-only incident history plus pattern
/// effectiveness counters.
///
/// The store is the only structure shared across concurrent cycles; writers
/// are serialized, readers may see slightly stale snapshots.
pub trait IIncidentStore: Send + Sync {
    // --- Writes ---
    fn append(&self, record: IncidentRecord) -> CascadeResult<()>;
    /// Attach an outcome to the most recent matching record and update the
    /// pattern effectiveness counters.
    fn record_outcome(
        &self,
        client_id: &str,
        pattern: Option<&str>,
        outcome: Outcome,
        actual_minutes: Option<f64>,
        recovery_actions: &[String],
    ) -> CascadeResult<()>;

    // --- Reads ---
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn recent(&self, limit: usize) -> CascadeResult<Vec<IncidentRecord>>;
    /// Incidents in the trailing window sharing a category and severity.
    fn similar_incidents(
        &self,
        category: &str,
        severity: Severity,
        window: usize,
    ) -> CascadeResult<Vec<IncidentRecord>>;
    /// Fraction of trailing-window incidents with a successful outcome.
    fn success_rate(&self, window: usize) -> CascadeResult<f64>;
    fn pattern_effectiveness(&self, pattern: &str) -> CascadeResult<Option<PatternEffectiveness>>;
}
