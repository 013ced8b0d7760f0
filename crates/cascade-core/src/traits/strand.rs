use chrono::{DateTime, Utc};

use crate::alert::Alert;
use crate::models::{FailureFinding, FailureKind, IncidentRecord, StrandKind, StrandResult};
use crate::topology::ClientTopology;

/// Read-only input shared by every strand in a fan-out cycle.
///
/// Strands share no mutable state; the pool hands each task an `Arc` of this.
#[derive(Debug, Clone)]
pub struct StrandInput {
    pub alerts: Vec<Alert>,
    pub topology: ClientTopology,
    pub history: Vec<IncidentRecord>,
    /// Analysis reference time, fixed per cycle so strands agree on "now".
    pub now: DateTime<Utc>,
}

impl StrandInput {
    pub fn new(alerts: Vec<Alert>, topology: ClientTopology, history: Vec<IncidentRecord>) -> Self {
        Self {
            alerts,
            topology,
            history,
            now: Utc::now(),
        }
    }

    /// Distinct systems named by the alerts.
    pub fn alert_systems(&self) -> Vec<&str> {
        let mut systems: Vec<&str> = self.alerts.iter().map(|a| a.system.as_str()).collect();
        systems.sort();
        systems.dedup();
        systems
    }
}

/// One independent analysis strategy in the fan-out pool.
///
/// `analyze` must not fail: internal problems become a confidence-0 result
/// with the error text in `reasoning` (use [`StrandResult::failed`]).
/// New strands plug in without any fusion-code changes.
pub trait IStrand: Send + Sync {
    fn kind(&self) -> StrandKind;
    fn analyze(&self, input: &StrandInput) -> StrandResult;
}

/// A failure-oriented analyzer. Same pool shape as [`IStrand`], but the
/// output classifies a failure mode instead of timing a cascade.
pub trait IFailureAnalyzer: Send + Sync {
    fn kind(&self) -> FailureKind;
    fn analyze(&self, input: &StrandInput) -> FailureFinding;
}
