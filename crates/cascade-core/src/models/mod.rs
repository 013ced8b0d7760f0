//! Shared models crossing crate boundaries. One tagged struct per stage;
//! no loosely-typed payloads between components.

mod batch;
mod decision;
mod effectiveness;
mod failure;
mod incident;
mod prediction;
mod strand;

pub use batch::AlertBatch;
pub use decision::{Decision, DecisionAction, Priority};
pub use effectiveness::PatternEffectiveness;
pub use failure::{FailureFinding, FailureKind, FailureReport};
pub use incident::{IncidentRecord, Outcome, OutcomeFeedback};
pub use prediction::{FusedPrediction, StrandDiagnostic, Urgency};
pub use strand::{StrandKind, StrandPrediction, StrandResult};
