mod reasoner;
mod store;
mod strand;

pub use reasoner::IReasoner;
pub use store::IIncidentStore;
pub use strand::{IFailureAnalyzer, IStrand, StrandInput};
