use crate::alert::RawAlert;
use crate::models::IncidentRecord;
use crate::topology::ClientTopology;

/// Input to one analysis cycle: raw alerts for a client, the client's
/// topology, and any incident history the caller wants considered.
#[derive(Debug, Clone)]
pub struct AlertBatch {
    pub alerts: Vec<RawAlert>,
    pub client: ClientTopology,
    pub history: Vec<IncidentRecord>,
}
