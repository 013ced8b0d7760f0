//! Strand implementations. Each is a pure function over the shared
//! read-only [`StrandInput`]; internal problems degrade to confidence 0
//! instead of failing the batch.

pub mod cross_client;
pub mod dependency;
pub mod pattern;
pub mod predictive;
pub mod resource;
pub mod temporal;

pub use cross_client::CrossClientStrand;
pub use dependency::DependencyStrand;
pub use pattern::PatternStrand;
pub use predictive::PredictiveStrand;
pub use resource::ResourceStrand;
pub use temporal::TemporalStrand;

use std::sync::Arc;

use cascade_core::traits::IStrand;

/// The default cascade strand set, one of each kind.
pub fn default_strands() -> Vec<Arc<dyn IStrand>> {
    vec![
        Arc::new(TemporalStrand),
        Arc::new(DependencyStrand),
        Arc::new(ResourceStrand),
        Arc::new(PatternStrand::default()),
        Arc::new(CrossClientStrand),
        Arc::new(PredictiveStrand),
    ]
}

/// Mean inter-arrival gap in seconds over time-sorted alerts.
/// Shared by the temporal and predictive strands.
pub(crate) fn mean_gap_secs(input: &cascade_core::traits::StrandInput) -> Option<f64> {
    if input.alerts.len() < 2 {
        return None;
    }
    let mut times: Vec<_> = input.alerts.iter().map(|a| a.timestamp).collect();
    times.sort();
    let gaps: Vec<f64> = times
        .windows(2)
        .map(|w| (w[1] - w[0]).num_milliseconds() as f64 / 1000.0)
        .collect();
    Some(gaps.iter().sum::<f64>() / gaps.len() as f64)
}

/// Burst factor in [0, 1]: 1.0 when alerts arrive back-to-back, 0.0 when the
/// mean gap reaches 10 minutes.
pub(crate) fn burst_factor(mean_gap: f64) -> f64 {
    (1.0 - (mean_gap / 600.0).min(1.0)).max(0.0)
}
