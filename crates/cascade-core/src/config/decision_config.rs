use serde::{Deserialize, Serialize};

use super::defaults;

/// Decision policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    /// Starting confidence threshold for acting on predictions.
    pub initial_confidence_threshold: f64,
    /// Adaptive threshold never drops below this.
    pub threshold_floor: f64,
    /// Adaptive threshold never rises above this.
    pub threshold_ceiling: f64,
    /// Per-cycle adjustment step.
    pub threshold_step: f64,
    /// Trailing success rate above which the threshold is lowered.
    pub high_success_rate: f64,
    /// Trailing success rate below which the threshold is raised.
    pub low_success_rate: f64,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            initial_confidence_threshold: defaults::DEFAULT_CONFIDENCE_THRESHOLD,
            threshold_floor: defaults::DEFAULT_THRESHOLD_FLOOR,
            threshold_ceiling: defaults::DEFAULT_THRESHOLD_CEILING,
            threshold_step: defaults::DEFAULT_THRESHOLD_STEP,
            high_success_rate: defaults::DEFAULT_HIGH_SUCCESS_RATE,
            low_success_rate: defaults::DEFAULT_LOW_SUCCESS_RATE,
        }
    }
}
