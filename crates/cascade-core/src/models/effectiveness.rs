use serde::{Deserialize, Serialize};

/// Per-pattern effectiveness counters. Both counters are non-negative and
/// only ever increase; `successful <= total` holds by construction.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PatternEffectiveness {
    pub total: u64,
    pub successful: u64,
}

impl PatternEffectiveness {
    /// Record one outcome. `effectiveness > 0.5` counts as successful.
    pub fn record(&mut self, effectiveness: f64) {
        self.total += 1;
        if effectiveness > 0.5 {
            self.successful += 1;
        }
    }

    /// Trailing success rate; 0.0 before any data arrives.
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.successful as f64 / self.total as f64
        }
    }
}
