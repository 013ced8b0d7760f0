//! Adaptive confidence threshold.
//!
//! Recent success lowers the bar (the engine earned trust to act earlier);
//! recent failure raises it. Movement is stepwise and bounded by a floor
//! and a ceiling, so one bad window cannot swing the policy.

use cascade_core::config::DecisionConfig;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct AdaptiveThreshold {
    current: f64,
    config: DecisionConfig,
}

impl AdaptiveThreshold {
    pub fn new(config: DecisionConfig) -> Self {
        Self {
            current: config.initial_confidence_threshold,
            config,
        }
    }

    pub fn value(&self) -> f64 {
        self.current
    }

    /// Adjust one step based on the trailing success rate.
    pub fn update(&mut self, success_rate: f64) {
        let before = self.current;
        if success_rate > self.config.high_success_rate {
            self.current = (self.current - self.config.threshold_step).max(self.config.threshold_floor);
        } else if success_rate < self.config.low_success_rate {
            self.current =
                (self.current + self.config.threshold_step).min(self.config.threshold_ceiling);
        }
        if (self.current - before).abs() > f64::EPSILON {
            debug!(success_rate, before, after = self.current, "confidence threshold adapted");
        }
    }
}

impl Default for AdaptiveThreshold {
    fn default() -> Self {
        Self::new(DecisionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_success_lowers_toward_floor() {
        let mut t = AdaptiveThreshold::default();
        let start = t.value();
        for _ in 0..100 {
            t.update(0.95);
        }
        assert!(t.value() < start);
        assert!((t.value() - t.config.threshold_floor).abs() < 1e-9);
    }

    #[test]
    fn low_success_raises_toward_ceiling() {
        let mut t = AdaptiveThreshold::default();
        for _ in 0..100 {
            t.update(0.2);
        }
        assert!((t.value() - t.config.threshold_ceiling).abs() < 1e-9);
    }

    #[test]
    fn middling_success_holds_steady() {
        let mut t = AdaptiveThreshold::default();
        let start = t.value();
        t.update(0.7);
        assert_eq!(t.value(), start);
    }
}
