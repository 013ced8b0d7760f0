/// Cascade engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bounds on any predicted time-to-cascade, in minutes.
pub const MIN_PREDICTED_MINUTES: f64 = 1.0;
pub const MAX_PREDICTED_MINUTES: f64 = 60.0;

/// Maximum number of root causes carried on a fused prediction.
pub const MAX_ROOT_CAUSES: usize = 3;

/// Clamp a time-to-cascade estimate into the supported range.
pub fn clamp_minutes(minutes: f64) -> f64 {
    if minutes.is_finite() {
        minutes.clamp(MIN_PREDICTED_MINUTES, MAX_PREDICTED_MINUTES)
    } else {
        MAX_PREDICTED_MINUTES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_handles_nan_and_range() {
        assert_eq!(clamp_minutes(f64::NAN), MAX_PREDICTED_MINUTES);
        assert_eq!(clamp_minutes(0.0), MIN_PREDICTED_MINUTES);
        assert_eq!(clamp_minutes(120.0), MAX_PREDICTED_MINUTES);
        assert_eq!(clamp_minutes(12.5), 12.5);
    }
}
