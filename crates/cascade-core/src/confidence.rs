use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Confidence score clamped to [0.0, 1.0].
///
/// Interpreted as a probability everywhere it feeds fusion or decision
/// thresholds. A value of exactly 0.0 coming out of a strand means the
/// strand failed, never "no risk".
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f64);

impl Confidence {
    /// High confidence threshold — root causes are drawn from strands above this.
    pub const HIGH: f64 = 0.6;
    /// Medium confidence threshold.
    pub const MEDIUM: f64 = 0.4;
    /// Low confidence threshold — predictions below this are advisory only.
    pub const LOW: f64 = 0.2;

    /// Create a new Confidence, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// A confidence of zero, used to mark a failed contributor.
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether this contributor carries any signal at all.
    pub fn is_signal(self) -> bool {
        self.0 > 0.0
    }

    /// Check if confidence is above the high threshold.
    pub fn is_high(self) -> bool {
        self.0 > Self::HIGH
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

impl Add for Confidence {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl Mul<f64> for Confidence {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}
