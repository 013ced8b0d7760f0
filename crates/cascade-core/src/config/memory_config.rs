use serde::{Deserialize, Serialize};

use super::defaults;

/// Learning memory store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Hard cap on retained incident records.
    pub capacity: usize,
    /// Fraction of the oldest records evicted on overflow.
    pub eviction_fraction: f64,
    /// Trailing window for cross-entity queries.
    pub trailing_window: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::DEFAULT_MEMORY_CAP,
            eviction_fraction: defaults::DEFAULT_EVICTION_FRACTION,
            trailing_window: defaults::DEFAULT_TRAILING_WINDOW,
        }
    }
}
