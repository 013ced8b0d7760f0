//! Named defaults for all subsystem configs.

// Correlation
pub const DEFAULT_DEDUP_WINDOW_SECS: i64 = 300;
pub const DEFAULT_SEMANTIC_THRESHOLD: f64 = 0.8;
pub const DEFAULT_MAX_CLUSTERS: usize = 10;

// Patterns
pub const DEFAULT_RELATED_WINDOW_MINS: i64 = 30;
pub const DEFAULT_MIN_TRIGGER_HITS: usize = 2;
pub const DEFAULT_MIN_PREDICTIONS: usize = 3;
pub const DEFAULT_MAX_PREDICTIONS: usize = 4;

// Strand pool
pub const DEFAULT_STRAND_CONCURRENCY: usize = 6;

// Reasoner
pub const DEFAULT_REASONER_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_REASONER_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_BACKOFF_BASE_MS: u64 = 1_000;
pub const DEFAULT_BACKOFF_CAP_MS: u64 = 15_000;

// Decision policy
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.6;
pub const DEFAULT_THRESHOLD_FLOOR: f64 = 0.4;
pub const DEFAULT_THRESHOLD_CEILING: f64 = 0.8;
pub const DEFAULT_THRESHOLD_STEP: f64 = 0.05;
pub const DEFAULT_HIGH_SUCCESS_RATE: f64 = 0.8;
pub const DEFAULT_LOW_SUCCESS_RATE: f64 = 0.6;

// Learning memory
pub const DEFAULT_MEMORY_CAP: usize = 1_000;
pub const DEFAULT_EVICTION_FRACTION: f64 = 0.2;
pub const DEFAULT_TRAILING_WINDOW: usize = 100;
