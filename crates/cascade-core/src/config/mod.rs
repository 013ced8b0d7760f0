//! Subsystem configuration, serde-deserializable with sane defaults.

pub mod defaults;

mod correlation_config;
mod decision_config;
mod memory_config;
mod reasoner_config;
mod strand_config;

pub use correlation_config::CorrelationConfig;
pub use decision_config::DecisionConfig;
pub use memory_config::MemoryConfig;
pub use reasoner_config::ReasonerConfig;
pub use strand_config::{PatternConfig, StrandConfig};

use serde::{Deserialize, Serialize};

/// Aggregate configuration for the whole engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CascadeConfig {
    pub correlation: CorrelationConfig,
    pub patterns: PatternConfig,
    pub strands: StrandConfig,
    pub reasoner: ReasonerConfig,
    pub decision: DecisionConfig,
    pub memory: MemoryConfig,
}
