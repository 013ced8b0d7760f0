//! # cascade-decision
//!
//! Deterministic decision policy. Seven normalized features are combined by
//! fixed weights into business impact, cost impact, and SLA risk; a closed
//! selection table maps those to an action and priority. An optional
//! classifier hook may override the table using the same feature vector,
//! and a trailing-success-rate feedback loop adapts the confidence
//! threshold between a floor and a ceiling.

pub mod classifier;
pub mod features;
pub mod policy;
pub mod scorer;
pub mod threshold;

pub use classifier::{IDecisionClassifier, NoOpClassifier};
pub use features::FeatureVector;
pub use policy::DecisionEngine;
pub use scorer::ImpactScores;
pub use threshold::AdaptiveThreshold;
