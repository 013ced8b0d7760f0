//! Optional classifier hook over the policy's feature vector.

use cascade_core::errors::DecisionError;
use cascade_core::models::DecisionAction;

use crate::features::FeatureVector;

/// A classifier may override the table-selected action using the same
/// feature vector. Returning `None` keeps the table's choice.
pub trait IDecisionClassifier: Send + Sync {
    fn classify(
        &self,
        features: &FeatureVector,
        proposed: DecisionAction,
    ) -> Result<Option<DecisionAction>, DecisionError>;
}

/// Default hook: never overrides.
pub struct NoOpClassifier;

impl IDecisionClassifier for NoOpClassifier {
    fn classify(
        &self,
        _features: &FeatureVector,
        _proposed: DecisionAction,
    ) -> Result<Option<DecisionAction>, DecisionError> {
        Ok(None)
    }
}
