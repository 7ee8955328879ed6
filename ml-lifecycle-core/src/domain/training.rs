use serde::{Deserialize, Serialize};
use validator::Validate;

use super::algorithm::LearningAlgorithm;
use crate::error::Result;

/// What to train: the algorithm, the attribute it predicts, and how much of
/// the dataset to train on.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TrainingConfig {
    pub algorithm: LearningAlgorithm,
    #[validate(length(min = 1, max = 255))]
    pub response_attribute: String,
    #[validate(range(exclusive_min = 0.0, max = 1.0))]
    pub train_fraction: f64,
}

impl TrainingConfig {
    pub fn new(
        algorithm: LearningAlgorithm,
        response_attribute: impl Into<String>,
        train_fraction: f64,
    ) -> Result<Self> {
        let config = Self {
            algorithm,
            response_attribute: response_attribute.into(),
            train_fraction,
        };
        config.validate()?;
        Ok(config)
    }
}
