//! The Yacht-hydrodynamics lifecycle scenario.
//!
//! Upload the Yacht dataset, create its project, then build linear, ridge
//! and lasso regression models in a dependency chain, each build gated on
//! the previous one, with a prediction check after every build. Teardown
//! deletes the project and the dataset.

use ml_lifecycle_core::{LearningAlgorithm, TrainingConfig};
use std::path::PathBuf;

use crate::error::{HarnessError, Result};
use crate::sequencer::Sequencer;
use crate::stages::{BuildModelStage, CreateProjectStage, UploadDatasetStage};
use crate::teardown::ResourceTeardown;

pub const DATASET_NAME: &str = "Yacht";
pub const DATASET_VERSION: &str = "1.0";
pub const PROJECT_NAME: &str = "YachtProject";
pub const RESPONSE_ATTRIBUTE: &str = "Residuary_Resistance";
pub const TRAIN_FRACTION: f64 = 0.7;

const DATASET_GROUP: &str = "yacht-dataset";
const PROJECT_GROUP: &str = "yacht-project";
const LINEAR_GROUP: &str = "linear-regression-yacht";
const RIDGE_GROUP: &str = "ridge-regression-yacht";
const LASSO_GROUP: &str = "lasso-regression-yacht";

/// Two rows of yacht hull features; the service must return exactly one
/// prediction per row.
pub fn predict_payload() -> Vec<Vec<f64>> {
    vec![
        vec![-2.3, 0.568, 4.78, 3.99, 3.17, 0.125],
        vec![-2.3, 0.568, 4.78, 3.99, 3.17, 0.300],
    ]
}

fn training(algorithm: LearningAlgorithm) -> Result<TrainingConfig> {
    TrainingConfig::new(algorithm, RESPONSE_ATTRIBUTE, TRAIN_FRACTION)
        .map_err(|e| HarnessError::InvalidPlan(e.to_string()))
}

/// Build the full Yacht scenario plan.
pub fn yacht_plan(csv_path: PathBuf) -> Result<Sequencer> {
    let sequencer = Sequencer::new()
        .with_stage(Box::new(UploadDatasetStage::new(
            DATASET_NAME,
            DATASET_VERSION,
            csv_path,
            DATASET_GROUP,
        )))
        .with_stage(Box::new(CreateProjectStage::new(
            PROJECT_NAME,
            DATASET_NAME,
            PROJECT_GROUP,
            vec![DATASET_GROUP.to_string()],
        )))
        .with_stage(Box::new(BuildModelStage::new(
            training(LearningAlgorithm::LinearRegression)?,
            predict_payload(),
            LINEAR_GROUP,
            vec![PROJECT_GROUP.to_string()],
        )))
        .with_stage(Box::new(BuildModelStage::new(
            training(LearningAlgorithm::RidgeRegression)?,
            predict_payload(),
            RIDGE_GROUP,
            vec![LINEAR_GROUP.to_string()],
        )))
        .with_stage(Box::new(BuildModelStage::new(
            training(LearningAlgorithm::LassoRegression)?,
            predict_payload(),
            LASSO_GROUP,
            vec![RIDGE_GROUP.to_string()],
        )))
        .with_teardown(Box::new(ResourceTeardown::new(PROJECT_NAME)));

    sequencer.validate()?;
    Ok(sequencer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yacht_plan_validates() {
        let plan = yacht_plan(PathBuf::from("data/yacht_hydrodynamics.csv")).unwrap();
        assert_eq!(plan.stage_count(), 5);
    }

    #[test]
    fn test_predict_payload_shape() {
        let payload = predict_payload();
        assert_eq!(payload.len(), 2);
        assert!(payload.iter().all(|row| row.len() == 6));
    }
}
