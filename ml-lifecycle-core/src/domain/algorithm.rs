use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::DatasetId;

/// Category of learning problem an algorithm solves, in the wire spelling
/// the service expects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlgorithmType {
    NumericalPrediction,
    Classification,
    Clustering,
}

impl fmt::Display for AlgorithmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NumericalPrediction => write!(f, "NUMERICAL_PREDICTION"),
            Self::Classification => write!(f, "CLASSIFICATION"),
            Self::Clustering => write!(f, "CLUSTERING"),
        }
    }
}

/// Learning algorithms the harness knows how to configure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LearningAlgorithm {
    LinearRegression,
    RidgeRegression,
    LassoRegression,
}

impl LearningAlgorithm {
    /// Name of the algorithm as the service spells it.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::LinearRegression => "LINEAR_REGRESSION",
            Self::RidgeRegression => "RIDGE_REGRESSION",
            Self::LassoRegression => "LASSO_REGRESSION",
        }
    }

    pub fn algorithm_type(&self) -> AlgorithmType {
        match self {
            Self::LinearRegression | Self::RidgeRegression | Self::LassoRegression => {
                AlgorithmType::NumericalPrediction
            }
        }
    }

    /// Derive the analysis name for this algorithm against a dataset.
    ///
    /// The name is a pure function of (algorithm, dataset id), so repeating a
    /// build within a session lands on the same analysis instead of piling up
    /// near-duplicates.
    pub fn analysis_name(&self, dataset_id: DatasetId) -> String {
        format!("{}{}", self.wire_name(), dataset_id)
    }
}

impl fmt::Display for LearningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}
