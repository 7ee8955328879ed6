//! Analyses resource client
//!
//! An analysis is configured in phases: create, feature defaults, the
//! algorithm/response/train-fraction mapping, then hyperparameter defaults.
//! Each phase is its own endpoint and the service expects them in order.

use crate::client::{ApiResponse, HttpClient};
use crate::error::SdkResult;
use ml_lifecycle_core::{AnalysisId, ProjectId, TrainingConfig};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Client for analysis operations
#[derive(Debug, Clone)]
pub struct AnalysesClient {
    client: Arc<HttpClient>,
}

impl AnalysesClient {
    /// Create a new analyses client
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Create an analysis under a project
    pub async fn create(&self, request: CreateAnalysisRequest) -> SdkResult<ApiResponse> {
        self.client.post_json("/api/analyses", &request).await
    }

    /// Resolve an analysis's assigned id from its name
    pub async fn analysis_id(&self, name: &str) -> SdkResult<AnalysisId> {
        let response = self.client.get(&format!("/api/analyses/{}", name)).await?;
        let analysis: Analysis = response.success_json()?;
        Ok(analysis.id)
    }

    /// Apply feature defaults to an analysis
    pub async fn set_feature_defaults(&self, id: AnalysisId) -> SdkResult<ApiResponse> {
        self.client
            .post_empty(&format!("/api/analyses/{}/features/defaults", id))
            .await
    }

    /// Submit the model configuration mapping
    pub async fn set_model_configuration(
        &self,
        id: AnalysisId,
        configuration: &ModelConfiguration,
    ) -> SdkResult<ApiResponse> {
        self.client
            .post_json(&format!("/api/analyses/{}/model", id), configuration)
            .await
    }

    /// Apply hyperparameter defaults to an analysis
    pub async fn set_hyper_parameter_defaults(&self, id: AnalysisId) -> SdkResult<ApiResponse> {
        self.client
            .post_empty(&format!("/api/analyses/{}/hyperParams/defaults", id))
            .await
    }
}

/// Request to create a new analysis
#[derive(Debug, Clone, Serialize)]
pub struct CreateAnalysisRequest {
    pub name: String,
    #[serde(rename = "projectId")]
    pub project_id: ProjectId,
}

impl CreateAnalysisRequest {
    pub fn new(name: impl Into<String>, project_id: ProjectId) -> Self {
        Self {
            name: name.into(),
            project_id,
        }
    }
}

/// Analysis entity
#[derive(Debug, Clone, Deserialize)]
pub struct Analysis {
    pub id: AnalysisId,
    pub name: String,
}

/// The four-key configuration mapping the service requires before a model
/// can be built. A typed struct rather than a map: every key is always
/// present on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct ModelConfiguration {
    #[serde(rename = "algorithmName")]
    pub algorithm_name: String,
    #[serde(rename = "algorithmType")]
    pub algorithm_type: String,
    #[serde(rename = "responseVariable")]
    pub response_variable: String,
    #[serde(rename = "trainDataFraction")]
    pub train_data_fraction: String,
}

impl From<&TrainingConfig> for ModelConfiguration {
    fn from(config: &TrainingConfig) -> Self {
        Self {
            algorithm_name: config.algorithm.wire_name().to_string(),
            algorithm_type: config.algorithm.algorithm_type().to_string(),
            response_variable: config.response_attribute.clone(),
            train_data_fraction: config.train_fraction.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ml_lifecycle_core::LearningAlgorithm;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_model_configuration_has_all_four_keys() {
        let training = TrainingConfig::new(
            LearningAlgorithm::LinearRegression,
            "Residuary_Resistance",
            0.7,
        )
        .unwrap();
        let configuration = ModelConfiguration::from(&training);
        let json = serde_json::to_value(&configuration).unwrap();

        assert_eq!(json["algorithmName"], "LINEAR_REGRESSION");
        assert_eq!(json["algorithmType"], "NUMERICAL_PREDICTION");
        assert_eq!(json["responseVariable"], "Residuary_Resistance");
        assert_eq!(json["trainDataFraction"], "0.7");
        assert_eq!(json.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_create_analysis_request_wire_shape() {
        let request = CreateAnalysisRequest::new("LINEAR_REGRESSION1", ProjectId(9));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["name"], "LINEAR_REGRESSION1");
        assert_eq!(json["projectId"], 9);
    }
}
