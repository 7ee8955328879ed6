//! Models resource client
//!
//! Training is asynchronous: the trigger endpoint returns immediately and
//! progress is observed by polling the status endpoint.

use crate::client::{ApiResponse, HttpClient};
use crate::error::SdkResult;
use ml_lifecycle_core::{AnalysisId, ModelId, ModelStatus, VersionSetId};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Client for model operations
#[derive(Debug, Clone)]
pub struct ModelsClient {
    client: Arc<HttpClient>,
}

impl ModelsClient {
    /// Create a new models client
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Create a model referencing an analysis and a dataset version snapshot
    pub async fn create(
        &self,
        analysis_id: AnalysisId,
        version_set_id: VersionSetId,
    ) -> SdkResult<ApiResponse> {
        let request = CreateModelRequest {
            analysis_id,
            version_set_id,
        };
        self.client.post_json("/api/models", &request).await
    }

    /// Fetch a model by name
    pub async fn get(&self, name: &str) -> SdkResult<ApiResponse> {
        self.client.get(&format!("/api/models/{}", name)).await
    }

    /// Resolve a model's assigned id from its name
    pub async fn model_id(&self, name: &str) -> SdkResult<ModelId> {
        let response = self.get(name).await?;
        let model: ModelSummary = response.success_json()?;
        Ok(model.id)
    }

    /// Fetch a model's training status by name
    pub async fn status(&self, name: &str) -> SdkResult<ModelStatus> {
        let response = self.get(name).await?;
        let status: StatusOnly = response.success_json()?;
        Ok(status.status)
    }

    /// Trigger asynchronous training of a model
    pub async fn train(&self, id: ModelId) -> SdkResult<ApiResponse> {
        self.client.post_empty(&format!("/api/models/{}", id)).await
    }

    /// Submit a batch of feature rows for prediction
    pub async fn predict(&self, id: ModelId, rows: &[Vec<f64>]) -> SdkResult<ApiResponse> {
        self.client
            .post_json(&format!("/api/models/{}/predict", id), &rows)
            .await
    }

    /// Register a local directory as the model's storage location
    pub async fn register_storage(
        &self,
        id: ModelId,
        directory: &Path,
    ) -> SdkResult<ApiResponse> {
        let request = ModelStorageRequest {
            storage_type: "file".to_string(),
            location: directory.to_string_lossy().into_owned(),
        };
        self.client
            .post_json(&format!("/api/models/{}/storage", id), &request)
            .await
    }
}

#[derive(Debug, Clone, Serialize)]
struct CreateModelRequest {
    #[serde(rename = "analysisId")]
    analysis_id: AnalysisId,
    #[serde(rename = "versionSetId")]
    version_set_id: VersionSetId,
}

#[derive(Debug, Clone, Serialize)]
struct ModelStorageRequest {
    #[serde(rename = "type")]
    storage_type: String,
    location: String,
}

/// Model entity as returned by the create and get endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ModelSummary {
    pub id: ModelId,
    pub name: String,
    #[serde(default)]
    pub status: Option<ModelStatus>,
}

#[derive(Debug, Clone, Deserialize)]
struct StatusOnly {
    status: ModelStatus,
}
