//! Datasets resource client
//!
//! Datasets are uploaded as multipart CSV posts; the service assigns an id
//! and snapshots each upload as a version set.

use crate::client::{ApiResponse, HttpClient};
use crate::error::{SdkError, SdkResult};
use ml_lifecycle_core::{DatasetId, VersionSetId};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Client for dataset operations
#[derive(Debug, Clone)]
pub struct DatasetsClient {
    client: Arc<HttpClient>,
}

impl DatasetsClient {
    /// Create a new datasets client
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Upload a CSV file as a new dataset version.
    pub async fn upload_csv(&self, request: UploadDatasetRequest) -> SdkResult<ApiResponse> {
        let bytes = tokio::fs::read(&request.csv_path).await?;
        let file_name = request
            .csv_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "dataset.csv".to_string());

        let mut form = Form::new()
            .text("datasetName", request.name)
            .text("version", request.version)
            .text("sourceType", "file")
            .text("destination", "file")
            .text("dataFormat", "CSV")
            .text(
                "containsHeader",
                if request.contains_header { "true" } else { "false" },
            )
            .part("file", Part::bytes(bytes).file_name(file_name));

        if let Some(description) = request.description {
            form = form.text("description", description);
        }

        self.client.post_multipart("/api/datasets", form).await
    }

    /// Delete a dataset
    pub async fn delete(&self, id: DatasetId) -> SdkResult<ApiResponse> {
        self.client.delete(&format!("/api/datasets/{}", id)).await
    }

    /// List the version sets of a dataset
    pub async fn version_sets(&self, id: DatasetId) -> SdkResult<Vec<DatasetVersion>> {
        let response = self
            .client
            .get(&format!("/api/datasets/{}/versions", id))
            .await?;
        response.success_json()
    }

    /// Id of the first version set of a dataset.
    ///
    /// The lifecycle run uploads exactly one version, so the first snapshot
    /// is the one a model trains against.
    pub async fn first_version_set(&self, id: DatasetId) -> SdkResult<VersionSetId> {
        let versions = self.version_sets(id).await?;
        versions
            .first()
            .map(|v| v.id)
            .ok_or_else(|| {
                SdkError::UnexpectedPayload(format!("dataset {} has no version sets", id))
            })
    }
}

/// Request to upload a dataset from a CSV file
#[derive(Debug, Clone)]
pub struct UploadDatasetRequest {
    pub name: String,
    pub version: String,
    pub csv_path: PathBuf,
    pub contains_header: bool,
    pub description: Option<String>,
}

impl UploadDatasetRequest {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        csv_path: impl AsRef<Path>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            csv_path: csv_path.as_ref().to_path_buf(),
            contains_header: true,
            description: None,
        }
    }

    pub fn with_contains_header(mut self, contains_header: bool) -> Self {
        self.contains_header = contains_header;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Dataset entity returned by the upload endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedDataset {
    pub id: DatasetId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// A version set snapshot of a dataset
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetVersion {
    pub id: VersionSetId,
    #[serde(default)]
    pub version: Option<String>,
}
