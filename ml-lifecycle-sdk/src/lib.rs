//! ML Lifecycle SDK
//!
//! Rust client for the ML training service's REST API. It covers the
//! resources a lifecycle run touches: datasets, projects, analyses and
//! models.
//!
//! Responses are surfaced as [`ApiResponse`] (status code plus raw body) so
//! that a harness can assert on status codes itself; typed lookup helpers
//! (`project_id`, `analysis_id`, `model_id`, `status`, …) deserialize the
//! bodies callers never assert on directly.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ml_lifecycle_sdk::{AuthConfig, MlServiceClient, SdkConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SdkConfig::new("https://ml.example.com:9443")
//!         .with_basic_auth("admin", "admin");
//!     let client = MlServiceClient::new(config)?;
//!
//!     let status = client.models().status("LINEAR_REGRESSION1.Model").await?;
//!     println!("model status: {}", status);
//!     Ok(())
//! }
//! ```
//!
//! The client never retries on its own: transient-failure handling is the
//! caller's concern (in the lifecycle harness, the completion poller is the
//! only retry loop).

#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod resources;

// Re-export main types for convenience
pub use client::{ApiResponse, HttpClient};
pub use config::{AuthConfig, SdkConfig, SdkConfigBuilder};
pub use error::{SdkError, SdkResult};

// Re-export resource clients and their request/response types
pub use resources::analyses::{
    Analysis, AnalysesClient, CreateAnalysisRequest, ModelConfiguration,
};
pub use resources::datasets::{
    DatasetVersion, DatasetsClient, UploadDatasetRequest, UploadedDataset,
};
pub use resources::models::{ModelSummary, ModelsClient};
pub use resources::projects::{CreateProjectRequest, Project, ProjectsClient};

use std::sync::Arc;

/// The main client for the ML service.
///
/// Provides access to the service's resources through dedicated sub-clients
/// that share one underlying HTTP client.
#[derive(Debug, Clone)]
pub struct MlServiceClient {
    http_client: Arc<HttpClient>,
    datasets: DatasetsClient,
    projects: ProjectsClient,
    analyses: AnalysesClient,
    models: ModelsClient,
}

impl MlServiceClient {
    /// Create a new client with the given configuration.
    pub fn new(config: SdkConfig) -> SdkResult<Self> {
        let http_client = Arc::new(HttpClient::new(config)?);

        Ok(Self {
            datasets: DatasetsClient::new(Arc::clone(&http_client)),
            projects: ProjectsClient::new(Arc::clone(&http_client)),
            analyses: AnalysesClient::new(Arc::clone(&http_client)),
            models: ModelsClient::new(Arc::clone(&http_client)),
            http_client,
        })
    }

    /// Get the datasets client
    pub fn datasets(&self) -> &DatasetsClient {
        &self.datasets
    }

    /// Get the projects client
    pub fn projects(&self) -> &ProjectsClient {
        &self.projects
    }

    /// Get the analyses client
    pub fn analyses(&self) -> &AnalysesClient {
        &self.analyses
    }

    /// Get the models client
    pub fn models(&self) -> &ModelsClient {
        &self.models
    }

    /// Get a reference to the underlying HTTP client, for requests not
    /// covered by the resource clients.
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Get the base URL of the service
    pub fn base_url(&self) -> &str {
        &self.http_client.config().base_url
    }
}
