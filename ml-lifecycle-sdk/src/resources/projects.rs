//! Projects resource client

use crate::client::{ApiResponse, HttpClient};
use crate::error::SdkResult;
use ml_lifecycle_core::ProjectId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Client for project operations
#[derive(Debug, Clone)]
pub struct ProjectsClient {
    client: Arc<HttpClient>,
}

impl ProjectsClient {
    /// Create a new projects client
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Create a project bound to an existing dataset
    pub async fn create(&self, request: CreateProjectRequest) -> SdkResult<ApiResponse> {
        self.client.post_json("/api/projects", &request).await
    }

    /// Fetch a project by name. Used as an existence gate: callers branch on
    /// the status code rather than the body.
    pub async fn get(&self, name: &str) -> SdkResult<ApiResponse> {
        self.client.get(&format!("/api/projects/{}", name)).await
    }

    /// Resolve a project's assigned id from its name
    pub async fn project_id(&self, name: &str) -> SdkResult<ProjectId> {
        let response = self.get(name).await?;
        let project: Project = response.success_json()?;
        Ok(project.id)
    }

    /// Delete a project
    pub async fn delete(&self, name: &str) -> SdkResult<ApiResponse> {
        self.client.delete(&format!("/api/projects/{}", name)).await
    }
}

/// Request to create a new project
#[derive(Debug, Clone, Serialize)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(rename = "datasetName")]
    pub dataset_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateProjectRequest {
    pub fn new(name: impl Into<String>, dataset_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dataset_name: dataset_name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Project entity
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(rename = "datasetName", default)]
    pub dataset_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_project_request_wire_shape() {
        let request = CreateProjectRequest::new("YachtProject", "Yacht");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["name"], "YachtProject");
        assert_eq!(json["datasetName"], "Yacht");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_project_parsing() {
        let project: Project =
            serde_json::from_str("{\"id\": 12, \"name\": \"YachtProject\"}").unwrap();
        assert_eq!(project.id, ProjectId(12));
        assert!(project.dataset_name.is_none());
    }
}
