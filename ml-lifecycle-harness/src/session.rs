//! Cross-stage session state.
//!
//! One `SessionState` is constructed per run and threaded by mutable
//! reference through every stage; there is no ambient global state. Each
//! field has exactly one producing stage per model build and is read-only
//! for everyone else. Dependent stages use the `require_*` accessors, whose
//! `MissingState` error is how a failed producer cascades into its
//! dependents.

use ml_lifecycle_core::{AnalysisId, DatasetId, ModelId, ProjectId};
use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    dataset_name: Option<String>,
    dataset_id: Option<DatasetId>,
    project_name: Option<String>,
    project_id: Option<ProjectId>,
    analysis_name: Option<String>,
    analysis_id: Option<AnalysisId>,
    model_name: Option<String>,
    model_id: Option<ModelId>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the uploaded dataset. Written by the upload stage only.
    pub fn record_dataset(&mut self, name: impl Into<String>, id: DatasetId) {
        self.dataset_name = Some(name.into());
        self.dataset_id = Some(id);
    }

    /// Record the created project. Written by the project stage only.
    pub fn record_project(&mut self, name: impl Into<String>, id: ProjectId) {
        self.project_name = Some(name.into());
        self.project_id = Some(id);
    }

    /// Record the configured analysis. Each model-build stage writes this
    /// once for its own algorithm.
    pub fn record_analysis(&mut self, name: impl Into<String>, id: AnalysisId) {
        self.analysis_name = Some(name.into());
        self.analysis_id = Some(id);
    }

    /// Record the created model. Each model-build stage writes this once for
    /// its own algorithm.
    pub fn record_model(&mut self, name: impl Into<String>, id: ModelId) {
        self.model_name = Some(name.into());
        self.model_id = Some(id);
    }

    pub fn dataset_name(&self) -> Option<&str> {
        self.dataset_name.as_deref()
    }

    pub fn dataset_id(&self) -> Option<DatasetId> {
        self.dataset_id
    }

    pub fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }

    pub fn project_id(&self) -> Option<ProjectId> {
        self.project_id
    }

    pub fn analysis_name(&self) -> Option<&str> {
        self.analysis_name.as_deref()
    }

    pub fn analysis_id(&self) -> Option<AnalysisId> {
        self.analysis_id
    }

    pub fn model_name(&self) -> Option<&str> {
        self.model_name.as_deref()
    }

    pub fn model_id(&self) -> Option<ModelId> {
        self.model_id
    }

    pub fn require_dataset_id(&self) -> Result<DatasetId> {
        self.dataset_id
            .ok_or(HarnessError::MissingState("dataset id"))
    }

    pub fn require_project_name(&self) -> Result<&str> {
        self.project_name
            .as_deref()
            .ok_or(HarnessError::MissingState("project name"))
    }

    pub fn require_model_name(&self) -> Result<&str> {
        self.model_name
            .as_deref()
            .ok_or(HarnessError::MissingState("model name"))
    }

    pub fn require_model_id(&self) -> Result<ModelId> {
        self.model_id.ok_or(HarnessError::MissingState("model id"))
    }
}
