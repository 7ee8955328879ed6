//! Resource configuration builder.
//!
//! Assembles an analysis and its model in the phase order the service
//! expects: create analysis, feature defaults, the four-key model
//! configuration, hyperparameter defaults, then the model itself plus its
//! storage location. Any rejected phase aborts the whole configuration with
//! the failing step named; there is no partial rollback: the project/dataset
//! teardown is the only rollback path.

use ml_lifecycle_core::{DatasetId, ProjectId, TrainingConfig};
use ml_lifecycle_sdk::{
    ApiResponse, CreateAnalysisRequest, ModelConfiguration, ModelSummary,
};
use tracing::info;

use crate::error::{HarnessError, Result};
use crate::stage::StageContext;

fn ensure_step(step: &'static str, response: &ApiResponse) -> Result<()> {
    if response.is_success() {
        Ok(())
    } else {
        Err(HarnessError::Configuration {
            step,
            status: response.status,
        })
    }
}

/// Configure an analysis and create its model; returns the model name the
/// service assigned. Writes the analysis and model identifiers into the
/// session as a side effect.
pub async fn configure_model(
    ctx: &mut StageContext<'_>,
    training: &TrainingConfig,
    project_id: ProjectId,
    dataset_id: DatasetId,
) -> Result<String> {
    // The name is derived, not invented: rerunning the same algorithm
    // against the same dataset lands on the same analysis.
    let analysis_name = training.algorithm.analysis_name(dataset_id);
    info!(analysis = %analysis_name, %project_id, "configuring analysis");

    let response = ctx
        .client
        .analyses()
        .create(CreateAnalysisRequest::new(&analysis_name, project_id))
        .await?;
    ensure_step("create analysis", &response)?;

    let analysis_id = ctx.client.analyses().analysis_id(&analysis_name).await?;
    ctx.session.record_analysis(&analysis_name, analysis_id);

    let response = ctx.client.analyses().set_feature_defaults(analysis_id).await?;
    ensure_step("feature defaults", &response)?;

    let configuration = ModelConfiguration::from(training);
    let response = ctx
        .client
        .analyses()
        .set_model_configuration(analysis_id, &configuration)
        .await?;
    ensure_step("model configuration", &response)?;

    let response = ctx
        .client
        .analyses()
        .set_hyper_parameter_defaults(analysis_id)
        .await?;
    ensure_step("hyperparameter defaults", &response)?;

    let version_set_id = ctx.client.datasets().first_version_set(dataset_id).await?;

    let response = ctx
        .client
        .models()
        .create(analysis_id, version_set_id)
        .await?;
    ensure_step("create model", &response)?;
    let created: ModelSummary = response.success_json().map_err(HarnessError::from)?;

    let model_id = ctx.client.models().model_id(&created.name).await?;

    let response = ctx
        .client
        .models()
        .register_storage(model_id, &ctx.settings.model_storage_dir)
        .await?;
    ensure_step("model storage", &response)?;

    ctx.session.record_model(&created.name, model_id);
    info!(model = %created.name, %model_id, "model configured");

    Ok(created.name)
}
