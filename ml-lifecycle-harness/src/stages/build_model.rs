use async_trait::async_trait;
use ml_lifecycle_core::TrainingConfig;
use tracing::info;

use crate::configure::configure_model;
use crate::error::Result;
use crate::poller::CompletionPoller;
use crate::stage::{LifecycleStage, StageContext, StageOutcome};
use crate::verify;

/// Builds one model: configures the analysis, triggers training, waits for
/// completion, then checks prediction against a known payload.
///
/// Prediction only ever happens after the poller has observed `Complete`;
/// predicting against a non-terminal model is a defect, not a scenario.
pub struct BuildModelStage {
    name: String,
    training: TrainingConfig,
    predict_payload: Vec<Vec<f64>>,
    group: String,
    depends_on: Vec<String>,
}

impl BuildModelStage {
    pub fn new(
        training: TrainingConfig,
        predict_payload: Vec<Vec<f64>>,
        group: impl Into<String>,
        depends_on: Vec<String>,
    ) -> Self {
        Self {
            name: format!("build {} model", training.algorithm),
            training,
            predict_payload,
            group: group.into(),
            depends_on,
        }
    }
}

#[async_trait]
impl LifecycleStage for BuildModelStage {
    fn name(&self) -> &str {
        &self.name
    }

    fn group(&self) -> &str {
        &self.group
    }

    fn depends_on(&self) -> &[String] {
        &self.depends_on
    }

    async fn run(&self, ctx: &mut StageContext<'_>) -> Result<StageOutcome> {
        let project_name = ctx.session.require_project_name()?.to_string();

        // Existence gate against the live service: the project may have been
        // declared but never actually created. That is a skip, not a failure.
        let gate = ctx.client.projects().get(&project_name).await?;
        if gate.status != 200 {
            return Ok(StageOutcome::skipped(format!(
                "project '{}' is not available (status {})",
                project_name, gate.status
            )));
        }

        let project_id = ctx.client.projects().project_id(&project_name).await?;
        let dataset_id = ctx.session.require_dataset_id()?;

        let model_name =
            configure_model(ctx, &self.training, project_id, dataset_id).await?;
        let model_id = ctx.session.require_model_id()?;

        // Asynchronous start; the service returns before training finishes.
        let response = ctx.client.models().train(model_id).await?;
        verify::expect_status(&response, 200)?;
        info!(model = %model_name, "training triggered");

        let poller = CompletionPoller::new(
            ctx.settings.poll_interval,
            ctx.settings.max_poll_attempts,
        );
        poller
            .await_completion(ctx.client.models(), &model_name)
            .await?;
        info!(model = %model_name, "training complete");

        let response = ctx
            .client
            .models()
            .predict(model_id, &self.predict_payload)
            .await?;
        verify::expect_status(&response, 200)?;
        verify::expect_prediction_count(&response, self.predict_payload.len())?;
        info!(
            model = %model_name,
            rows = self.predict_payload.len(),
            "prediction verified"
        );

        Ok(StageOutcome::Passed)
    }
}
