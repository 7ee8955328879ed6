use async_trait::async_trait;
use ml_lifecycle_sdk::CreateProjectRequest;
use tracing::info;

use crate::error::Result;
use crate::stage::{LifecycleStage, StageContext, StageOutcome};
use crate::verify;

/// Creates a project bound to the uploaded dataset.
pub struct CreateProjectStage {
    project_name: String,
    dataset_name: String,
    group: String,
    depends_on: Vec<String>,
}

impl CreateProjectStage {
    pub fn new(
        project_name: impl Into<String>,
        dataset_name: impl Into<String>,
        group: impl Into<String>,
        depends_on: Vec<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            dataset_name: dataset_name.into(),
            group: group.into(),
            depends_on,
        }
    }
}

#[async_trait]
impl LifecycleStage for CreateProjectStage {
    fn name(&self) -> &str {
        "create project"
    }

    fn group(&self) -> &str {
        &self.group
    }

    fn depends_on(&self) -> &[String] {
        &self.depends_on
    }

    async fn run(&self, ctx: &mut StageContext<'_>) -> Result<StageOutcome> {
        let request = CreateProjectRequest::new(&self.project_name, &self.dataset_name);
        let response = ctx.client.projects().create(request).await?;
        verify::expect_status(&response, 200)?;

        let project_id = ctx.client.projects().project_id(&self.project_name).await?;
        ctx.session.record_project(&self.project_name, project_id);

        info!(project = %self.project_name, id = %project_id, "project created");
        Ok(StageOutcome::Passed)
    }
}
