use async_trait::async_trait;
use ml_lifecycle_sdk::{UploadDatasetRequest, UploadedDataset};
use std::path::PathBuf;
use tracing::info;

use crate::error::{HarnessError, Result};
use crate::stage::{LifecycleStage, StageContext, StageOutcome};
use crate::verify;

/// Uploads a CSV file as a new dataset and records the assigned id.
pub struct UploadDatasetStage {
    dataset_name: String,
    version: String,
    csv_path: PathBuf,
    group: String,
}

impl UploadDatasetStage {
    pub fn new(
        dataset_name: impl Into<String>,
        version: impl Into<String>,
        csv_path: impl Into<PathBuf>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            dataset_name: dataset_name.into(),
            version: version.into(),
            csv_path: csv_path.into(),
            group: group.into(),
        }
    }
}

#[async_trait]
impl LifecycleStage for UploadDatasetStage {
    fn name(&self) -> &str {
        "upload dataset"
    }

    fn group(&self) -> &str {
        &self.group
    }

    async fn run(&self, ctx: &mut StageContext<'_>) -> Result<StageOutcome> {
        let request = UploadDatasetRequest::new(
            &self.dataset_name,
            &self.version,
            &self.csv_path,
        );
        let response = ctx.client.datasets().upload_csv(request).await?;
        verify::expect_status(&response, 200)?;

        let dataset: UploadedDataset = response.success_json().map_err(HarnessError::from)?;
        ctx.session.record_dataset(&self.dataset_name, dataset.id);

        info!(
            dataset = %self.dataset_name,
            version = %self.version,
            id = %dataset.id,
            "dataset uploaded"
        );
        Ok(StageOutcome::Passed)
    }
}
