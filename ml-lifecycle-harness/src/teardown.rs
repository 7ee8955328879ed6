//! Guaranteed resource release.
//!
//! Teardown is the sequencer's unconditional final step: it runs after the
//! stage loop on every path, whether stages passed, failed or were skipped.
//! Order matters: the project references the dataset, so the project goes
//! first.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::error::{HarnessError, Result};
use crate::stage::StageContext;

#[async_trait]
pub trait Teardown: Send + Sync {
    async fn release(&self, ctx: &mut StageContext<'_>) -> Result<()>;
}

/// Deletes the run's project and dataset, once each.
///
/// The project name is known statically; the dataset id is whatever the
/// upload stage recorded. A delete that comes back non-2xx is collected and
/// reported, but never stops the remaining deletes from being issued.
pub struct ResourceTeardown {
    pub project_name: String,
}

impl ResourceTeardown {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
        }
    }
}

#[async_trait]
impl Teardown for ResourceTeardown {
    async fn release(&self, ctx: &mut StageContext<'_>) -> Result<()> {
        let mut problems = Vec::new();

        info!(project = %self.project_name, "deleting project");
        match ctx.client.projects().delete(&self.project_name).await {
            Ok(response) if response.is_success() => {}
            Ok(response) => {
                warn!(
                    project = %self.project_name,
                    status = response.status,
                    "project delete returned non-success status"
                );
                problems.push(format!(
                    "project '{}' delete returned status {}",
                    self.project_name, response.status
                ));
            }
            Err(e) => problems.push(format!(
                "project '{}' delete failed: {}",
                self.project_name, e
            )),
        }

        match ctx.session.dataset_id() {
            Some(dataset_id) => {
                info!(dataset = %dataset_id, "deleting dataset");
                match ctx.client.datasets().delete(dataset_id).await {
                    Ok(response) if response.is_success() => {}
                    Ok(response) => {
                        warn!(
                            dataset = %dataset_id,
                            status = response.status,
                            "dataset delete returned non-success status"
                        );
                        problems.push(format!(
                            "dataset {} delete returned status {}",
                            dataset_id, response.status
                        ));
                    }
                    Err(e) => problems.push(format!("dataset {} delete failed: {}", dataset_id, e)),
                }
            }
            None => {
                // Nothing was uploaded, so there is no id to address.
                warn!("no dataset id recorded; skipping dataset delete");
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(HarnessError::TeardownIncomplete(problems.join("; ")))
        }
    }
}
