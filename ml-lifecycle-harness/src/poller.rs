//! Completion poller.
//!
//! The service offers no push notification for training completion; the
//! only way to observe it is to read the model status until it turns
//! `Complete`. The poll budget is explicit: running out of it is a
//! `TrainingTimeout` error, never a silent "not complete".

use ml_lifecycle_core::ModelStatus;
use ml_lifecycle_sdk::ModelsClient;
use std::time::Duration;
use tracing::debug;

use crate::error::{HarnessError, Result};

/// Default interval between completion polls, shared with
/// [`RunSettings`](crate::stage::RunSettings).
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);
/// Default poll budget, shared with [`RunSettings`](crate::stage::RunSettings).
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 120;

#[derive(Debug, Clone)]
pub struct CompletionPoller {
    interval: Duration,
    max_attempts: u32,
}

impl Default for CompletionPoller {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: DEFAULT_MAX_POLL_ATTEMPTS,
        }
    }
}

impl CompletionPoller {
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }

    /// Block until the named model reports `Complete`.
    ///
    /// Every status other than `Complete` (including `Failed`) counts as
    /// "not yet complete"; a model the service gave up on therefore
    /// surfaces as a timeout at the end of the budget.
    pub async fn await_completion(
        &self,
        models: &ModelsClient,
        model_name: &str,
    ) -> Result<ModelStatus> {
        let attempts = self.max_attempts.max(1);

        for attempt in 1..=attempts {
            let status = models.status(model_name).await?;
            debug!(
                model = model_name,
                %status,
                attempt,
                max_attempts = attempts,
                "polled model status"
            );

            if status.is_complete() {
                return Ok(status);
            }

            if attempt < attempts {
                tokio::time::sleep(self.interval).await;
            }
        }

        Err(HarnessError::TrainingTimeout {
            model: model_name.to_string(),
            attempts,
            interval: self.interval,
        })
    }
}
