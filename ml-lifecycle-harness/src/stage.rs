//! Stage trait and outcomes.

use async_trait::async_trait;
use ml_lifecycle_sdk::MlServiceClient;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::Result;
use crate::poller::{DEFAULT_MAX_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL};
use crate::session::SessionState;

/// What happened to a stage.
///
/// Skip is a first-class value here: a stage whose dependency group never
/// passed reports `Skipped`, which counts as neither success nor failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum StageOutcome {
    Passed,
    Failed(String),
    Skipped(String),
}

impl StageOutcome {
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped(reason.into())
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }
}

/// Run-wide settings the stages share.
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Interval between completion polls
    pub poll_interval: Duration,
    /// Polls before a model build is declared timed out
    pub max_poll_attempts: u32,
    /// Directory registered as each model's storage location
    pub model_storage_dir: PathBuf,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_poll_attempts: DEFAULT_MAX_POLL_ATTEMPTS,
            model_storage_dir: PathBuf::from("models"),
        }
    }
}

/// Everything a stage gets to work with: the service client, the mutable
/// session, and the run settings. The sequencer owns ordering; the session
/// owns cross-stage values.
pub struct StageContext<'a> {
    pub client: &'a MlServiceClient,
    pub session: &'a mut SessionState,
    pub settings: &'a RunSettings,
}

/// One step of the lifecycle.
///
/// Stages belong to a named group and may depend on other groups. The
/// sequencer only invokes `run` when every dependency group has at least one
/// passed member; `run` itself may still report `Skipped` when a precondition
/// it checks against the service does not hold.
#[async_trait]
pub trait LifecycleStage: Send + Sync {
    fn name(&self) -> &str;

    fn group(&self) -> &str;

    /// Groups that must have a passed member before this stage runs.
    fn depends_on(&self) -> &[String] {
        &[]
    }

    async fn run(&self, ctx: &mut StageContext<'_>) -> Result<StageOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_predicates() {
        assert!(StageOutcome::Passed.is_passed());
        assert!(StageOutcome::failed("boom").is_failed());
        assert!(StageOutcome::skipped("dependency missing").is_skipped());
        assert!(!StageOutcome::skipped("x").is_failed());
    }

    #[test]
    fn test_default_settings_match_poller_defaults() {
        let settings = RunSettings::default();
        assert_eq!(settings.poll_interval, DEFAULT_POLL_INTERVAL);
        assert_eq!(settings.max_poll_attempts, DEFAULT_MAX_POLL_ATTEMPTS);
    }

    #[test]
    fn test_outcome_serializes_with_reason() {
        let outcome = StageOutcome::skipped("project not available");
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "skipped");
        assert_eq!(json["reason"], "project not available");
    }
}
