//! Stage sequencer.
//!
//! Executes a statically declared stage list in declaration order, gating
//! each stage on its dependency groups and guaranteeing teardown afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::error::{HarnessError, Result};
use crate::stage::{LifecycleStage, StageContext, StageOutcome};
use crate::teardown::Teardown;

/// Record of one executed (or skipped) stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageReport {
    pub name: String,
    pub group: String,
    pub outcome: StageOutcome,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Result of a full run: one report per declared stage, plus whatever went
/// wrong during teardown. A teardown problem is carried separately so it can
/// never mask a stage result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub stages: Vec<StageReport>,
    pub teardown_error: Option<String>,
}

impl RunReport {
    /// True iff no stage failed. Skipped stages do not count against the run.
    pub fn succeeded(&self) -> bool {
        self.stages.iter().all(|s| !s.outcome.is_failed())
    }

    pub fn passed_count(&self) -> usize {
        self.stages.iter().filter(|s| s.outcome.is_passed()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.stages.iter().filter(|s| s.outcome.is_failed()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.stages.iter().filter(|s| s.outcome.is_skipped()).count()
    }
}

/// Owns the declared stage order and the teardown hook.
///
/// The sequencer is the sole owner of ordering; `SessionState` is the sole
/// owner of cross-stage values.
pub struct Sequencer {
    stages: Vec<Box<dyn LifecycleStage>>,
    teardown: Option<Box<dyn Teardown>>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self {
            stages: Vec::new(),
            teardown: None,
        }
    }

    pub fn with_stage(mut self, stage: Box<dyn LifecycleStage>) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn with_teardown(mut self, teardown: Box<dyn Teardown>) -> Self {
        self.teardown = Some(teardown);
        self
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Check the plan before anything runs: every dependency group must be
    /// declared by an earlier stage. Declaration order is the executed total
    /// order, so a plan that passes this check cannot contain a dependency
    /// cycle or a dangling group reference.
    pub fn validate(&self) -> Result<()> {
        let mut declared: HashSet<&str> = HashSet::new();
        for stage in &self.stages {
            for dependency in stage.depends_on() {
                if !declared.contains(dependency.as_str()) {
                    return Err(HarnessError::InvalidPlan(format!(
                        "stage '{}' depends on group '{}' which no earlier stage declares",
                        stage.name(),
                        dependency
                    )));
                }
            }
            declared.insert(stage.group());
        }
        Ok(())
    }

    /// Run every declared stage in order, then tear down unconditionally.
    ///
    /// A stage whose dependency groups lack a passed member is recorded as
    /// skipped. A stage error is recorded as a failure and the run continues:
    /// dependents either skip via their group gate or fail on the session
    /// state the failed stage never produced.
    pub async fn run(&self, ctx: &mut StageContext<'_>) -> Result<RunReport> {
        self.validate()?;

        let run_id = Uuid::new_v4();
        let run_started = Utc::now();
        info!(%run_id, stages = self.stages.len(), "starting lifecycle run");

        let mut satisfied: HashSet<String> = HashSet::new();
        let mut reports = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            let started_at = Utc::now();

            let unmet: Vec<&str> = stage
                .depends_on()
                .iter()
                .filter(|group| !satisfied.contains(group.as_str()))
                .map(|group| group.as_str())
                .collect();

            let outcome = if !unmet.is_empty() {
                let reason = format!("dependency group(s) not satisfied: {}", unmet.join(", "));
                warn!(stage = stage.name(), %reason, "skipping stage");
                StageOutcome::skipped(reason)
            } else {
                info!(stage = stage.name(), group = stage.group(), "running stage");
                match stage.run(ctx).await {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        error!(stage = stage.name(), error = %e, "stage failed");
                        StageOutcome::failed(e.to_string())
                    }
                }
            };

            if outcome.is_passed() {
                satisfied.insert(stage.group().to_string());
            }

            reports.push(StageReport {
                name: stage.name().to_string(),
                group: stage.group().to_string(),
                outcome,
                started_at,
                finished_at: Utc::now(),
            });
        }

        // Teardown runs on every path; its failure is reported but never
        // rewrites a stage outcome.
        let teardown_error = match &self.teardown {
            Some(teardown) => match teardown.release(ctx).await {
                Ok(()) => None,
                Err(e) => {
                    error!(error = %e, "teardown failed");
                    Some(e.to_string())
                }
            },
            None => None,
        };

        let report = RunReport {
            run_id,
            started_at: run_started,
            finished_at: Utc::now(),
            stages: reports,
            teardown_error,
        };

        info!(
            %run_id,
            passed = report.passed_count(),
            failed = report.failed_count(),
            skipped = report.skipped_count(),
            "lifecycle run finished"
        );

        Ok(report)
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}
