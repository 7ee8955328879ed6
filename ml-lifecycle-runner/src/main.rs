use anyhow::Result;
use ml_lifecycle_harness::{scenario, RunSettings, SessionState, StageContext, StageOutcome};
use ml_lifecycle_sdk::{MlServiceClient, SdkConfig};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ml_lifecycle_runner=info,ml_lifecycle_harness=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ML lifecycle run");

    // Load configuration
    let config = config::Config::load()?;
    tracing::info!(base_url = %config.base_url, "Configuration loaded");

    let sdk_config = SdkConfig::new(&config.base_url)
        .with_basic_auth(&config.username, &config.password)
        .with_logging(config.log_requests);
    let client = MlServiceClient::new(sdk_config)?;

    let settings = RunSettings {
        poll_interval: Duration::from_secs(config.poll_interval_secs),
        max_poll_attempts: config.max_poll_attempts,
        model_storage_dir: PathBuf::from(&config.model_storage_dir),
    };
    let mut session = SessionState::new();
    let mut ctx = StageContext {
        client: &client,
        session: &mut session,
        settings: &settings,
    };

    let plan = scenario::yacht_plan(PathBuf::from(&config.dataset_csv))?;
    let report = plan.run(&mut ctx).await?;

    for stage in &report.stages {
        match &stage.outcome {
            StageOutcome::Passed => tracing::info!(stage = %stage.name, "PASSED"),
            StageOutcome::Failed(reason) => {
                tracing::error!(stage = %stage.name, %reason, "FAILED")
            }
            StageOutcome::Skipped(reason) => {
                tracing::warn!(stage = %stage.name, %reason, "SKIPPED")
            }
        }
    }
    if let Some(problem) = &report.teardown_error {
        tracing::error!(%problem, "teardown left resources behind");
    }

    tracing::info!(
        run_id = %report.run_id,
        passed = report.passed_count(),
        failed = report.failed_count(),
        skipped = report.skipped_count(),
        "Run finished"
    );

    if !report.succeeded() {
        std::process::exit(1);
    }
    Ok(())
}
