//! ML lifecycle harness.
//!
//! Drives a remote ML training service through its full lifecycle (upload
//! dataset, create project, configure analyses, build models, await
//! asynchronous completion, predict) and tears everything down regardless
//! of how the run went.
//!
//! The moving parts:
//!
//! - [`SessionState`]: identifiers handed from one stage to the next,
//!   threaded explicitly through every stage.
//! - [`Sequencer`]: runs the declared stages in order, gates each on its
//!   dependency groups, and reports three-valued outcomes
//!   (passed / failed / skipped).
//! - [`CompletionPoller`]: bounded status polling for asynchronous training.
//! - [`configure_model`]: the multi-phase analysis/model configuration.
//! - [`ResourceTeardown`]: project and dataset deletion, guaranteed to run.
//! - [`scenario`]: the Yacht-hydrodynamics plan wiring it all together.

pub mod configure;
pub mod error;
pub mod poller;
pub mod scenario;
pub mod sequencer;
pub mod session;
pub mod stage;
pub mod stages;
pub mod teardown;
pub mod verify;

pub use configure::configure_model;
pub use error::{HarnessError, Result};
pub use poller::CompletionPoller;
pub use sequencer::{RunReport, Sequencer, StageReport};
pub use session::SessionState;
pub use stage::{LifecycleStage, RunSettings, StageContext, StageOutcome};
pub use teardown::{ResourceTeardown, Teardown};
