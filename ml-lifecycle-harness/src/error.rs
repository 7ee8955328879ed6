use ml_lifecycle_sdk::SdkError;
use std::time::Duration;
use thiserror::Error;

/// Errors that abort a stage (or the run, for `InvalidPlan`).
///
/// Skipping is deliberately absent: an unsatisfied dependency is a
/// [`StageOutcome::Skipped`](crate::stage::StageOutcome) value, not an error.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// Remote call failed at the network layer
    #[error("Transport failure: {0}")]
    Transport(SdkError),

    /// A response carried the wrong status code
    #[error("Unexpected status: expected {expected}, got {actual}")]
    UnexpectedStatus { expected: u16, actual: u16 },

    /// A response body did not have the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The service rejected a configuration step; nothing after the named
    /// step was applied
    #[error("Configuration step '{step}' rejected with status {status}")]
    Configuration { step: &'static str, status: u16 },

    /// The completion poll budget ran out before the model reached Complete
    #[error(
        "Model '{model}' did not reach Complete within {attempts} polls at {interval:?} intervals"
    )]
    TrainingTimeout {
        model: String,
        attempts: u32,
        interval: Duration,
    },

    /// A stage read a session field its producer never wrote
    #[error("Missing session state: {0}")]
    MissingState(&'static str),

    /// The stage plan failed validation before execution
    #[error("Invalid stage plan: {0}")]
    InvalidPlan(String),

    /// Teardown issued its deletes but some of them did not succeed
    #[error("Teardown incomplete: {0}")]
    TeardownIncomplete(String),
}

pub type Result<T> = std::result::Result<T, HarnessError>;

impl From<SdkError> for HarnessError {
    fn from(err: SdkError) -> Self {
        match err {
            SdkError::Serialization(e) => HarnessError::MalformedResponse(e.to_string()),
            SdkError::UnexpectedPayload(message) => HarnessError::MalformedResponse(message),
            other => HarnessError::Transport(other),
        }
    }
}
