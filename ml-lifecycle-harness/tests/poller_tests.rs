//! Completion poller against a mock service: terminal detection, the bounded
//! budget, and the Failed-is-not-terminal rule.

use ml_lifecycle_core::ModelStatus;
use ml_lifecycle_harness::{CompletionPoller, HarnessError};
use ml_lifecycle_sdk::{MlServiceClient, SdkConfig};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL_NAME: &str = "LINEAR_REGRESSION1.Model";
const MODEL_PATH: &str = "/api/models/LINEAR_REGRESSION1.Model";

fn client(server: &MockServer) -> MlServiceClient {
    MlServiceClient::new(SdkConfig::new(server.uri())).unwrap()
}

fn model_body(status: &str) -> serde_json::Value {
    json!({"id": 100, "name": MODEL_NAME, "status": status})
}

fn fast_poller(max_attempts: u32) -> CompletionPoller {
    CompletionPoller::new(Duration::from_millis(1), max_attempts)
}

#[tokio::test]
async fn returns_complete_after_pending_polls() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_body("Pending")))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_body("Complete")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let status = fast_poller(10)
        .await_completion(client.models(), MODEL_NAME)
        .await
        .unwrap();

    assert_eq!(status, ModelStatus::Complete);
}

#[tokio::test]
async fn times_out_when_model_never_completes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_body("Running")))
        .expect(3)
        .mount(&server)
        .await;

    let client = client(&server);
    let err = fast_poller(3)
        .await_completion(client.models(), MODEL_NAME)
        .await
        .unwrap_err();

    match err {
        HarnessError::TrainingTimeout {
            model, attempts, ..
        } => {
            assert_eq!(model, MODEL_NAME);
            assert_eq!(attempts, 3);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn failed_status_surfaces_as_timeout() {
    let server = MockServer::start().await;

    // The status endpoint has no terminal-failure contract the poller can
    // trust, so Failed is treated as "not yet complete" and the budget
    // decides.
    Mock::given(method("GET"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_body("Failed")))
        .mount(&server)
        .await;

    let client = client(&server);
    let err = fast_poller(2)
        .await_completion(client.models(), MODEL_NAME)
        .await
        .unwrap_err();

    assert!(matches!(err, HarnessError::TrainingTimeout { .. }));
}

#[tokio::test]
async fn unknown_status_string_keeps_polling() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_body("Reticulating")))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_body("Complete")))
        .mount(&server)
        .await;

    let client = client(&server);
    let status = fast_poller(5)
        .await_completion(client.models(), MODEL_NAME)
        .await
        .unwrap();

    assert_eq!(status, ModelStatus::Complete);
}

#[tokio::test]
async fn error_response_aborts_polling_immediately() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let err = fast_poller(10)
        .await_completion(client.models(), MODEL_NAME)
        .await
        .unwrap_err();

    // A broken status endpoint is not "still training": the budget is not
    // consumed waiting on it.
    assert!(matches!(err, HarnessError::MalformedResponse(_)));
}

#[tokio::test]
async fn zero_attempt_budget_still_polls_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_body("Complete")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let status = CompletionPoller::new(Duration::from_millis(1), 0)
        .await_completion(client.models(), MODEL_NAME)
        .await
        .unwrap();

    assert_eq!(status, ModelStatus::Complete);
}
