//! HTTP-level tests for the resource clients against a mock service.

use ml_lifecycle_core::{AnalysisId, DatasetId, ModelId, VersionSetId};
use ml_lifecycle_sdk::{
    MlServiceClient, SdkConfig, SdkError, UploadDatasetRequest,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::io::Write;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> MlServiceClient {
    MlServiceClient::new(SdkConfig::new(server.uri())).unwrap()
}

#[tokio::test]
async fn upload_csv_posts_multipart_and_returns_assigned_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/datasets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "Yacht"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "a,b,target").unwrap();
    writeln!(csv, "1.0,2.0,3.0").unwrap();

    let client = client_for(&server).await;
    let response = client
        .datasets()
        .upload_csv(UploadDatasetRequest::new("Yacht", "1.0", csv.path()))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    let dataset: ml_lifecycle_sdk::UploadedDataset = response.success_json().unwrap();
    assert_eq!(dataset.id, DatasetId(1));
}

#[tokio::test]
async fn upload_csv_fails_when_file_is_missing() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;

    let result = client
        .datasets()
        .upload_csv(UploadDatasetRequest::new(
            "Yacht",
            "1.0",
            "/definitely/not/here.csv",
        ))
        .await;

    assert!(matches!(result, Err(SdkError::Io(_))));
}

#[tokio::test]
async fn first_version_set_takes_the_first_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/datasets/1/versions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 5, "version": "1.0"},
            {"id": 6, "version": "1.1"}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let version_set = client
        .datasets()
        .first_version_set(DatasetId(1))
        .await
        .unwrap();
    assert_eq!(version_set, VersionSetId(5));
}

#[tokio::test]
async fn first_version_set_rejects_empty_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/datasets/1/versions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client.datasets().first_version_set(DatasetId(1)).await;
    assert!(matches!(result, Err(SdkError::UnexpectedPayload(_))));
}

#[tokio::test]
async fn project_id_resolves_from_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects/YachtProject"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 12, "name": "YachtProject"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let id = client.projects().project_id("YachtProject").await.unwrap();
    assert_eq!(id, ml_lifecycle_core::ProjectId(12));
}

#[tokio::test]
async fn project_lookup_surfaces_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects/Nope"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server).await;

    // The raw gate call reports the status as data...
    let response = client.projects().get("Nope").await.unwrap();
    assert_eq!(response.status, 404);

    // ...while the typed lookup refuses to parse it.
    let result = client.projects().project_id("Nope").await;
    assert!(matches!(result, Err(SdkError::UnexpectedPayload(_))));
}

#[tokio::test]
async fn model_status_parses_the_status_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/models/LINEAR_REGRESSION1.Model"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"id": 100, "name": "LINEAR_REGRESSION1.Model", "status": "Complete"}),
        ))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let status = client
        .models()
        .status("LINEAR_REGRESSION1.Model")
        .await
        .unwrap();
    assert!(status.is_complete());

    let id = client
        .models()
        .model_id("LINEAR_REGRESSION1.Model")
        .await
        .unwrap();
    assert_eq!(id, ModelId(100));
}

#[tokio::test]
async fn predict_sends_feature_rows_as_json_array() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/models/100/predict"))
        .and(wiremock::matchers::body_json(json!([
            [-2.3, 0.568, 4.78, 3.99, 3.17, 0.125],
            [-2.3, 0.568, 4.78, 3.99, 3.17, 0.300]
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1.17, 2.98])))
        .expect(1)
        .mount(&server)
        .await;

    let rows = vec![
        vec![-2.3, 0.568, 4.78, 3.99, 3.17, 0.125],
        vec![-2.3, 0.568, 4.78, 3.99, 3.17, 0.300],
    ];
    let client = client_for(&server).await;
    let response = client.models().predict(ModelId(100), &rows).await.unwrap();

    assert_eq!(response.status, 200);
    let predictions: Vec<f64> = response.success_json().unwrap();
    assert_eq!(predictions.len(), rows.len());
}

#[tokio::test]
async fn analysis_phases_hit_their_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyses/3/features/defaults"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/analyses/3/hyperParams/defaults"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let features = client
        .analyses()
        .set_feature_defaults(AnalysisId(3))
        .await
        .unwrap();
    assert!(features.is_success());

    let hyper = client
        .analyses()
        .set_hyper_parameter_defaults(AnalysisId(3))
        .await
        .unwrap();
    assert!(hyper.is_success());
}

#[tokio::test]
async fn model_status_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/models/weird"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client.models().status("weird").await;
    assert!(matches!(result, Err(SdkError::Serialization(_))));
}
