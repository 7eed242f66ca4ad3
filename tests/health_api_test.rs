//! Health API integration tests

use crate::common::TestApp;

mod common;

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::spawn().await;
    let client = app.http_client();

    let response = client
        .get(app.api_url("/health"))
        .send()
        .await
        .expect("Failed to call health endpoint");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Invalid JSON body");
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_openapi_spec_served() {
    let app = TestApp::spawn().await;
    let client = app.http_client();

    let response = client
        .get(app.api_url("/api-docs/openapi.json"))
        .send()
        .await
        .expect("Failed to fetch OpenAPI spec");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Invalid JSON body");
    assert!(body["paths"]["/v1/otp/send"].is_object());
}
