//! Tests for the health check endpoints and the dashboard page.

use axum::http::StatusCode;
use axum_test::TestServer;
use integration_tests::setup::TestContext;

#[tokio::test]
async fn health_reports_loaded_source_shape() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["source_loaded"], true);
    assert_eq!(body["date_columns"], 4);
    assert_eq!(body["countries"], 4);
}

#[tokio::test]
async fn ready_and_live_probes_respond() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/health/ready").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server.get("/health/live").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn index_serves_the_dashboard_page() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/").await;
    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("Epidemiological Dashboard"));
    // the page's country input defaults to an exact source name
    assert!(body.contains("Lithuania"));
}
