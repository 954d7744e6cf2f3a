//! Tests for the map marker endpoint.

use axum::http::StatusCode;
use axum_test::TestServer;
use integration_tests::setup::TestContext;

#[tokio::test]
async fn cases_layer_builds_one_marker_per_located_row() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/api/markers/cases").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["layer"], "cases");
    // all four time-series rows carry coordinates
    assert_eq!(body["count"], 4);

    let markers = body["markers"].as_array().unwrap();
    assert_eq!(markers[0]["label"], "Lithuania");
    assert_eq!(markers[1]["label"], "Victoria, Australia");
    assert_eq!(markers[0]["color"], "orange");
}

#[tokio::test]
async fn marker_radius_is_two_pi_root_count() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let body: serde_json::Value = server.get("/api/markers/cases").await.json();
    // Lithuania's latest cases count is 8
    let radius = body["markers"][0]["radius"].as_f64().unwrap();
    let expected = 2.0 * std::f64::consts::PI * (8.0f64).sqrt();
    assert!((radius - expected).abs() < 1e-9);
}

#[tokio::test]
async fn snapshot_layer_skips_rows_without_coordinates() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let body: serde_json::Value = server.get("/api/markers/all").await.json();
    // Narnia has no coordinates and is silently skipped
    assert_eq!(body["count"], 3);
    let labels: Vec<&str> = body["markers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["label"].as_str().unwrap())
        .collect();
    assert!(!labels.contains(&"Narnia"));
    assert_eq!(body["markers"][0]["color"], "deepskyblue");
}

#[tokio::test]
async fn snapshot_tooltip_reports_missing_recovered_distinctly() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let body: serde_json::Value = server.get("/api/markers/all").await.json();
    let markers = body["markers"].as_array().unwrap();

    let lithuania = markers
        .iter()
        .find(|m| m["label"] == "Lithuania")
        .unwrap();
    let tooltip = lithuania["tooltip"].as_str().unwrap();
    assert!(tooltip.contains("Confirmed: 8"));
    assert!(tooltip.contains("Recovered: 3"));
    assert!(tooltip.contains("Active: 4")); // 8 - 1 - 3

    let micronesia = markers
        .iter()
        .find(|m| m["label"] == "Micronesia")
        .unwrap();
    let tooltip = micronesia["tooltip"].as_str().unwrap();
    assert!(tooltip.contains("Recovered: no data"));
    // missing recovered is zeroed for the arithmetic: 1 - 0 - 0
    assert!(tooltip.contains("Active: 1"));
}

#[tokio::test]
async fn deaths_and_recovered_layers_use_their_colors() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let body: serde_json::Value = server.get("/api/markers/deaths").await.json();
    assert_eq!(body["markers"][0]["color"], "crimson");

    let body: serde_json::Value = server.get("/api/markers/recovered").await.json();
    assert_eq!(body["markers"][0]["color"], "forestgreen");
}

#[tokio::test]
async fn unknown_layer_is_rejected() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/api/markers/everything").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "BAD_REQUEST");
}
