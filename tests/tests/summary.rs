//! Tests for the summary cards endpoint.

use axum_test::TestServer;
use integration_tests::setup::TestContext;

#[tokio::test]
async fn summary_totals_come_from_last_column() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/api/summary").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["latest_date"], "1/25/20");
    assert_eq!(body["metrics"]["cases"]["total"], 20);
    assert_eq!(body["metrics"]["deaths"]["total"], 3);
    assert_eq!(body["metrics"]["recovered"]["total"], 9);
}

#[tokio::test]
async fn summary_changes_use_second_to_last_column() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let body: serde_json::Value = server.get("/api/summary").await.json();
    // cases 20 - 14, deaths 3 - 2, recovered 9 - 6
    assert_eq!(body["metrics"]["cases"]["change"], 6);
    assert_eq!(body["metrics"]["cases"]["change_display"], "+6");
    assert_eq!(body["metrics"]["deaths"]["change"], 1);
    assert_eq!(body["metrics"]["recovered"]["change"], 3);
}

#[tokio::test]
async fn summary_active_is_derived() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let body: serde_json::Value = server.get("/api/summary").await.json();
    let m = &body["metrics"];
    assert_eq!(
        m["active"]["total"].as_i64().unwrap(),
        m["cases"]["total"].as_i64().unwrap()
            - m["deaths"]["total"].as_i64().unwrap()
            - m["recovered"]["total"].as_i64().unwrap()
    );
    assert_eq!(
        m["active"]["change"].as_i64().unwrap(),
        m["cases"]["change"].as_i64().unwrap()
            - m["deaths"]["change"].as_i64().unwrap()
            - m["recovered"]["change"].as_i64().unwrap()
    );
}

#[tokio::test]
async fn summary_ratios_use_their_own_denominators() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let body: serde_json::Value = server.get("/api/summary").await.json();
    // fatality: 3 * 100 / (3 + 9); recovery: 9 * 100 / 20
    assert_eq!(body["metrics"]["fatality_ratio"], 25.0);
    assert_eq!(body["metrics"]["recovery_ratio"], 45.0);
}

#[tokio::test]
async fn summary_totals_are_comma_formatted() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let body: serde_json::Value = server.get("/api/summary").await.json();
    assert_eq!(body["metrics"]["cases"]["total_display"], "20");
    // zero or negative changes carry no sign prefix
    let change = body["metrics"]["active"]["change"].as_i64().unwrap();
    let display = body["metrics"]["active"]["change_display"].as_str().unwrap();
    if change > 0 {
        assert!(display.starts_with('+'));
    } else {
        assert!(!display.starts_with('+'));
    }
}
