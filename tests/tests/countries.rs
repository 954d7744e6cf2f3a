//! Tests for the ranked country table endpoint.

use axum_test::TestServer;
use integration_tests::setup::TestContext;

#[tokio::test]
async fn countries_are_ranked_by_confirmed_descending() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/api/countries").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let names: Vec<&str> = body["countries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["country"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Australia", "Lithuania", "Narnia", "Micronesia"]);
}

#[tokio::test]
async fn limit_caps_the_table_for_the_bar_chart() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let body: serde_json::Value = server
        .get("/api/countries")
        .add_query_param("limit", "2")
        .await
        .json();
    let countries = body["countries"].as_array().unwrap();
    assert_eq!(countries.len(), 2);
    assert_eq!(countries[0]["country"], "Australia");
}

#[tokio::test]
async fn active_column_holds_the_derived_identity() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let body: serde_json::Value = server.get("/api/countries").await.json();
    for c in body["countries"].as_array().unwrap() {
        assert_eq!(
            c["active"].as_i64().unwrap(),
            c["confirmed"].as_i64().unwrap()
                - c["deaths"].as_i64().unwrap()
                - c["recovered"].as_i64().unwrap()
        );
    }
}

#[tokio::test]
async fn missing_recovered_is_zeroed_but_flagged() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let body: serde_json::Value = server.get("/api/countries").await.json();
    let micronesia = body["countries"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["country"] == "Micronesia")
        .unwrap();
    assert_eq!(micronesia["recovered"], 0);
    assert_eq!(micronesia["has_recovered"], false);
    assert_eq!(micronesia["active"], 1);

    let lithuania = body["countries"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["country"] == "Lithuania")
        .unwrap();
    assert_eq!(lithuania["has_recovered"], true);
}
