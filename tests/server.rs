//! Integration tests for the dashboard HTTP API.
//!
//! Run with: `cargo test --test server`

use std::io::Write;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use spacex_dash::data::LaunchTable;
use spacex_dash::server::{create_router, AppState};

const LAUNCHES_CSV: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
2,CCAFS LC-40,1,2000.0,F9 v1.1,v1.1
3,VAFB SLC-4E,1,500.0,F9 v1.1  B1003,v1.1
4,VAFB SLC-4E,0,2000.0,F9 FT B1017,FT
5,VAFB SLC-4E,1,3500.0,F9 FT B1029.1,FT
6,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
7,KSC LC-39A,0,5300.0,F9 FT B1030,FT
8,CCAFS SLC-40,1,3669.0,F9 FT B1035.2,FT
9,CCAFS SLC-40,0,9600.0,F9 B5 B1048.3,B5
";

/// Create a test router over the sample launches, loaded from disk.
fn create_test_router() -> Router {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(LAUNCHES_CSV.as_bytes()).unwrap();

    let table = LaunchTable::load_from_file(file.path()).unwrap();
    create_router(Arc::new(AppState::new(Arc::new(table))))
}

/// Helper to make a GET request returning the raw body.
async fn get_text(router: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// Helper to make a GET request.
async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get_text(router, uri).await;
    let json: Value = serde_json::from_str(&body).unwrap_or(json!(null));
    (status, json)
}

/// Helper to make a POST request with JSON body.
async fn post(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(json!(null));

    (status, json)
}

/// Collect `(output, figure)` pairs from an update response.
fn figures(body: &Value) -> Vec<(String, Value)> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| (u["output"].as_str().unwrap().to_string(), u["figure"].clone()))
        .collect()
}

/// Total number of scatter points in a figure.
fn point_count(figure: &Value) -> usize {
    figure["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|trace| trace["x"].as_array().unwrap().len())
        .sum()
}

// =============================================================================
// Page & metadata
// =============================================================================

#[tokio::test]
async fn test_index_page() {
    let router = create_test_router();
    let (status, body) = get_text(&router, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("SpaceX Launch Records Dashboard"));
    assert!(body.contains("plotly"));
    assert!(body.contains("9 launches loaded at"));
}

#[tokio::test]
async fn test_health() {
    let router = create_test_router();
    let (status, body) = get(&router, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["records"], 9);
    assert!(body["timestamp"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_layout() {
    let router = create_test_router();
    let (status, body) = get(&router, "/api/layout").await;

    assert_eq!(status, StatusCode::OK);
    let layout = &body["data"];
    assert_eq!(layout["site_dropdown"]["id"], "site-dropdown");
    assert_eq!(layout["site_dropdown"]["value"], "ALL");
    assert_eq!(layout["site_dropdown"]["options"].as_array().unwrap().len(), 5);
    assert_eq!(layout["payload_slider"]["min"], 0.0);
    assert_eq!(layout["payload_slider"]["max"], 10000.0);
    assert_eq!(layout["payload_slider"]["step"], 1000.0);
    assert_eq!(layout["payload_slider"]["value"], json!([0.0, 9600.0]));
}

#[tokio::test]
async fn test_dataset_summary() {
    let router = create_test_router();
    let (status, body) = get(&router, "/api/dataset").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["records"], 9);
    assert_eq!(body["data"]["successes"], 5);
    assert_eq!(body["data"]["launches_per_site"]["VAFB SLC-4E"], 3);
}

// =============================================================================
// Callback dispatch
// =============================================================================

#[tokio::test]
async fn test_initial_load_returns_both_figures() {
    let router = create_test_router();
    let (status, body) = post(&router, "/api/update", json!({ "changed": null })).await;

    assert_eq!(status, StatusCode::OK);
    let figures = figures(&body);
    let outputs: Vec<_> = figures.iter().map(|(o, _)| o.as_str()).collect();
    assert_eq!(outputs, ["success-pie-chart", "success-payload-scatter-chart"]);

    // Default slider sits on the payload bounds, which the open interval excludes
    let (_, scatter) = &figures[1];
    assert_eq!(point_count(scatter), 7);
}

#[tokio::test]
async fn test_all_sites_full_range() {
    let router = create_test_router();
    let (status, body) = post(
        &router,
        "/api/update",
        json!({
            "changed": null,
            "values": { "site-dropdown": "ALL", "payload-slider": [-1, 10000] }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let figures = figures(&body);

    let (_, pie) = &figures[0];
    assert_eq!(pie["layout"]["title"]["text"], "Total success launches by all sites");
    assert_eq!(pie["data"][0]["type"], "pie");
    assert_eq!(
        pie["data"][0]["labels"],
        json!(["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"])
    );
    assert_eq!(pie["data"][0]["values"], json!([1, 1, 1, 2]));

    let (_, scatter) = &figures[1];
    assert_eq!(point_count(scatter), 9);
    assert_eq!(
        scatter["layout"]["title"]["text"],
        "Correlation between Payload and Success for all Sites"
    );
}

#[tokio::test]
async fn test_dropdown_change_for_site2() {
    let router = create_test_router();
    let (status, body) = post(
        &router,
        "/api/update",
        json!({
            "changed": "site-dropdown",
            "values": { "site-dropdown": "site2", "payload-slider": [2000, 6000] }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let figures = figures(&body);
    assert_eq!(figures.len(), 2);

    let (_, pie) = &figures[0];
    assert_eq!(
        pie["layout"]["title"]["text"],
        "Total success launches for site VAFB SLC-4E"
    );
    assert_eq!(pie["data"][0]["labels"], json!(["0", "1"]));
    assert_eq!(pie["data"][0]["values"], json!([1, 2]));

    let (_, scatter) = &figures[1];
    assert_eq!(point_count(scatter), 1);
    assert_eq!(scatter["data"][0]["x"], json!([3500.0]));
    assert_eq!(scatter["data"][0]["text"], json!(["VAFB SLC-4E"]));
}

#[tokio::test]
async fn test_slider_change_only_updates_scatter() {
    let router = create_test_router();
    let (status, body) = post(
        &router,
        "/api/update",
        json!({
            "changed": "payload-slider",
            "values": { "site-dropdown": "site4", "payload-slider": [0, 5000] }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let figures = figures(&body);
    assert_eq!(figures.len(), 1);

    let (output, scatter) = &figures[0];
    assert_eq!(output, "success-payload-scatter-chart");
    assert_eq!(
        scatter["layout"]["title"]["text"],
        "Correlation between Payload and Success for Site CCAFS SLC-40"
    );
    assert_eq!(point_count(scatter), 1);
}

#[tokio::test]
async fn test_unknown_site_code_falls_back() {
    let router = create_test_router();
    let (status, body) = post(
        &router,
        "/api/update",
        json!({ "changed": "site-dropdown", "values": { "site-dropdown": "site42" } }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let (_, pie) = &figures(&body)[0];
    assert_eq!(
        pie["layout"]["title"]["text"],
        "Total success launches for site CCAFS SLC-40"
    );
}

#[tokio::test]
async fn test_unknown_component_is_bad_request() {
    let router = create_test_router();
    let (status, body) = post(
        &router,
        "/api/update",
        json!({ "changed": "launch-table", "values": {} }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("launch-table"));
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let router = create_test_router();
    let (status, _) = post(
        &router,
        "/api/update",
        json!({ "values": { "payload-slider": "heavy" } }),
    )
    .await;

    assert!(status.is_client_error());
}
