use std::path::Path;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use superstore_dashboard::{web, Dashboard};
use tower::ServiceExt;

fn router() -> Router {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/three_orders.csv");
    let dashboard = Dashboard::load(&path).expect("fixture loads");
    web::build_router(Arc::new(dashboard))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn render_request(body: Value) -> Request<Body> {
    Request::post("/api/render")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn serves_dashboard_page() {
    let response = router()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("id=\"graph-selector\""));
    assert!(html.contains("id=\"year-slider\""));
    assert!(html.contains("id=\"ship-mode-selector\""));
    assert!(html.contains("id=\"main-graph\""));
}

#[tokio::test]
async fn layout_reflects_dataset() {
    let response = router()
        .oneshot(Request::get("/api/layout").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let layout = body_json(response).await;
    assert_eq!(layout["title"], "Superstore Sales Dashboard");
    assert_eq!(layout["chart_selector"]["value"], "bar");
    assert_eq!(layout["chart_selector"]["options"][1]["value"], "pie");
    assert_eq!(layout["year_slider"]["min"], 2021);
    assert_eq!(layout["year_slider"]["max"], 2022);
    assert_eq!(layout["year_slider"]["value"], 2021);
    assert_eq!(layout["ship_mode_selector"]["options"], json!(["Standard", "First"]));
    assert_eq!(layout["ship_mode_selector"]["value"], json!(["Standard", "First"]));
}

#[tokio::test]
async fn renders_bar_chart() {
    let response = router()
        .oneshot(render_request(json!({
            "kind": "bar",
            "year": 2021,
            "ship_modes": ["Standard", "First"],
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["chart"]["kind"], "bar");
    assert_eq!(body["chart"]["title"], "Sales by Category");
    assert_eq!(body["chart"]["row_count"], 2);
    assert_eq!(body["figure"]["data"][0]["x"], json!(["A", "B"]));
    assert_eq!(body["figure"]["data"][0]["y"], json!([10.0, 20.0]));
}

#[tokio::test]
async fn empty_selection_is_not_an_error() {
    let response = router()
        .oneshot(render_request(json!({
            "kind": "pie",
            "year": 2022,
            "ship_modes": [],
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["chart"]["series"], json!([]));
    assert_eq!(body["figure"]["data"], json!([]));
}

#[tokio::test]
async fn rejects_unknown_chart_kind() {
    let response = router()
        .oneshot(render_request(json!({
            "kind": "histogram",
            "year": 2021,
            "ship_modes": ["Standard"],
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
