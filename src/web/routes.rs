use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::chart::{figure, ChartDescription};
use crate::dashboard::Dashboard;
use crate::layout::Layout;
use crate::state::ControlState;

/// The dashboard page. Controls are built client-side from `/api/layout`.
const INDEX_HTML: &str = include_str!("../../assets/dashboard.html");

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub chart: ChartDescription,
    pub figure: Value,
}

/// Routes:
/// * `GET /`            – dashboard page
/// * `GET /api/layout`  – control declaration as JSON
/// * `POST /api/render` – `ControlState` in, chart description + Plotly figure out
pub fn build_router(dashboard: Arc<Dashboard>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/layout", get(layout))
        .route("/api/render", post(render))
        .with_state(dashboard)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn layout(State(dashboard): State<Arc<Dashboard>>) -> impl IntoResponse {
    Json(Layout::for_dashboard(&dashboard))
}

/// Unknown chart kinds and malformed bodies are rejected by the `Json`
/// extractor before this runs.
async fn render(
    State(dashboard): State<Arc<Dashboard>>,
    Json(controls): Json<ControlState>,
) -> Json<RenderResponse> {
    let chart = dashboard.render(&controls);
    let figure = figure::to_plotly(&chart);
    Json(RenderResponse { chart, figure })
}
