//! HTTP router and handlers.
//!
//! `/` serves the server-rendered page; the page's adapter script calls
//! `/api/figures` whenever the dropdown changes. Every figure request
//! recomputes from the dataset.

use crate::error::ApiError;
use crate::state::AppState;
use atd_chart_ui::figure::{BarFigure, MapFigure};
use atd_chart_ui::js_bridge::{
    DASHBOARD_CSS, DASHBOARD_CSS_PATH, DASHBOARD_JS, DASHBOARD_JS_PATH, FIGURES_ENDPOINT,
};
use atd_chart_ui::page::render_dashboard_page;
use atd_chart_ui::views::{self, DashboardFigures};
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Build the Axum router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route(DASHBOARD_JS_PATH, get(dashboard_js))
        .route(DASHBOARD_CSS_PATH, get(dashboard_css))
        .route("/api/states", get(states))
        .route(FIGURES_ENDPOINT, get(figures))
        .route("/api/map", get(map_figure))
        .route("/api/bar", get(bar_figure))
        .with_state(state)
}

/// `?state=XX`. Absent or blank means nothing is selected.
#[derive(Debug, Deserialize)]
pub struct FigureQuery {
    state: Option<String>,
}

impl FigureQuery {
    fn selected(&self) -> &str {
        self.state.as_deref().map(str::trim).unwrap_or("")
    }
}

#[derive(Debug, Serialize)]
pub struct StatesResponse {
    pub states: Vec<String>,
    pub default: String,
}

async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let html = render_dashboard_page(
        state.dataset.states(),
        &state.default_state,
        state.dataset.record_count(),
    )?;
    Ok(Html(html))
}

async fn dashboard_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        DASHBOARD_JS,
    )
}

async fn dashboard_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], DASHBOARD_CSS)
}

async fn states(State(state): State<Arc<AppState>>) -> Json<StatesResponse> {
    Json(StatesResponse {
        states: state.dataset.states().to_vec(),
        default: state.default_state.clone(),
    })
}

async fn figures(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FigureQuery>,
) -> Result<Json<DashboardFigures>, ApiError> {
    let selected = query.selected();
    log::debug!("figures requested for state '{}'", selected);
    let figures = views::dashboard_view(&state.dataset, selected, &state.map_settings)?;
    Ok(Json(figures))
}

async fn map_figure(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FigureQuery>,
) -> Result<Json<MapFigure>, ApiError> {
    let selected = query.selected();
    log::debug!("map figure requested for state '{}'", selected);
    Ok(Json(views::map_view(
        &state.dataset,
        selected,
        &state.map_settings,
    )?))
}

async fn bar_figure(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FigureQuery>,
) -> Result<Json<BarFigure>, ApiError> {
    let selected = query.selected();
    log::debug!("bar figure requested for state '{}'", selected);
    Ok(Json(views::bar_view(&state.dataset, selected)?))
}
