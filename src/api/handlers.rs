use axum::{
    extract::{Path, Query, State},
    response::Html,
    Extension, Json,
};
use chrono::Datelike;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::{Movie, MovieFilters, MoviesResponse},
    services::{load_dashboard, movies, DashboardState},
    views,
};

use super::AppState;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub using_mock_data: bool,
    pub dashboard: DashboardState,
}

/// Health check endpoint for this web service
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// The page shell with the dashboard still loading
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let year = chrono::Utc::now().year();
    Html(views::render_page(
        state.config.recommendation_limit as usize,
        year,
    ))
}

/// The resolved dashboard section
pub async fn dashboard_fragment(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Html<String> {
    let dashboard = resolve_dashboard(&state, &request_id).await;
    Html(views::dashboard::render(
        &dashboard,
        state.config.recommendation_limit as usize,
    ))
}

/// The backend status banner, from its own health check
pub async fn status_fragment(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Html<String> {
    let online = state.provider.is_available().await;

    tracing::info!(request_id = %request_id, online, "Backend status checked");

    Html(views::status_banner::render(online))
}

pub async fn dashboard_json(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Json<DashboardResponse> {
    let dashboard = resolve_dashboard(&state, &request_id).await;
    Json(DashboardResponse {
        using_mock_data: dashboard.using_mock_data(),
        dashboard,
    })
}

/// Pass-through of the backend catalogue
pub async fn list_movies(
    State(state): State<AppState>,
    Query(filters): Query<MovieFilters>,
) -> AppResult<Json<MoviesResponse>> {
    let response = movies::list_movies(&state.client, &filters).await?;
    Ok(Json(response))
}

pub async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<i64>,
) -> AppResult<Json<Movie>> {
    let movie = movies::get_movie(&state.client, movie_id).await?;
    Ok(Json(movie))
}

async fn resolve_dashboard(state: &AppState, request_id: &RequestId) -> DashboardState {
    tracing::info!(request_id = %request_id, "Processing dashboard request");

    let dashboard = load_dashboard(
        state.provider.as_ref(),
        &state.dashboard_settings(),
        StdRng::from_entropy(),
    )
    .await;

    tracing::info!(
        request_id = %request_id,
        using_mock_data = dashboard.using_mock_data(),
        "Dashboard resolved"
    );

    dashboard
}
