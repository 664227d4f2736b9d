//! In-process stand-in for the recommendation backend

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, Method, StatusCode},
    response::IntoResponse,
    routing::{any, get},
    Json, Router,
};
use serde_json::{json, Value};

use movie_recs_web::services::mock_data::mock_movies;

/// Nothing listens on port 1
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

/// How the stub answers each endpoint
#[derive(Clone)]
pub struct StubConfig {
    pub health_status: &'static str,
    pub health_code: StatusCode,
    pub collaborative_fails: bool,
    /// Replaces the whole `/health` body when set
    pub health_body: Option<Value>,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            health_status: "healthy",
            health_code: StatusCode::OK,
            collaborative_fails: false,
            health_body: None,
        }
    }
}

#[derive(Clone, Default)]
pub struct Recorded {
    /// (path, query params, content-type header) per request
    pub requests: Arc<Mutex<Vec<(String, HashMap<String, String>, Option<String>)>>>,
}

impl Recorded {
    pub fn last(&self) -> (String, HashMap<String, String>, Option<String>) {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }

    fn push(&self, path: &str, params: HashMap<String, String>, headers: &HeaderMap) {
        let content_type = headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.requests
            .lock()
            .unwrap()
            .push((path.to_string(), params, content_type));
    }
}

#[derive(Clone)]
struct StubState {
    config: StubConfig,
    recorded: Recorded,
}

/// Starts the stub on an ephemeral port and returns its base URL
pub async fn spawn_backend(config: StubConfig) -> (String, Recorded) {
    let recorded = Recorded::default();
    let state = StubState {
        config,
        recorded: recorded.clone(),
    };

    let router = Router::new()
        .route("/health", get(health))
        .route("/recommend/content-based", get(content_based))
        .route("/recommend/collaborative", get(collaborative))
        .route("/movies", get(list_movies))
        .route("/movies/:id", get(get_movie))
        .route("/broken", get(broken))
        .route("/crash", get(crash))
        .route("/echo", any(echo))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{}", addr), recorded)
}

async fn health(State(state): State<StubState>, headers: HeaderMap) -> impl IntoResponse {
    state.recorded.push("/health", HashMap::new(), &headers);
    let body = state.config.health_body.clone().unwrap_or_else(|| {
        json!({
            "status": state.config.health_status,
            "api_version": "1.0.0",
            "models": { "content_based": "ready", "collaborative": "ready" }
        })
    });
    (state.config.health_code, Json(body))
}

async fn content_based(
    State(state): State<StubState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Json<Value> {
    state
        .recorded
        .push("/recommend/content-based", params.clone(), &headers);
    // Deliberately not in mock-list order
    let movies = picks(&[23, 8, 10]);
    Json(json!({
        "method": "content_based",
        "movie_id": params.get("movie_id").and_then(|id| id.parse::<i64>().ok()),
        "count": movies.len(),
        "recommendations": movies,
    }))
}

async fn collaborative(
    State(state): State<StubState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> axum::response::Response {
    state
        .recorded
        .push("/recommend/collaborative", params.clone(), &headers);
    if state.config.collaborative_fails {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": "collaborative model not loaded" })),
        )
            .into_response();
    }
    let movies = picks(&[21, 1]);
    Json(json!({
        "method": "collaborative",
        "user_id": params.get("user_id").and_then(|id| id.parse::<i64>().ok()),
        "count": movies.len(),
        "recommendations": movies,
    }))
    .into_response()
}

async fn list_movies(
    State(state): State<StubState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Json<Value> {
    state.recorded.push("/movies", params.clone(), &headers);
    let movies = mock_movies();
    Json(json!({
        "count": movies.len(),
        "movies": movies,
        "filters": { "genre": params.get("genre") },
    }))
}

async fn get_movie(Path(id): Path<i64>) -> axum::response::Response {
    match mock_movies().into_iter().find(|movie| movie.movie_id == id) {
        Some(movie) => Json(movie).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "movie not found" })),
        )
            .into_response(),
    }
}

/// Answers with the method and raw body it received
async fn echo(
    State(state): State<StubState>,
    method: Method,
    headers: HeaderMap,
    body: String,
) -> Json<Value> {
    state.recorded.push("/echo", HashMap::new(), &headers);
    Json(json!({
        "method": method.as_str(),
        "body": serde_json::from_str::<Value>(&body).unwrap_or(Value::String(body)),
    }))
}

/// 200 with a body that is not JSON
async fn broken() -> &'static str {
    "not json"
}

/// 500 with an HTML body
async fn crash() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>")
}

fn picks(ids: &[i64]) -> Vec<movie_recs_web::models::Movie> {
    let all = mock_movies();
    ids.iter()
        .filter_map(|id| all.iter().find(|movie| movie.movie_id == *id).cloned())
        .collect()
}
