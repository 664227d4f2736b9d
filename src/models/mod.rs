use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub mod movie;

pub use movie::Movie;

/// Status string the backend reports when it can serve recommendations
pub const HEALTHY_STATUS: &str = "healthy";

// ============================================================================
// Backend API Types
// ============================================================================

/// Body of `GET /health`
///
/// Only `status` drives availability. The other fields are shown as-is and
/// accept any JSON so an unexpected shape never hides a healthy backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub api_version: Value,
    /// Model name → model status, e.g. "content_based" → "ready"
    #[serde(default)]
    pub models: Value,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == HEALTHY_STATUS
    }

    pub fn api_version_label(&self) -> String {
        display_value(&self.api_version)
    }

    /// Model statuses for display. Empty unless `models` is an object.
    pub fn model_statuses(&self) -> BTreeMap<String, String> {
        self.models
            .as_object()
            .map(|models| {
                models
                    .iter()
                    .map(|(name, status)| (name.clone(), display_value(status)))
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Body of both `/recommend/*` endpoints
///
/// `recommendations` is in rank order and must be displayed as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationsResponse {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movie_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub count: usize,
    pub recommendations: Vec<Movie>,
}

/// Body of `GET /movies`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoviesResponse {
    pub count: usize,
    pub movies: Vec<Movie>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<AppliedFilters>,
}

/// Filters echoed back by `GET /movies`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppliedFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
}

/// Optional query filters for `GET /movies`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MovieFilters {
    pub limit: Option<u32>,
    pub genre: Option<String>,
    pub min_rating: Option<f64>,
}

impl MovieFilters {
    /// Query pairs for the filters that are set. Zero and empty values are
    /// treated as unset.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(limit) = self.limit.filter(|limit| *limit > 0) {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(genre) = self.genre.as_deref().filter(|genre| !genre.is_empty()) {
            params.push(("genre".to_string(), genre.to_string()));
        }
        if let Some(min_rating) = self.min_rating.filter(|rating| *rating != 0.0) {
            params.push(("min_rating".to_string(), min_rating.to_string()));
        }

        params
    }
}
