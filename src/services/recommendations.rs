use crate::{
    error::ApiError,
    models::RecommendationsResponse,
    services::client::{ApiClient, RequestOptions},
};

/// Result count requested when the caller does not pick one
pub const DEFAULT_RECOMMENDATION_LIMIT: u32 = 10;

/// Movies similar to `movie_id` by content features.
///
/// Neither the id nor the limit is validated here; the backend rejects what
/// it cannot serve.
pub async fn content_based(
    client: &ApiClient,
    movie_id: i64,
    limit: Option<u32>,
) -> Result<RecommendationsResponse, ApiError> {
    let options = RequestOptions::new()
        .query("movie_id", movie_id)
        .query("limit", limit.unwrap_or(DEFAULT_RECOMMENDATION_LIMIT));

    client.request("/recommend/content-based", options).await
}

/// Movies predicted for `user_id` from other users' preferences
pub async fn collaborative(
    client: &ApiClient,
    user_id: i64,
    limit: Option<u32>,
) -> Result<RecommendationsResponse, ApiError> {
    let options = RequestOptions::new()
        .query("user_id", user_id)
        .query("limit", limit.unwrap_or(DEFAULT_RECOMMENDATION_LIMIT));

    client.request("/recommend/collaborative", options).await
}
