use crate::{
    error::ApiError,
    models::{Movie, MovieFilters, MoviesResponse},
    services::client::{ApiClient, RequestOptions},
};

/// Lists catalogue movies, passing through only the filters that are set
pub async fn list_movies(
    client: &ApiClient,
    filters: &MovieFilters,
) -> Result<MoviesResponse, ApiError> {
    let options = RequestOptions {
        query: filters.to_query(),
        ..RequestOptions::default()
    };

    client.request("/movies", options).await
}

pub async fn get_movie(client: &ApiClient, movie_id: i64) -> Result<Movie, ApiError> {
    client
        .request(&format!("/movies/{}", movie_id), RequestOptions::new())
        .await
}
