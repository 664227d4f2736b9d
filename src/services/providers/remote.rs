use crate::{
    error::ApiError,
    models::RecommendationsResponse,
    services::{client::ApiClient, health, providers::RecommendationProvider, recommendations},
};

/// Provider backed by the HTTP recommendation backend
#[derive(Clone, Debug)]
pub struct RemoteProvider {
    client: ApiClient,
}

impl RemoteProvider {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl RecommendationProvider for RemoteProvider {
    async fn is_available(&self) -> bool {
        health::is_backend_available(&self.client).await
    }

    async fn content_based(
        &self,
        movie_id: i64,
        limit: u32,
    ) -> Result<RecommendationsResponse, ApiError> {
        let response = recommendations::content_based(&self.client, movie_id, Some(limit)).await?;

        tracing::info!(
            movie_id,
            results = response.recommendations.len(),
            provider = self.name(),
            "Content-based recommendations fetched"
        );

        Ok(response)
    }

    async fn collaborative(
        &self,
        user_id: i64,
        limit: u32,
    ) -> Result<RecommendationsResponse, ApiError> {
        let response = recommendations::collaborative(&self.client, user_id, Some(limit)).await?;

        tracing::info!(
            user_id,
            results = response.recommendations.len(),
            provider = self.name(),
            "Collaborative recommendations fetched"
        );

        Ok(response)
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
