/// Recommendation provider abstraction
///
/// The dashboard only needs "is the backend up" and the two recommendation
/// lists. Hiding them behind a trait keeps the fallback logic testable
/// without a live backend.
use crate::{error::ApiError, models::RecommendationsResponse};

pub mod remote;

pub use remote::RemoteProvider;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationProvider: Send + Sync {
    /// Availability gate. Never fails; errors read as unavailable.
    async fn is_available(&self) -> bool;

    /// Content-based recommendations seeded by a movie
    async fn content_based(
        &self,
        movie_id: i64,
        limit: u32,
    ) -> Result<RecommendationsResponse, ApiError>;

    /// Collaborative recommendations seeded by a user
    async fn collaborative(
        &self,
        user_id: i64,
        limit: u32,
    ) -> Result<RecommendationsResponse, ApiError>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
