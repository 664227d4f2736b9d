/// Dashboard loading with mock-data fallback
///
/// One load checks backend health once, then fetches both recommendation lists
/// concurrently. Anything that goes wrong ends in the `Offline` state with
/// mock selections in place of the missing data. Nothing is retried.
use rand::Rng;
use serde::Serialize;

use crate::{
    config::{Config, FallbackPolicy},
    error::ApiError,
    models::{Movie, RecommendationsResponse},
    services::{mock_data, providers::RecommendationProvider},
};

/// Seeds and behaviour for a dashboard load
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSettings {
    pub movie_id: i64,
    pub user_id: i64,
    pub limit: u32,
    pub policy: FallbackPolicy,
}

impl From<&Config> for DashboardSettings {
    fn from(config: &Config) -> Self {
        Self {
            movie_id: config.featured_movie_id,
            user_id: config.featured_user_id,
            limit: config.recommendation_limit,
            policy: config.fallback_policy,
        }
    }
}

/// One tab's list of movies
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationSlot {
    /// Rank order, displayed as-is
    pub movies: Vec<Movie>,
    /// True when the movies come from the bundled mock dataset
    pub fallback: bool,
}

impl RecommendationSlot {
    fn live(response: RecommendationsResponse) -> Self {
        Self {
            movies: response.recommendations,
            fallback: false,
        }
    }

    fn mock(movies: Vec<Movie>) -> Self {
        Self {
            movies,
            fallback: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardData {
    pub content_based: RecommendationSlot,
    pub collaborative: RecommendationSlot,
}

/// `Loading` is left exactly once per load, for `Online` or `Offline`
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DashboardState {
    Loading,
    Online(DashboardData),
    Offline(DashboardData),
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardState::Loading)
    }

    /// Whether the page should show the "using mock data" indicator
    pub fn using_mock_data(&self) -> bool {
        matches!(self, DashboardState::Offline(_))
    }

    pub fn data(&self) -> Option<&DashboardData> {
        match self {
            DashboardState::Loading => None,
            DashboardState::Online(data) | DashboardState::Offline(data) => Some(data),
        }
    }
}

/// Resolves the dashboard from `provider`, falling back to mock data.
///
/// `rng` drives the collaborative mock shuffle and is only consulted on the
/// fallback path.
pub async fn load_dashboard<R: Rng + Send>(
    provider: &dyn RecommendationProvider,
    settings: &DashboardSettings,
    mut rng: R,
) -> DashboardState {
    tracing::info!(
        provider = provider.name(),
        movie_id = settings.movie_id,
        user_id = settings.user_id,
        "Loading recommendations"
    );

    if !provider.is_available().await {
        tracing::warn!(provider = provider.name(), "Backend unavailable, using mock data");
        return DashboardState::Offline(mock_dashboard(settings, &mut rng));
    }

    let state = match settings.policy {
        FallbackPolicy::AllOrNothing => {
            let fetched = tokio::try_join!(
                provider.content_based(settings.movie_id, settings.limit),
                provider.collaborative(settings.user_id, settings.limit),
            );

            match fetched {
                Ok((content, collaborative)) => DashboardState::Online(DashboardData {
                    content_based: RecommendationSlot::live(content),
                    collaborative: RecommendationSlot::live(collaborative),
                }),
                Err(e) => {
                    tracing::warn!(error = %e, "Recommendation fetch failed, using mock data");
                    DashboardState::Offline(mock_dashboard(settings, &mut rng))
                }
            }
        }
        FallbackPolicy::PerSlot => {
            let (content, collaborative) = tokio::join!(
                provider.content_based(settings.movie_id, settings.limit),
                provider.collaborative(settings.user_id, settings.limit),
            );

            let content_based = slot_or_mock(content, "content_based", || {
                mock_data::mock_content_based(settings.movie_id)
            });
            let collaborative = slot_or_mock(collaborative, "collaborative", || {
                mock_data::mock_collaborative(settings.user_id, &mut rng)
            });

            let data = DashboardData {
                content_based,
                collaborative,
            };
            if data.content_based.fallback || data.collaborative.fallback {
                DashboardState::Offline(data)
            } else {
                DashboardState::Online(data)
            }
        }
    };

    tracing::info!(using_mock_data = state.using_mock_data(), "Recommendations loaded");

    state
}

fn mock_dashboard<R: Rng + ?Sized>(settings: &DashboardSettings, rng: &mut R) -> DashboardData {
    DashboardData {
        content_based: RecommendationSlot::mock(mock_data::mock_content_based(settings.movie_id)),
        collaborative: RecommendationSlot::mock(mock_data::mock_collaborative(
            settings.user_id,
            rng,
        )),
    }
}

fn slot_or_mock(
    result: Result<RecommendationsResponse, ApiError>,
    slot: &str,
    fallback: impl FnOnce() -> Vec<Movie>,
) -> RecommendationSlot {
    match result {
        Ok(response) => RecommendationSlot::live(response),
        Err(e) => {
            tracing::warn!(slot, error = %e, "Recommendation fetch failed, using mock data for slot");
            RecommendationSlot::mock(fallback())
        }
    }
}
