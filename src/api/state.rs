use std::sync::Arc;

use crate::config::Config;
use crate::services::{ApiClient, DashboardSettings, RecommendationProvider, RemoteProvider};

/// Shared application state
///
/// Built once at startup and never mutated; handlers clone the `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Direct backend access for the catalogue pass-through routes
    pub client: ApiClient,
    pub provider: Arc<dyn RecommendationProvider>,
}

impl AppState {
    /// State talking to the backend at `config.api_url`
    pub fn new(config: Config) -> Self {
        let client = ApiClient::new(config.api_url.clone());
        let provider = Arc::new(RemoteProvider::new(client.clone()));
        Self::with_provider(config, client, provider)
    }

    pub fn with_provider(
        config: Config,
        client: ApiClient,
        provider: Arc<dyn RecommendationProvider>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            client,
            provider,
        }
    }

    pub fn dashboard_settings(&self) -> DashboardSettings {
        DashboardSettings::from(self.config.as_ref())
    }
}
