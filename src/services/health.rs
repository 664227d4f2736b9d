use crate::{
    error::ApiError,
    models::HealthResponse,
    services::client::{ApiClient, RequestOptions},
};

/// Fetches the backend's health report
pub async fn check_health(client: &ApiClient) -> Result<HealthResponse, ApiError> {
    client.request("/health", RequestOptions::new()).await
}

/// Whether the backend is reachable and reports itself healthy.
///
/// Never fails. Every call hits the network once; there is no caching or
/// retry.
pub async fn is_backend_available(client: &ApiClient) -> bool {
    match check_health(client).await {
        Ok(health) => {
            let healthy = health.is_healthy();
            tracing::info!(
                status = %health.status,
                api_version = %health.api_version_label(),
                models = ?health.model_statuses(),
                healthy,
                "Backend health checked"
            );
            healthy
        }
        Err(e) => {
            tracing::warn!(error = %e, "Backend health check failed");
            false
        }
    }
}
