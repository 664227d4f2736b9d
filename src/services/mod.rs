pub mod client;
pub mod dashboard;
pub mod health;
pub mod mock_data;
pub mod movies;
pub mod providers;
pub mod recommendations;

pub use client::{ApiClient, RequestOptions};
pub use dashboard::{load_dashboard, DashboardSettings, DashboardState};
pub use providers::{RecommendationProvider, RemoteProvider};
