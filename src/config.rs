use serde::Deserialize;

/// How the dashboard reacts when only one of its two fetches fails
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Any fetch failure replaces both slots with mock data
    #[default]
    AllOrNothing,
    /// Each slot falls back on its own
    PerSlot,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Recommendation backend base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Seed movie for the content-based tab
    #[serde(default = "default_featured_movie_id")]
    pub featured_movie_id: i64,

    /// Seed user for the collaborative tab
    #[serde(default = "default_featured_user_id")]
    pub featured_user_id: i64,

    /// Number of recommendations requested per tab
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: u32,

    #[serde(default)]
    pub fallback_policy: FallbackPolicy,
}

fn default_api_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_featured_movie_id() -> i64 {
    // Inception
    3
}

fn default_featured_user_id() -> i64 {
    1
}

fn default_recommendation_limit() -> u32 {
    6
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            host: default_host(),
            port: default_port(),
            featured_movie_id: default_featured_movie_id(),
            featured_user_id: default_featured_user_id(),
            recommendation_limit: default_recommendation_limit(),
            fallback_policy: FallbackPolicy::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Address the web server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_env() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.featured_movie_id, 3);
        assert_eq!(config.featured_user_id, 1);
        assert_eq!(config.recommendation_limit, 6);
        assert_eq!(config.fallback_policy, FallbackPolicy::AllOrNothing);
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_overrides_from_env() {
        let vars = vec![
            ("API_URL".to_string(), "http://recs.internal:9000".to_string()),
            ("PORT".to_string(), "8080".to_string()),
            ("FALLBACK_POLICY".to_string(), "per_slot".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.api_url, "http://recs.internal:9000");
        assert_eq!(config.port, 8080);
        assert_eq!(config.fallback_policy, FallbackPolicy::PerSlot);
    }
}
