//! Configuration from environment and defaults.

/// Top-level QueryLens configuration.
#[derive(Debug, Clone)]
pub struct QueryLensConfig {
    /// HTTP server port.
    pub port: u16,
    /// Base URL of the ChatGPT deployment the fetch pipeline talks to.
    pub base_url: String,
}

impl QueryLensConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3004);

        let base_url = std::env::var("QUERYLENS_BASE_URL")
            .unwrap_or_else(|_| "https://chatgpt.com".to_string());

        Self {
            port,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}
