//! TMDB client configuration.

use serde::Deserialize;
use std::fmt;

/// Configuration for the TMDB metadata client, loaded from `TMDB_`-prefixed
/// environment variables (`TMDB_API_KEY` is the only required one).
#[derive(Deserialize, Clone)]
pub struct TmdbConfig {
    /// TMDB v3 API key. Never logged; `Debug` redacts it.
    pub api_key: String,

    /// Movie details endpoint base, `{api_base}/{tmdb_id}` per lookup
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Image host base joined with the returned poster path
    #[serde(default = "default_image_base")]
    pub image_base: String,

    /// Per-call timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_base() -> String {
    "https://api.themoviedb.org/3/movie".to_string()
}

fn default_image_base() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

impl TmdbConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::prefixed("TMDB_")
            .from_env::<TmdbConfig>()
            .map_err(|e| anyhow::anyhow!("Failed to load TMDB config: {}", e))
    }

    /// Build a config with default endpoints for the given key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: default_api_base(),
            image_base: default_image_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl fmt::Debug for TmdbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbConfig")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("image_base", &self.image_base)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_api_key_uses_default_endpoints() {
        let config = TmdbConfig::with_api_key("secret");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.api_base, "https://api.themoviedb.org/3/movie");
        assert_eq!(config.image_base, "https://image.tmdb.org/t/p/w500");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = TmdbConfig::with_api_key("secret");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
