use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

const ENV_PREFIX: &str = "MOVIE_MATCH_";

/// Client configuration loaded from `MOVIE_MATCH_*` environment variables
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root of the backend serving `/api/movies` and `/api/recommend`
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Upper bound for one recommendation request
    #[serde(default = "default_timeout_ms")]
    pub recommend_timeout_ms: u64,

    /// Upper bound for one catalog request
    #[serde(default = "default_timeout_ms")]
    pub catalog_timeout_ms: u64,
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            recommend_timeout_ms: default_timeout_ms(),
            catalog_timeout_ms: default_timeout_ms(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from the process environment (and `.env`, if any)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .context("Failed to load client config")
    }

    pub fn recommend_timeout(&self) -> Duration {
        Duration::from_millis(self.recommend_timeout_ms)
    }

    pub fn catalog_timeout(&self) -> Duration {
        Duration::from_millis(self.catalog_timeout_ms)
    }
}
