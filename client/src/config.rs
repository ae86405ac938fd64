//! Catalog client configuration

use std::time::Duration;

use anyhow::{Context, Result};

/// Public PokeAPI v2 endpoint
pub const DEFAULT_CATALOG_URL: &str = "https://pokeapi.co/api/v2";

/// Environment variable overriding [`CatalogConfig::base_url`]
pub const CATALOG_URL_VAR: &str = "DUEL_CATALOG_URL";

/// Environment variable overriding [`CatalogConfig::timeout`], in seconds
pub const CATALOG_TIMEOUT_VAR: &str = "DUEL_CATALOG_TIMEOUT_SECS";

/// Backoff for catalog requests that fail in transit or with a 5xx
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: usize,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
}

impl RetryPolicy {
    /// Never retry
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Delay to wait after a failed attempt that waited `delay`
    ///
    /// Always within `0..=max_delay`, even for a negative, infinite or NaN
    /// multiplier.
    pub fn next_delay(&self, delay: Duration) -> Duration {
        let secs = (delay.as_secs_f64() * self.backoff_multiplier)
            .min(self.max_delay.as_secs_f64())
            .max(0.0);
        Duration::from_secs_f64(secs)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(5),
            backoff_multiplier: 2.0,
        }
    }
}

/// Where and how to reach the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Base URL, without trailing slash (e.g., "https://pokeapi.co/api/v2")
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    pub user_agent: String,
    pub retry: RetryPolicy,
}

impl CatalogConfig {
    /// Defaults overridden by `DUEL_CATALOG_URL` and `DUEL_CATALOG_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the override keys
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(CATALOG_URL_VAR) {
            let url = url.trim().trim_end_matches('/');
            if url.is_empty() {
                anyhow::bail!("{} is set but empty", CATALOG_URL_VAR);
            }
            config.base_url = url.to_string();
        }

        if let Some(secs) = lookup(CATALOG_TIMEOUT_VAR) {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("{} must be a whole number of seconds", CATALOG_TIMEOUT_VAR))?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: concat!("duel-client/", env!("CARGO_PKG_VERSION")).to_string(),
            retry: RetryPolicy::default(),
        }
    }
}
