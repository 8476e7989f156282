//! Configuration types
//!
//! Values are layered: serde defaults, then an optional TOML file, then
//! `SWAP__`-prefixed environment variables (`SWAP__FEED__URL`,
//! `SWAP__REFRESH__INTERVAL_SECS`, ...).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::{ConfigError, ConfigResult, DEFAULT_ICON_BASE_URL};

pub const DEFAULT_FEED_URL: &str = "https://interview.switcheo.com/prices.json";
pub const ENV_PREFIX: &str = "SWAP";

/// Price feed endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            timeout_secs: 10,
            user_agent: format!("swap-estimator/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FeedConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Rate engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub icon_base_url: String,
    /// Extra or replacement display names, applied over the built-in table
    pub name_overrides: HashMap<String, String>,
    pub default_from: String,
    pub default_to: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            icon_base_url: DEFAULT_ICON_BASE_URL.to_string(),
            name_overrides: HashMap::new(),
            default_from: "ETH".to_string(),
            default_to: "USDC".to_string(),
        }
    }
}

/// Background refresh configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    pub interval_secs: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: 60,
        }
    }
}

impl RefreshConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub feed: FeedConfig,
    pub engine: EngineConfig,
    pub refresh: RefreshConfig,
}

impl AppConfig {
    /// Load from an optional file plus the environment, then validate
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(true));
        }

        let loaded: AppConfig = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        loaded.validate()?;
        Ok(loaded)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.feed.url.starts_with("http://") || self.feed.url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "feed.url must be an http(s) URL, got {:?}",
                self.feed.url
            )));
        }
        if self.feed.timeout_secs == 0 {
            return Err(ConfigError::Invalid("feed.timeout_secs must be > 0".into()));
        }
        if self.refresh.interval_secs == 0 {
            return Err(ConfigError::Invalid("refresh.interval_secs must be > 0".into()));
        }
        if self.engine.icon_base_url.is_empty() {
            return Err(ConfigError::Invalid("engine.icon_base_url must not be empty".into()));
        }
        Ok(())
    }
}
