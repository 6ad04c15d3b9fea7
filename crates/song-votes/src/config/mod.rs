use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::errors::AppError;

pub mod defaults;

use defaults::*;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub features: FeaturesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    pub max_connections: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Number of recommendations returned by `GET /recommendations` when no
    /// explicit limit is requested
    #[serde(default = "default_list_limit")]
    pub default_list_limit: u64,
}

/// Optional surfaces that are off in production
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturesConfig {
    /// Expose the test-administration routes (bulk truncate)
    #[serde(default = "default_test_routes")]
    pub test_routes: bool,
}

fn default_database_url() -> String {
    DEFAULT_DATABASE_URL.to_string()
}

// Web defaults
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_list_limit() -> u64 {
    DEFAULT_LIST_LIMIT
}

fn default_test_routes() -> bool {
    DEFAULT_TEST_ROUTES
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: Some(DEFAULT_MAX_CONNECTIONS),
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            default_list_limit: default_list_limit(),
        }
    }
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            test_routes: default_test_routes(),
        }
    }
}

impl Config {
    /// Load configuration, layering defaults, the TOML file and `SONG_VOTES_*`
    /// environment variables (nested keys separated by `__`).
    ///
    /// A missing file is created with the default configuration.
    pub fn load_from_file(config_file: &str) -> Result<Self> {
        if !Path::new(config_file).exists() {
            let contents = toml::to_string_pretty(&Self::default())?;
            std::fs::write(config_file, contents)
                .with_context(|| format!("Failed to write default config file: {config_file}"))?;
            info!("Created default config file: {}", config_file);
        }

        let config: Config = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("Failed to load configuration from {config_file}"))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.database.url.trim().is_empty() {
            return Err(AppError::configuration("database.url must not be empty").into());
        }
        if self.web.default_list_limit == 0 {
            return Err(
                AppError::configuration("web.default_list_limit must be greater than zero").into(),
            );
        }
        Ok(())
    }
}
