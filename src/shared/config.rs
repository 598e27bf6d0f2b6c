use log::info;
use std::env;
use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

const DEFAULT_NODE: &str = "http://localhost:9200";
const DEFAULT_INDEX: &str = "catalog";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Connection settings for the search engine that stores the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElasticsearchConfig {
    pub node: String,
    pub index: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout: Duration,
    pub max_retries: u32,
}

impl Default for ElasticsearchConfig {
    fn default() -> Self {
        Self {
            node: DEFAULT_NODE.to_string(),
            index: DEFAULT_INDEX.to_string(),
            username: None,
            password: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl ElasticsearchConfig {
    pub fn new(node: impl Into<String>, index: impl Into<String>) -> AppResult<Self> {
        let config = Self {
            node: node.into(),
            index: index.into(),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Read `ELASTICSEARCH_*` variables, falling back to defaults for unset ones
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let defaults = Self::default();

        let timeout = match lookup("ELASTICSEARCH_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(raw.trim().parse::<u64>().map_err(|_| {
                AppError::InvalidInput(format!("ELASTICSEARCH_TIMEOUT_SECS is not a number: {}", raw))
            })?),
            None => defaults.timeout,
        };
        let max_retries = match lookup("ELASTICSEARCH_MAX_RETRIES") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| {
                AppError::InvalidInput(format!("ELASTICSEARCH_MAX_RETRIES is not a number: {}", raw))
            })?,
            None => defaults.max_retries,
        };

        let config = Self {
            node: lookup("ELASTICSEARCH_NODE").unwrap_or(defaults.node),
            index: lookup("ELASTICSEARCH_INDEX").unwrap_or(defaults.index),
            username: lookup("ELASTICSEARCH_USERNAME").filter(|value| !value.is_empty()),
            password: lookup("ELASTICSEARCH_PASSWORD").filter(|value| !value.is_empty()),
            timeout,
            max_retries,
        };
        config.validate()?;

        // Log target without exposing credentials
        info!(
            "Search engine configured: {} (index '{}')",
            config.node.split('@').last().unwrap_or("unknown_host"),
            config.index
        );

        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        if !self.node.starts_with("http://") && !self.node.starts_with("https://") {
            return Err(AppError::InvalidInput(
                "Invalid search engine node. Must start with http:// or https://".to_string(),
            ));
        }
        if self.index.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search engine index name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Application-wide settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    pub elasticsearch: ElasticsearchConfig,
}

impl CatalogConfig {
    /// Load `.env` (if present) and read the environment
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Ok(Self {
            elasticsearch: ElasticsearchConfig::from_env()?,
        })
    }
}
