//! CLI configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use zenx_core::{RulesError, ValidationRules};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "zenx.json";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error
    #[error("failed to read {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Malformed JSON
    #[error("invalid JSON in {path}: {source}")]
    Json {
        /// File being parsed
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },

    /// Rule-set invariant violated
    #[error("invalid rules: {0}")]
    Rules(#[from] RulesError),

    /// Concurrency must allow at least one task
    #[error("concurrency must be at least 1")]
    ZeroConcurrency,
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZenxConfig {
    /// Validation thresholds.
    pub rules: ValidationRules,

    /// Category used for drafts that have none.
    pub default_category: String,

    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,

    /// Maximum drafts audited at once.
    pub concurrency: usize,
}

impl Default for ZenxConfig {
    fn default() -> Self {
        Self {
            rules: ValidationRules::default(),
            default_category: "general".to_string(),
            log_level: "info".to_string(),
            concurrency: 4,
        }
    }
}

impl ZenxConfig {
    /// Load from an explicit path, else `./zenx.json` when present, else defaults.
    pub async fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => read_json(path).await?,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if tokio::fs::try_exists(fallback).await.unwrap_or(false) {
                    read_json(fallback).await?
                } else {
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the rules with a standalone rules file.
    pub async fn override_rules(&mut self, path: &Path) -> Result<(), ConfigError> {
        let rules: ValidationRules = read_json(path).await?;
        rules.validate()?;
        self.rules = rules;
        Ok(())
    }

    /// Check invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rules.validate()?;
        if self.concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        Ok(())
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&json).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}
