//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `GLASSSHOP_DATA_DIR` - Directory holding saved snapshots (default: .glassshop)
//! - `GLASSSHOP_STORAGE_NAMESPACE` - Snapshot key (default: glassshop-storage)
//! - `GLASSSHOP_CATALOG_SEED` - Seed for the mock catalog (default: 2024)
//! - `GLASSSHOP_LOG_FORMAT` - `pretty` or `json` (default: pretty)

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::persistence::DEFAULT_NAMESPACE;

const DEFAULT_DATA_DIR: &str = ".glassshop";
const DEFAULT_CATALOG_SEED: &str = "2024";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `pretty` or `json`, got `{other}`")),
        }
    }
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory for the file snapshot store
    pub data_dir: PathBuf,
    /// Key the snapshot is saved under
    pub storage_namespace: String,
    /// Seed for the generated catalog
    pub catalog_seed: u64,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            storage_namespace: DEFAULT_NAMESPACE.to_string(),
            catalog_seed: 2024,
            log_format: LogFormat::Pretty,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from the process environment and a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is set to an
    /// unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is set to an
    /// unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env_or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let data_dir = PathBuf::from(env_or_default("GLASSSHOP_DATA_DIR", DEFAULT_DATA_DIR));

        let storage_namespace = env_or_default("GLASSSHOP_STORAGE_NAMESPACE", DEFAULT_NAMESPACE);
        validate_namespace(&storage_namespace)
            .map_err(|e| invalid("GLASSSHOP_STORAGE_NAMESPACE", e))?;

        let catalog_seed = env_or_default("GLASSSHOP_CATALOG_SEED", DEFAULT_CATALOG_SEED)
            .trim()
            .parse::<u64>()
            .map_err(|e| invalid("GLASSSHOP_CATALOG_SEED", e.to_string()))?;

        let log_format = env_or_default("GLASSSHOP_LOG_FORMAT", "pretty")
            .parse::<LogFormat>()
            .map_err(|e| invalid("GLASSSHOP_LOG_FORMAT", e))?;

        Ok(Self {
            data_dir,
            storage_namespace,
            catalog_seed,
            log_format,
        })
    }
}

fn invalid(key: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), reason.into())
}

/// The namespace becomes a file name, so keep it to a safe alphabet.
fn validate_namespace(namespace: &str) -> Result<(), String> {
    if namespace.is_empty() {
        return Err("must not be empty".to_string());
    }
    if namespace.starts_with('.') {
        return Err("must not start with a dot".to_string());
    }
    if let Some(c) = namespace
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
    {
        return Err(format!("unsupported character `{c}`"));
    }
    Ok(())
}
