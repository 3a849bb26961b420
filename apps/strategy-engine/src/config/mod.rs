//! Configuration module for the strategy engine.
//!
//! YAML configuration with environment variable interpolation. The file is
//! optional: without one, built-in defaults apply.
//!
//! # Usage
//!
//! ```rust,ignore
//! use strategy_engine::config::load_config;
//!
//! // Load from default path (strategy-engine.yaml), falling back to defaults
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/strategy-engine.yaml"))?;
//! ```

mod observability;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::clustering::ClusteringOptions;
use crate::domain::strategy_mapping::{MappingRule, StrategyIdMapper};

pub use observability::{LOG_FORMATS, LoggingConfig, ObservabilityConfig};

/// Default configuration file name.
pub const DEFAULT_CONFIG_PATH: &str = "strategy-engine.yaml";

/// Smallest and largest accepted same-expiration window.
const WINDOW_SIZE_RANGE: std::ops::RangeInclusive<usize> = 3..=6;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Clustering configuration.
    #[serde(default)]
    pub clustering: ClusteringOptions,
    /// Replacement strategy-id table; the built-in table when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy_ids: Option<Vec<MappingRule>>,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Build the strategy-id mapper this configuration describes.
    #[must_use]
    pub fn strategy_id_mapper(&self) -> StrategyIdMapper {
        self.strategy_ids
            .clone()
            .map_or_else(StrategyIdMapper::standard, StrategyIdMapper::new)
    }
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to
///   `strategy-engine.yaml`; a missing default file yields the defaults.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = match path {
        Some(path) => path,
        None if !Path::new(DEFAULT_CONFIG_PATH).exists() => return Ok(Config::default()),
        None => DEFAULT_CONFIG_PATH,
    };

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let sizes = &config.clustering.window_sizes;

    if sizes.is_empty() {
        return Err(ConfigError::ValidationError(
            "clustering.window_sizes must not be empty".to_string(),
        ));
    }

    if let Some(size) = sizes.iter().find(|&&s| !WINDOW_SIZE_RANGE.contains(&s)) {
        return Err(ConfigError::ValidationError(format!(
            "clustering.window_sizes entry {size} must be between {} and {}",
            WINDOW_SIZE_RANGE.start(),
            WINDOW_SIZE_RANGE.end()
        )));
    }

    if sizes.windows(2).any(|pair| pair[0] <= pair[1]) {
        return Err(ConfigError::ValidationError(
            "clustering.window_sizes must be strictly descending".to_string(),
        ));
    }

    let format = config.observability.logging.format.as_str();
    if !LOG_FORMATS.contains(&format) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {LOG_FORMATS:?}"
        )));
    }

    for (i, rule) in config.strategy_ids.iter().flatten().enumerate() {
        if rule.id.as_str().trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "strategy_ids[{i}].id must not be empty"
            )));
        }
        if rule.name.patterns().iter().all(|p| p.is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "strategy_ids[{i}] must have at least one non-empty pattern"
            )));
        }
    }

    Ok(())
}
