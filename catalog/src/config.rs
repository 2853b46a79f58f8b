//! Console configuration module.
//!
//! This module provides configuration loading for the catalog console from
//! environment variables. The index and library never read the environment;
//! only the binary does.
//!
//! # Environment Variables
//!
//! - `CATALOG_PRELOAD_SAMPLES`: Register the sample catalog on start
//!   (`true`/`false`, `1`/`0`, `yes`/`no`; default: `true`)
//!
//! Logging is configured separately through `RUST_LOG`.

/// Console configuration.
#[derive(Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Whether the sample records are registered before the menu starts.
    pub preload_samples: bool,
}

/// Error returned when loading configuration fails.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue { name: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { name, message } => {
                write!(f, "invalid value for {name}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            preload_samples: Self::DEFAULT_PRELOAD_SAMPLES,
        }
    }
}

impl CatalogConfig {
    /// Default for `CATALOG_PRELOAD_SAMPLES`.
    pub const DEFAULT_PRELOAD_SAMPLES: bool = true;

    const PRELOAD_SAMPLES_VAR: &'static str = "CATALOG_PRELOAD_SAMPLES";

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `CATALOG_PRELOAD_SAMPLES` is set but is not a
    /// recognized boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(Self::PRELOAD_SAMPLES_VAR).ok();
        let preload_samples = Self::load_preload_samples(raw.as_deref())?;
        Ok(Self { preload_samples })
    }

    /// Parse the preload flag.
    ///
    /// Returns the default if not set.
    fn load_preload_samples(value: Option<&str>) -> Result<bool, ConfigError> {
        let Some(value) = value else {
            return Ok(Self::DEFAULT_PRELOAD_SAMPLES);
        };
        parse_bool(value).ok_or_else(|| ConfigError::InvalidValue {
            name: Self::PRELOAD_SAMPLES_VAR.to_string(),
            message: format!("'{value}' is not a boolean (expected true/false, 1/0, yes/no)"),
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
