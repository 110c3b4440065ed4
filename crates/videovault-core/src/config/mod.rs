//! Application configuration schemas.
//!
//! Configuration is merged from optional TOML files and `VIDEOVAULT_`
//! environment variables via the `config` crate. Every field carries a
//! serde default, so an empty source set yields a usable configuration.

pub mod logging;
pub mod sharing;

use std::path::Path;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::sharing::SharingConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Share-link settings.
    #[serde(default)]
    pub sharing: SharingConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Demo catalog settings.
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Demo catalog configuration for the bundled binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Whether to seed the in-memory repositories with sample videos and links.
    #[serde(default = "default_true")]
    pub seed: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}

impl AppConfig {
    /// Load configuration from the `config/` directory.
    ///
    /// Merges `config/default`, the `config/{env}` overlay, and environment
    /// variables prefixed with `VIDEOVAULT__` (e.g. `VIDEOVAULT__SHARING__BASE_URL`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from(Path::new("config"), env)
    }

    /// Same as [`AppConfig::load`], reading the files from `dir`.
    pub fn load_from(dir: &Path, env: &str) -> Result<Self, AppError> {
        let default_file = dir.join("default");
        let env_file = dir.join(env);
        let builder = config::Config::builder()
            .add_source(config::File::with_name(&default_file.to_string_lossy()).required(false))
            .add_source(config::File::with_name(&env_file.to_string_lossy()).required(false))
            .add_source(
                config::Environment::with_prefix("VIDEOVAULT")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_builder(builder)
    }

    /// Build configuration from an inline TOML document.
    pub fn from_toml(document: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(document, config::FileFormat::Toml));

        Self::from_builder(builder)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, AppError> {
        let config = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

fn default_true() -> bool {
    true
}
