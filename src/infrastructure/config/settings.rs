//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application
//! settings. Every section is optional; a missing file is not an error for
//! commands that can run on defaults, see [`Config::load_or_default`].
//!
//! # Example
//!
//! ```no_run
//! use solid_lessons::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::discount::DiscountsConfig;
use super::logging::LoggingConfig;
use super::runner::RunnerConfig;
use crate::domain::Principle;
use crate::error::{ConfigError, Error, Result};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Discount registry seeding.
    #[serde(default)]
    pub discounts: DiscountsConfig,

    /// Lesson runner settings.
    #[serde(default)]
    pub runner: RunnerConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation
    /// fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` when given, otherwise use defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] when a path is given.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Lessons selected in `[runner]`, parsed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unknown lesson name.
    pub fn selected_lessons(&self) -> Result<Vec<Principle>> {
        self.runner
            .lessons
            .iter()
            .map(|name| {
                name.parse::<Principle>().map_err(|err| {
                    Error::from(ConfigError::InvalidValue {
                        field: "runner.lessons",
                        reason: err.to_string(),
                    })
                })
            })
            .collect()
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "logging.format",
                    reason: format!("expected \"pretty\" or \"json\", got \"{other}\""),
                }
                .into());
            }
        }

        for category in &self.discounts.categories {
            if category.rate < Decimal::ZERO || category.rate > Decimal::ONE {
                return Err(ConfigError::InvalidValue {
                    field: "discounts.categories.rate",
                    reason: format!(
                        "{} for '{}' must be between 0 and 1",
                        category.rate, category.key
                    ),
                }
                .into());
            }
        }

        self.selected_lessons()?;
        Ok(())
    }
}
