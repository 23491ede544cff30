//! Configuration projections for operator-facing adapters.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::Result;

/// One configured discount category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigCategory {
    pub key: String,
    pub rate: Decimal,
}

/// Full configuration projection for operator-facing output.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigView {
    pub log_level: String,
    pub log_format: String,
    pub builtin_discounts: bool,
    pub categories: Vec<ConfigCategory>,
    pub pause: bool,
    /// Lesson keys selected in `[runner]`; empty means all.
    pub lessons: Vec<String>,
}

/// Validation output for `config validate`.
#[derive(Debug, Clone, Default)]
pub struct ConfigValidationReport {
    /// Categories the registry will hold once built.
    pub registered_categories: usize,
    pub warnings: Vec<String>,
}

/// Configuration use-cases for operator-facing adapters.
pub trait ConfigurationOperator: Send + Sync {
    /// Build a projection for `config show`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or fails validation.
    fn show_config(&self, config_toml: &str) -> Result<ConfigView>;

    /// Validate configuration for `config validate`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or fails validation.
    fn validate_config(&self, config_toml: &str) -> Result<ConfigValidationReport>;
}
