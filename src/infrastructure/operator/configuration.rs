//! Configuration operator implementation.

use crate::application::discount::percentage::{PREMIUM, REGULAR, VIP};
use crate::domain::CategoryKey;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::operator::configuration::{
    ConfigCategory, ConfigValidationReport, ConfigView, ConfigurationOperator,
};

use super::entry::Operator;

impl ConfigurationOperator for Operator {
    fn show_config(&self, config_toml: &str) -> Result<ConfigView> {
        let config = Config::parse_toml(config_toml)?;

        Ok(ConfigView {
            log_level: config.logging.level,
            log_format: config.logging.format,
            builtin_discounts: config.discounts.builtin,
            categories: config
                .discounts
                .categories
                .into_iter()
                .map(|category| ConfigCategory {
                    key: category.key.into(),
                    rate: category.rate,
                })
                .collect(),
            pause: config.runner.pause,
            lessons: config.runner.lessons,
        })
    }

    fn validate_config(&self, config_toml: &str) -> Result<ConfigValidationReport> {
        let config = Config::parse_toml(config_toml)?;
        let registry = bootstrap::build_registry(&config)?;
        let mut warnings = Vec::new();

        if registry.is_empty() {
            warnings.push("No discount categories registered; every lookup returns 0".to_string());
        }

        let mut seen: Vec<CategoryKey> = Vec::new();
        for category in &config.discounts.categories {
            let key = category.key.clone();
            if seen.contains(&key) {
                warnings.push(format!("Category '{key}' is listed more than once; the last rate wins"));
            } else if config.discounts.builtin && [REGULAR, PREMIUM, VIP].contains(&key.as_str()) {
                warnings.push(format!("Category '{key}' replaces the built-in rate"));
            }
            seen.push(key);
        }

        Ok(ConfigValidationReport {
            registered_categories: registry.len(),
            warnings,
        })
    }
}
