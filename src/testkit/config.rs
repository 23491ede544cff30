//! Canonical test configurations.
//!
//! Single source of truth for configs used across tests.

use rust_decimal::Decimal;

use crate::infrastructure::config::discount::CategoryRate;
use crate::infrastructure::config::settings::Config;

/// Default config with `categories` added after the built-ins.
pub fn with_categories(builtin: bool, categories: &[(&str, Decimal)]) -> Config {
    let mut config = Config::default();
    config.discounts.builtin = builtin;
    config.discounts.categories = categories
        .iter()
        .map(|(key, rate)| CategoryRate {
            key: key.parse().expect("test category keys are non-empty"),
            rate: *rate,
        })
        .collect();
    config
}

/// A TOML document declaring the student category at 20%.
pub fn student_toml() -> &'static str {
    r#"[logging]
level = "warn"

[discounts]
builtin = true

[[discounts.categories]]
key = "student"
rate = 0.20
"#
}
