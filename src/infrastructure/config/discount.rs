//! Discount registry configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::CategoryKey;

/// How the discount registry is seeded at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiscountsConfig {
    /// Seed the regular, premium and vip categories.
    #[serde(default = "default_builtin")]
    pub builtin: bool,

    /// Extra proportional categories, registered after the built-ins.
    #[serde(default)]
    pub categories: Vec<CategoryRate>,
}

/// A category charged a fixed fraction of the amount.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CategoryRate {
    /// Normalized when parsed; an empty key is a parse error.
    pub key: CategoryKey,
    /// Fraction of the amount, between 0 and 1.
    pub rate: Decimal,
}

fn default_builtin() -> bool {
    true
}

impl Default for DiscountsConfig {
    fn default() -> Self {
        Self {
            builtin: default_builtin(),
            categories: Vec::new(),
        }
    }
}
