//! Discount projections for operator-facing adapters.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::DiscountQuote;
use crate::error::Result;

/// A registered category and what its strategy gives on a sample amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub category: String,
    pub strategy: String,
    pub sample_discount: Decimal,
}

/// Request for a single discount computation.
#[derive(Debug, Clone)]
pub struct DiscountRequest {
    /// Raw TOML configuration content; defaults apply when absent.
    pub config_toml: Option<String>,
    pub category: String,
    pub amount: Decimal,
}

/// Result of a discount computation.
#[derive(Debug, Clone)]
pub struct DiscountReport {
    pub quote: DiscountQuote,
    /// Every registered category, sorted.
    pub known_categories: Vec<String>,
}

/// Discount use-cases for operator-facing adapters.
pub trait DiscountOperator: Send + Sync {
    /// List registered categories with the discount each gives on `sample`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    fn list_categories(&self, config_toml: Option<&str>, sample: Decimal)
        -> Result<Vec<CategoryView>>;

    /// Compute one discount.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is negative or the configuration is
    /// invalid.
    fn compute_discount(&self, request: &DiscountRequest) -> Result<DiscountReport>;
}
