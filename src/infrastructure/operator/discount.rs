//! Discount operator implementation.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::infrastructure::bootstrap;
use crate::port::inbound::operator::discount::{
    CategoryView, DiscountOperator, DiscountReport, DiscountRequest,
};

use super::entry::Operator;
use super::shared::load_config;

impl DiscountOperator for Operator {
    fn list_categories(
        &self,
        config_toml: Option<&str>,
        sample: Decimal,
    ) -> Result<Vec<CategoryView>> {
        let config = load_config(config_toml, None)?;
        let registry = bootstrap::build_registry(&config)?;

        Ok(registry
            .categories()
            .into_iter()
            .filter_map(|key| {
                let strategy = registry.strategy(key.as_str())?;
                Some(CategoryView {
                    category: key.to_string(),
                    strategy: strategy.name().to_string(),
                    sample_discount: strategy.compute_discount(sample),
                })
            })
            .collect())
    }

    fn compute_discount(&self, request: &DiscountRequest) -> Result<DiscountReport> {
        if request.amount < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "amount",
                reason: format!("must not be negative, got {}", request.amount),
            }
            .into());
        }

        let config = load_config(request.config_toml.as_deref(), None)?;
        let registry = bootstrap::build_registry(&config)?;
        let quote = registry.quote(&request.category, request.amount);
        debug!(
            category = %request.category,
            amount = %request.amount,
            matched = quote.is_match(),
            "discount quoted"
        );

        Ok(DiscountReport {
            quote,
            known_categories: registry
                .categories()
                .into_iter()
                .map(String::from)
                .collect(),
        })
    }
}
