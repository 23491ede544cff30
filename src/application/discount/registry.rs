use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::domain::{CategoryKey, DiscountQuote, DomainError};
use crate::port::DiscountStrategy;

use super::percentage::PercentageDiscount;

/// Registry mapping discount categories to strategies.
///
/// Lookups normalize the category, so `"VIP"` and `"vip"` reach the same
/// strategy. Registering an existing category replaces its strategy. There is
/// no removal.
///
/// The map sits behind a read-write lock, so a registry shared through an
/// `Arc` can gain categories while other threads compute discounts.
///
/// Use [`StrategyRegistryBuilder`] for construction from config.
#[derive(Default)]
pub struct StrategyRegistry {
    strategies: RwLock<HashMap<CategoryKey, Arc<dyn DiscountStrategy>>>,
}

impl StrategyRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the regular, premium and vip strategies.
    #[must_use]
    pub fn with_builtin() -> Self {
        let registry = Self::new();
        for strategy in PercentageDiscount::builtin() {
            if let Ok(key) = CategoryKey::new(strategy.name()) {
                registry.insert(key, Arc::new(strategy));
            }
        }
        registry
    }

    /// Create a builder for constructing a registry from config.
    #[must_use]
    pub fn builder() -> StrategyRegistryBuilder {
        StrategyRegistryBuilder::new()
    }

    /// Register `strategy` under `category`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyCategory`] when `category` is empty after
    /// trimming.
    pub fn register(
        &self,
        category: &str,
        strategy: Arc<dyn DiscountStrategy>,
    ) -> Result<(), DomainError> {
        let key = CategoryKey::new(category)?;
        self.insert(key, strategy);
        Ok(())
    }

    fn insert(&self, key: CategoryKey, strategy: Arc<dyn DiscountStrategy>) {
        info!(category = %key, strategy = strategy.name(), "discount strategy registered");
        self.strategies.write().insert(key, strategy);
    }

    /// Compute the discount for `category`.
    ///
    /// Unknown categories earn no discount: the result is zero rather than
    /// an error. Use [`quote`](Self::quote) to tell a miss from a real zero.
    #[must_use]
    pub fn compute_discount(&self, category: &str, amount: Decimal) -> Decimal {
        self.quote(category, amount).discount_or_zero()
    }

    /// Look up `category` and compute its discount, reporting a miss as
    /// [`DiscountQuote::NoMatchingStrategy`].
    #[must_use]
    pub fn quote(&self, category: &str, amount: Decimal) -> DiscountQuote {
        let Ok(key) = CategoryKey::new(category) else {
            debug!(category, "empty discount category");
            return DiscountQuote::NoMatchingStrategy;
        };

        let strategy = self.strategies.read().get(&key).cloned();
        match strategy {
            Some(strategy) => {
                let discount = strategy.compute_discount(amount);
                debug!(category = %key, %amount, %discount, "discount computed");
                DiscountQuote::Matched {
                    category: key,
                    discount,
                }
            }
            None => {
                debug!(category = %key, "no matching discount strategy");
                DiscountQuote::NoMatchingStrategy
            }
        }
    }

    /// Strategy registered for `category`, if any.
    #[must_use]
    pub fn strategy(&self, category: &str) -> Option<Arc<dyn DiscountStrategy>> {
        let key = CategoryKey::new(category).ok()?;
        self.strategies.read().get(&key).cloned()
    }

    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.strategy(category).is_some()
    }

    /// Registered categories in sorted order.
    #[must_use]
    pub fn categories(&self) -> Vec<CategoryKey> {
        let mut keys: Vec<CategoryKey> = self.strategies.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Number of registered categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.read().len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.read().is_empty()
    }
}

/// Builder for constructing a [`StrategyRegistry`] from configuration.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use solid_lessons::application::discount::StrategyRegistry;
///
/// let registry = StrategyRegistry::builder()
///     .builtin(true)
///     .percentage("student", dec!(0.20))
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.compute_discount("Student", dec!(100)), dec!(20));
/// ```
#[derive(Default)]
pub struct StrategyRegistryBuilder {
    builtin: bool,
    extra: Vec<(String, Arc<dyn DiscountStrategy>)>,
}

impl StrategyRegistryBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the regular, premium and vip strategies.
    #[must_use]
    pub fn builtin(mut self, enabled: bool) -> Self {
        self.builtin = enabled;
        self
    }

    /// Add a proportional strategy for `category`.
    #[must_use]
    pub fn percentage(self, category: impl Into<String>, rate: Decimal) -> Self {
        let category = category.into();
        let strategy = PercentageDiscount::new(category.clone(), rate);
        self.strategy(category, Arc::new(strategy))
    }

    /// Add an arbitrary strategy for `category`.
    #[must_use]
    pub fn strategy(
        mut self,
        category: impl Into<String>,
        strategy: Arc<dyn DiscountStrategy>,
    ) -> Self {
        self.extra.push((category.into(), strategy));
        self
    }

    /// Build the registry. Extra strategies are registered after the
    /// built-ins, so they override them on a shared category.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyCategory`] if any extra category is empty.
    pub fn build(self) -> Result<StrategyRegistry, DomainError> {
        let registry = if self.builtin {
            StrategyRegistry::with_builtin()
        } else {
            StrategyRegistry::new()
        };

        for (category, strategy) in self.extra {
            registry.register(&category, strategy)?;
        }

        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    struct FixedStrategy(Decimal);

    impl DiscountStrategy for FixedStrategy {
        fn name(&self) -> &str {
            "fixed"
        }

        fn compute_discount(&self, _amount: Decimal) -> Decimal {
            self.0
        }
    }

    #[test]
    fn test_registry_new() {
        let registry = StrategyRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_with_builtin_seeds_three_categories() {
        let registry = StrategyRegistry::with_builtin();
        let names: Vec<String> = registry
            .categories()
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(names, vec!["premium", "regular", "vip"]);
        assert!(!registry.contains("student"));
    }

    #[test]
    fn test_register_rejects_empty_category() {
        let registry = StrategyRegistry::new();
        let result = registry.register("  ", Arc::new(PercentageDiscount::student()));
        assert_eq!(result, Err(DomainError::EmptyCategory));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_last_registration_wins() {
        let registry = StrategyRegistry::new();
        registry
            .register("staff", Arc::new(FixedStrategy(dec!(1))))
            .unwrap();
        registry
            .register("STAFF", Arc::new(FixedStrategy(dec!(7))))
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.compute_discount("staff", dec!(100)), dec!(7));
    }

    #[test]
    fn test_quote_distinguishes_miss_from_zero() {
        let registry = StrategyRegistry::new();
        registry
            .register("staff", Arc::new(FixedStrategy(Decimal::ZERO)))
            .unwrap();

        assert!(registry.quote("staff", dec!(100)).is_match());
        assert_eq!(
            registry.quote("guest", dec!(100)),
            DiscountQuote::NoMatchingStrategy
        );
        assert_eq!(registry.compute_discount("guest", dec!(100)), Decimal::ZERO);
    }

    #[test]
    fn test_empty_lookup_is_a_miss() {
        let registry = StrategyRegistry::with_builtin();
        assert_eq!(registry.quote("", dec!(100)), DiscountQuote::NoMatchingStrategy);
        assert!(registry.strategy("").is_none());
    }

    #[test]
    fn test_builder_extra_overrides_builtin() {
        let registry = StrategyRegistry::builder()
            .builtin(true)
            .percentage("vip", dec!(0.30))
            .build()
            .unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.compute_discount("vip", dec!(100)), dec!(30));
    }

    #[test]
    fn test_builder_without_builtin() {
        let registry = StrategyRegistry::builder()
            .percentage("student", dec!(0.20))
            .build()
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.compute_discount("regular", dec!(100)), Decimal::ZERO);
    }

    #[test]
    fn test_builder_rejects_empty_category() {
        let result = StrategyRegistry::builder()
            .percentage("", dec!(0.20))
            .build();
        assert!(matches!(result, Err(DomainError::EmptyCategory)));
    }

    #[test]
    fn test_concurrent_register_and_lookup() {
        let registry = Arc::new(StrategyRegistry::with_builtin());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    registry
                        .register(&format!("tier{i}"), Arc::new(PercentageDiscount::student()))
                        .unwrap();
                    registry.compute_discount("vip", dec!(100))
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), dec!(15));
        }
        assert_eq!(registry.len(), 7);
    }
}
