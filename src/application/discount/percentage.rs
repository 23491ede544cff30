//! Proportional discount strategies.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::port::DiscountStrategy;

pub const REGULAR: &str = "regular";
pub const PREMIUM: &str = "premium";
pub const VIP: &str = "vip";
pub const STUDENT: &str = "student";

/// A discount that is a fixed fraction of the amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PercentageDiscount {
    name: String,
    rate: Decimal,
}

impl PercentageDiscount {
    /// Create a strategy charging `rate` (0.05 for 5%) of the amount.
    #[must_use]
    pub fn new(name: impl Into<String>, rate: Decimal) -> Self {
        Self {
            name: name.into(),
            rate,
        }
    }

    /// 5%.
    #[must_use]
    pub fn regular() -> Self {
        Self::new(REGULAR, dec!(0.05))
    }

    /// 10%.
    #[must_use]
    pub fn premium() -> Self {
        Self::new(PREMIUM, dec!(0.10))
    }

    /// 15%.
    #[must_use]
    pub fn vip() -> Self {
        Self::new(VIP, dec!(0.15))
    }

    /// 20%. Not seeded by default; registered at runtime to show extension.
    #[must_use]
    pub fn student() -> Self {
        Self::new(STUDENT, dec!(0.20))
    }

    /// Strategies seeded into a registry built with
    /// [`StrategyRegistry::with_builtin`](super::StrategyRegistry::with_builtin).
    #[must_use]
    pub fn builtin() -> Vec<Self> {
        vec![Self::regular(), Self::premium(), Self::vip()]
    }

    #[must_use]
    pub const fn rate(&self) -> Decimal {
        self.rate
    }
}

impl DiscountStrategy for PercentageDiscount {
    fn name(&self) -> &str {
        &self.name
    }

    fn compute_discount(&self, amount: Decimal) -> Decimal {
        amount * self.rate
    }
}
