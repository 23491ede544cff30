//! Result of a discount lookup.

use rust_decimal::Decimal;
use serde::Serialize;

use super::category::CategoryKey;

/// Outcome of asking the registry for a discount.
///
/// A miss is its own variant so callers can tell "no strategy for this
/// category" apart from a strategy that legitimately returned zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DiscountQuote {
    /// A strategy was registered for the category.
    Matched {
        category: CategoryKey,
        discount: Decimal,
    },
    /// No strategy is registered for the requested category.
    NoMatchingStrategy,
}

impl DiscountQuote {
    /// The discount, with a miss collapsed to zero.
    #[must_use]
    pub fn discount_or_zero(&self) -> Decimal {
        match self {
            Self::Matched { discount, .. } => *discount,
            Self::NoMatchingStrategy => Decimal::ZERO,
        }
    }

    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }
}
