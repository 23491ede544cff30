//! Discount strategy port.
//!
//! Defines the [`DiscountStrategy`] trait. A strategy answers one question:
//! how much discount does a given amount earn? Which strategy applies is
//! decided elsewhere, by the registry, so adding a category never touches
//! the dispatch code.
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use rust_decimal_macros::dec;
//! use solid_lessons::port::inbound::strategy::DiscountStrategy;
//!
//! struct Flat;
//!
//! impl DiscountStrategy for Flat {
//!     fn name(&self) -> &str { "flat" }
//!
//!     fn compute_discount(&self, amount: Decimal) -> Decimal {
//!         amount.min(dec!(10))
//!     }
//! }
//!
//! assert_eq!(Flat.compute_discount(dec!(4)), dec!(4));
//! ```

use rust_decimal::Decimal;

/// A pure discount computation selected by category.
///
/// Implementations carry no mutable state: the result depends only on
/// `amount`. They must be `Send + Sync` because the registry shares them
/// across threads.
pub trait DiscountStrategy: Send + Sync {
    /// Human-readable identifier, used in logs and listings.
    fn name(&self) -> &str;

    /// Discount earned by `amount`.
    ///
    /// Amounts are not validated: a negative amount yields a negative
    /// discount for proportional strategies.
    fn compute_discount(&self, amount: Decimal) -> Decimal;
}
