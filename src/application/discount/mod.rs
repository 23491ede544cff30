//! Discount strategies and the registry that dispatches to them.
//!
//! - [`percentage`]: proportional strategies, including the built-in
//!   regular, premium, vip and student categories
//! - [`registry`]: [`StrategyRegistry`](registry::StrategyRegistry), the
//!   category-to-strategy mapping

pub mod percentage;
pub mod registry;

pub use percentage::PercentageDiscount;
pub use registry::{StrategyRegistry, StrategyRegistryBuilder};
