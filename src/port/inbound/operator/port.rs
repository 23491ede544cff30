//! Unified operator capability surface for inbound adapters.

use super::configuration::ConfigurationOperator;
use super::discount::DiscountOperator;
use super::runtime::RuntimeOperator;

/// Unified operator capability surface consumed by inbound adapters.
pub trait OperatorPort: ConfigurationOperator + DiscountOperator + RuntimeOperator {}

impl<T> OperatorPort for T where T: ConfigurationOperator + DiscountOperator + RuntimeOperator {}
