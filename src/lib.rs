//! solid-lessons - the SOLID design principles, each shown badly and then well.
//!
//! Each lesson runs a small "bad" scenario that violates one principle and a
//! "good" scenario that follows it, narrating what happens as it goes.
//!
//! # Architecture
//!
//! The open/closed lesson is built around a discount strategy registry:
//!
//! - **`application::discount::StrategyRegistry`** - category to strategy map
//!   with case-insensitive lookup and runtime registration
//!   - `PercentageDiscount` - fixed-rate strategy (regular 5%, premium 10%,
//!     vip 15%, student 20%)
//!
//! - **`application::lesson`** - the five lessons and the runner that
//!   sequences them
//!
//! # Modules
//!
//! - [`domain`] - Categories, quotes, principles and narration lines
//! - [`port`] - Traits at the seams: strategies, lessons, narrators
//! - [`application`] - Discount registry and lessons
//! - [`adapter`] - CLI and console narrator
//! - [`infrastructure`] - Configuration and composition root
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `testkit` - Recording narrator and config builders for tests
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use rust_decimal_macros::dec;
//! use solid_lessons::application::discount::{PercentageDiscount, StrategyRegistry};
//!
//! let registry = StrategyRegistry::with_builtin();
//! assert_eq!(registry.compute_discount("VIP", dec!(100)), dec!(15));
//! assert_eq!(registry.compute_discount("student", dec!(100)), dec!(0));
//!
//! registry
//!     .register("student", Arc::new(PercentageDiscount::student()))
//!     .unwrap();
//! assert_eq!(registry.compute_discount("student", dec!(100)), dec!(20));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
