//! Operator implementations for inbound adapters.

pub mod configuration;
pub mod discount;
pub mod entry;
pub mod runtime;

mod shared;
