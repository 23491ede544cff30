//! Operator-facing inbound ports consumed by CLI adapters.

pub mod configuration;
pub mod discount;
pub mod port;
pub mod runtime;
