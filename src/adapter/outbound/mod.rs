//! Outbound (driven) adapters.

pub mod console;
