//! Inbound (driving) ports consumed by inbound adapters.
//!
//! # Modules
//!
//! - [`lesson`]: runnable principle demonstrations
//! - [`operator`]: use-cases the CLI drives
//! - [`strategy`]: discount computation strategies

pub mod lesson;
pub mod operator;
pub mod strategy;
