//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without
//! containing its logic.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Configuration loading and validation
//! - [`operator`] - Operator port implementations used by the CLI

pub mod bootstrap;
pub mod config;
pub mod operator;
