//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`narrator`]: `RecordingNarrator`, a [`Narrator`](crate::port::Narrator)
//!   that keeps every line for assertions.
//! - [`config`]: Canonical test configurations and TOML snippets.

pub mod config;
pub mod narrator;
