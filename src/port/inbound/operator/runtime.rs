//! Runtime control projection types for operator-facing adapters.
//!
//! Defines request and response types for running the lessons.

use crate::domain::Principle;
use crate::error::Result;
use crate::port::outbound::narrator::Narrator;

/// Run parameters from CLI flags.
///
/// Flags take precedence over the configuration file.
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    /// Raw TOML configuration content; defaults apply when absent.
    pub config_toml: Option<String>,

    /// Override for log level (e.g., "debug", "info", "warn").
    pub log_level: Option<String>,

    /// Override for the lesson selection, by key or name.
    pub lessons: Vec<String>,

    /// Wait for Enter before the first and after the last lesson.
    pub pause: bool,
}

/// Resolved run settings shown before the lessons start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    /// Lessons that will run, in SOLID order.
    pub lessons: Vec<Principle>,
    pub pause: bool,
    /// Categories registered before the open/closed lesson adds its own.
    pub categories: Vec<String>,
}

/// Runtime control use-cases for operator-facing adapters.
pub trait RuntimeOperator: Send + Sync {
    /// Resolve the configuration and selection without running anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or a lesson name is invalid.
    fn prepare_run(&self, request: &RunRequest) -> Result<RunPlan>;

    /// Run the selected lessons, narrating to `out`. Returns how many ran.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or a lesson name is invalid.
    fn execute_run(&self, request: &RunRequest, out: &mut dyn Narrator) -> Result<usize>;
}
