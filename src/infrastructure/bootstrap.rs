//! Composition root: builds the registry and the lesson runner from config.
//!
//! This is the only place that decides which concrete strategies and
//! lessons the CLI works with. Everything built here is passed down
//! explicitly; nothing is stored in a global.

use std::sync::Arc;

use tracing::info;

use crate::application::discount::StrategyRegistry;
use crate::application::lesson::LessonRunner;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Build the discount registry described by `[discounts]`.
///
/// # Errors
///
/// Propagates registry builder errors. Configured keys are already
/// normalized, so a parsed config always builds.
pub fn build_registry(config: &Config) -> Result<StrategyRegistry> {
    let builder = config.discounts.categories.iter().fold(
        StrategyRegistry::builder().builtin(config.discounts.builtin),
        |builder, category| builder.percentage(category.key.clone(), category.rate),
    );
    let registry = builder.build()?;
    info!(categories = registry.len(), "discount registry built");
    Ok(registry)
}

/// Build a lesson runner over the full catalog, sharing `registry` with the
/// open/closed lesson.
#[must_use]
pub fn build_runner(registry: Arc<StrategyRegistry>) -> LessonRunner {
    LessonRunner::with_catalog(registry)
}
