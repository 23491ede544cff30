//! Runtime operator implementation.

use std::sync::Arc;

use tracing::info;

use crate::domain::Principle;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::port::inbound::operator::runtime::{RunPlan, RunRequest, RuntimeOperator};
use crate::port::outbound::narrator::Narrator;

use super::entry::Operator;
use super::shared::{load_config, resolve_lessons};

impl RuntimeOperator for Operator {
    fn prepare_run(&self, request: &RunRequest) -> Result<RunPlan> {
        let config = load_config(request.config_toml.as_deref(), request.log_level.as_deref())?;
        let mut lessons = resolve_lessons(&request.lessons, &config)?;
        if lessons.is_empty() {
            lessons = Principle::ALL.to_vec();
        }
        lessons.sort();
        lessons.dedup();

        let registry = bootstrap::build_registry(&config)?;
        Ok(RunPlan {
            lessons,
            pause: request.pause || config.runner.pause,
            categories: registry.categories().into_iter().map(String::from).collect(),
        })
    }

    fn execute_run(&self, request: &RunRequest, out: &mut dyn Narrator) -> Result<usize> {
        let config = load_config(request.config_toml.as_deref(), request.log_level.as_deref())?;
        let selection = resolve_lessons(&request.lessons, &config)?;

        let registry = Arc::new(bootstrap::build_registry(&config)?);
        let runner = bootstrap::build_runner(registry);
        let ran = runner.run(&selection, out);
        info!(lessons = ran, "run finished");
        Ok(ran)
    }
}
