//! Lesson runner configuration.

use serde::{Deserialize, Serialize};

/// Settings for the `run` command.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RunnerConfig {
    /// Wait for Enter before the first and after the last lesson.
    #[serde(default)]
    pub pause: bool,

    /// Lessons to run, by principle key or name. Empty runs all of them.
    #[serde(default)]
    pub lessons: Vec<String>,
}
