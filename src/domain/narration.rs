//! Lines of lesson output.

use serde::Serialize;

/// A single line emitted while a lesson runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum Narration {
    /// Start of a new section (a lesson or one of its scenarios).
    Section(String),
    /// Explanatory prose.
    Explain(String),
    /// The observable effect of a method call.
    Effect(String),
    /// An error that was caught and reported.
    Fault(String),
    /// A labelled result.
    Outcome { label: String, value: String },
}

impl Narration {
    /// Text carried by the line; for outcomes, the value.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Section(text) | Self::Explain(text) | Self::Effect(text) | Self::Fault(text) => {
                text
            }
            Self::Outcome { value, .. } => value,
        }
    }
}
