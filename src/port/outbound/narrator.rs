//! Narrator port for lesson output.
//!
//! Lessons never print directly. They hand [`Narration`] lines to a
//! [`Narrator`], which the console adapter renders and the test kit records.

use crate::domain::Narration;

/// Sink for lesson output.
pub trait Narrator {
    /// Accept one line of narration.
    fn narrate(&mut self, line: Narration);

    fn section(&mut self, title: &str) {
        self.narrate(Narration::Section(title.to_string()));
    }

    fn explain(&mut self, text: &str) {
        self.narrate(Narration::Explain(text.to_string()));
    }

    fn effect(&mut self, text: &str) {
        self.narrate(Narration::Effect(text.to_string()));
    }

    fn fault(&mut self, text: &str) {
        self.narrate(Narration::Fault(text.to_string()));
    }

    fn outcome(&mut self, label: &str, value: &str) {
        self.narrate(Narration::Outcome {
            label: label.to_string(),
            value: value.to_string(),
        });
    }
}

/// Narrator that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNarrator;

impl Narrator for NullNarrator {
    fn narrate(&mut self, _line: Narration) {}
}
