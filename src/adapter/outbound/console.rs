//! Console narrator.
//!
//! Renders lesson narration through the shared output module, so `--json` and
//! `--quiet` apply to lessons the same way they apply to every command.

use crate::adapter::output;
use crate::domain::Narration;
use crate::port::Narrator;

/// [`Narrator`] that writes to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNarrator;

impl Narrator for ConsoleNarrator {
    fn narrate(&mut self, line: Narration) {
        match line {
            Narration::Section(title) => output::section(&title),
            Narration::Explain(text) => output::prose(&text),
            Narration::Effect(text) => output::effect(&text),
            Narration::Fault(text) => output::fault(&text),
            Narration::Outcome { label, value } => output::field(&label, value),
        }
    }
}
