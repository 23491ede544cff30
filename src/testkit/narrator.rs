//! Narrator that records lesson output.

use crate::domain::Narration;
use crate::port::Narrator;

/// Collects every [`Narration`] line in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNarrator {
    lines: Vec<Narration>,
}

impl RecordingNarrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Narration] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Section titles, in order.
    pub fn sections(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                Narration::Section(title) => Some(title.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_section(&self, title: &str) -> bool {
        self.sections().contains(&title)
    }

    /// Text of every fault line.
    pub fn faults(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                Narration::Fault(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Value of the first outcome with `label`.
    pub fn outcome(&self, label: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            Narration::Outcome { label: l, value } if l == label => Some(value.as_str()),
            _ => None,
        })
    }

    /// Values of every outcome with `label`, in order.
    pub fn outcomes(&self, label: &str) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                Narration::Outcome { label: l, value } if l == label => Some(value.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Whether any line's text contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.text().contains(needle))
    }

    /// Lines from the first section titled `start` up to the next section
    /// titled `end`, or to the last line.
    pub fn between(&self, start: &str, end: &str) -> &[Narration] {
        let Some(from) = self
            .lines
            .iter()
            .position(|line| matches!(line, Narration::Section(t) if t == start))
        else {
            return &[];
        };
        let to = self.lines[from + 1..]
            .iter()
            .position(|line| matches!(line, Narration::Section(t) if t == end))
            .map_or(self.lines.len(), |offset| from + 1 + offset);
        &self.lines[from..to]
    }
}

impl Narrator for RecordingNarrator {
    fn narrate(&mut self, line: Narration) {
        self.lines.push(line);
    }
}
