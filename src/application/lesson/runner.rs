//! Lesson catalog and runner.

use std::sync::Arc;

use tracing::info;

use crate::application::discount::StrategyRegistry;
use crate::domain::Principle;
use crate::port::{Lesson, Narrator};

use super::{dip, isp, lsp, ocp, srp};

/// All lessons in SOLID order.
///
/// The open/closed lesson runs against `registry` and registers the student
/// category in it.
#[must_use]
pub fn catalog(registry: Arc<StrategyRegistry>) -> Vec<Box<dyn Lesson>> {
    vec![
        Box::new(srp::SingleResponsibilityLesson),
        Box::new(ocp::OpenClosedLesson::new(registry)),
        Box::new(lsp::LiskovSubstitutionLesson),
        Box::new(isp::InterfaceSegregationLesson),
        Box::new(dip::DependencyInversionLesson),
    ]
}

/// Runs lessons in order, framed by an introduction and a closing section.
pub struct LessonRunner {
    lessons: Vec<Box<dyn Lesson>>,
}

impl LessonRunner {
    #[must_use]
    pub fn new(lessons: Vec<Box<dyn Lesson>>) -> Self {
        Self { lessons }
    }

    /// Runner over the full [`catalog`].
    #[must_use]
    pub fn with_catalog(registry: Arc<StrategyRegistry>) -> Self {
        Self::new(catalog(registry))
    }

    /// Principles of the lessons this runner holds.
    #[must_use]
    pub fn principles(&self) -> Vec<Principle> {
        self.lessons.iter().map(|lesson| lesson.principle()).collect()
    }

    /// Run the lessons whose principle is in `selection`, or all of them when
    /// `selection` is empty. Returns how many lessons ran.
    pub fn run(&self, selection: &[Principle], out: &mut dyn Narrator) -> usize {
        out.section("SOLID principles, by example");
        out.explain("Each principle is shown twice: first violated, then respected.");

        let mut ran = 0;
        for lesson in &self.lessons {
            let principle = lesson.principle();
            if !selection.is_empty() && !selection.contains(&principle) {
                continue;
            }

            info!(lesson = principle.key(), "running lesson");
            out.section(principle.title());
            out.explain(principle.summary());
            lesson.run(out);
            ran += 1;
        }

        out.section("Done");
        out.outcome("lessons run", &ran.to_string());
        ran
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::NullNarrator;

    #[test]
    fn test_catalog_is_in_solid_order() {
        let runner = LessonRunner::with_catalog(Arc::new(StrategyRegistry::with_builtin()));
        assert_eq!(runner.principles(), Principle::ALL.to_vec());
    }

    #[test]
    fn test_run_all_when_selection_empty() {
        let runner = LessonRunner::with_catalog(Arc::new(StrategyRegistry::with_builtin()));
        assert_eq!(runner.run(&[], &mut NullNarrator), 5);
    }

    #[test]
    fn test_run_selection_only() {
        let runner = LessonRunner::with_catalog(Arc::new(StrategyRegistry::with_builtin()));
        let ran = runner.run(
            &[Principle::LiskovSubstitution, Principle::OpenClosed],
            &mut NullNarrator,
        );
        assert_eq!(ran, 2);
    }
}
