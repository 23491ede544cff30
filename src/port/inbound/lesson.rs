//! Lesson port.
//!
//! A lesson demonstrates one principle by running a "bad" scenario followed
//! by a "good" one, writing everything it does to a
//! [`Narrator`](crate::port::outbound::narrator::Narrator).

use crate::domain::Principle;
use crate::port::outbound::narrator::Narrator;

/// A runnable demonstration of one SOLID principle.
pub trait Lesson {
    /// The principle this lesson demonstrates.
    fn principle(&self) -> Principle;

    /// Run the lesson, writing all output to `out`.
    ///
    /// Lessons never fail: errors raised by the example types are part of
    /// the demonstration and are reported through `out`.
    fn run(&self, out: &mut dyn Narrator);
}
