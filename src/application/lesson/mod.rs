//! The five principle demonstrations and the runner that sequences them.
//!
//! Each lesson implements [`Lesson`](crate::port::Lesson) and runs a
//! violating ("bad") scenario followed by a conforming ("good") one:
//!
//! - [`srp`]: Single Responsibility
//! - [`ocp`]: Open/Closed, built on the discount registry
//! - [`lsp`]: Liskov Substitution
//! - [`isp`]: Interface Segregation
//! - [`dip`]: Dependency Inversion
//!
//! Use [`runner::catalog`] to get all lessons and [`LessonRunner`] to run a
//! selection of them.

pub mod dip;
pub mod error;
pub mod isp;
pub mod lsp;
pub mod ocp;
pub mod runner;
pub mod srp;

pub use error::LessonError;
pub use runner::{catalog, LessonRunner};
