//! Infrastructure configuration modules.

pub mod discount;
pub mod logging;
pub mod runner;
pub mod settings;
