//! CLI module graph.

pub mod banner;
pub mod command;
pub mod config;
pub mod discount;
pub mod lesson;
pub mod operator;
pub mod run;
