//! Application services (use cases).
//!
//! - [`discount`]: discount strategies and the category registry
//! - [`lesson`]: the five principle demonstrations and their runner

pub mod discount;
pub mod lesson;
