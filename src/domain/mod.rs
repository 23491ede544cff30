//! Core domain types shared by the registry, the lessons and the CLI.
//!
//! - [`category`]: normalized discount category keys
//! - [`quote`]: the named result of a registry lookup
//! - [`principle`]: the five SOLID principles
//! - [`narration`]: lines of lesson output
//! - [`error`]: domain-level errors

pub mod category;
pub mod error;
pub mod narration;
pub mod principle;
pub mod quote;

pub use category::CategoryKey;
pub use error::DomainError;
pub use narration::Narration;
pub use principle::Principle;
pub use quote::DiscountQuote;
