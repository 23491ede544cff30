//! Domain-level errors.

use thiserror::Error;

/// Errors raised by domain types when an invariant would be broken.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("discount category must not be empty")]
    EmptyCategory,

    #[error("unknown principle '{0}'")]
    UnknownPrinciple(String),
}
