//! Errors raised by the example types inside lessons.
//!
//! These are part of what the lessons demonstrate; the runner reports them
//! as narration instead of propagating them.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LessonError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{subject} cannot {action}")]
    Unsupported {
        subject: &'static str,
        action: &'static str,
    },
}
