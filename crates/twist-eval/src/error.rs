//! Evaluation errors.

use thiserror::Error;

/// Errors raised while building token sets or reading numeric input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("invalid token set: {0}")]
    InvalidTokenSet(String),

    #[error("number out of range: {0}")]
    Overflow(String),

    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
}
