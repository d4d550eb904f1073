//! External token fetching for Twist.
//!
//! This crate retrieves a single divisor/word token from a remote word
//! service and decodes it into an [`ExternalToken`]. It performs one
//! blocking request per call; there is no retry or cache.

pub mod config;
pub mod token;
pub mod url;

pub use config::FetchConfig;
pub use token::{TokenFetcher, parse_token};

use thiserror::Error;
use twist_eval::EvalError;

#[doc(no_inline)]
pub use twist_eval::ExternalToken;

/// Errors that can occur while fetching a token.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service unavailable (HTTP 503)")]
    ServiceUnavailable,

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed token: {0}")]
    Malformed(String),

    #[error(transparent)]
    Token(#[from] EvalError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl FetchError {
    /// Whether the service reported itself as temporarily unavailable.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, FetchError::ServiceUnavailable)
    }
}
