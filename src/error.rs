//! Error types for sentence generation.
//!
//! All generation operations return [`Result<T>`] which uses [`GenerateError`]
//! as the error type. Scoring has no error type at all: it is total over its
//! input domain.

use thiserror::Error;

/// Errors that can occur when generating a practice sentence.
///
/// Only [`GenerateError::NotConfigured`] ever reaches the caller of
/// [`SentenceGenerator`](crate::generator::SentenceGenerator); every other
/// variant is absorbed by the fallback catalog path.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The HTTP request to the generation endpoint failed.
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// Authentication with the generation endpoint was rejected (HTTP 401/403).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The generator has not been configured (missing project id or
    /// access token). This is the one hard error: it is surfaced to the
    /// caller instead of degrading to the fallback catalog.
    #[error("generator not configured: {0}")]
    NotConfigured(String),

    /// The endpoint returned a response that could not be used as a sentence.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// An HTTP-level error from reqwest.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

/// A convenience type alias for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;
