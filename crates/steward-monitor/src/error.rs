//! Error types for the rate limiting module.

use thiserror::Error;

/// Result type alias for limiter operations.
pub type Result<T> = std::result::Result<T, LimiterError>;

/// Errors a rate limiter can report when its ceiling is changed.
///
/// The store treats every variant as non-fatal: the ceiling is simply not
/// applied for that cycle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LimiterError {
    /// A ceiling of zero would reject every request.
    #[error("invalid rate limit: {0} (must be at least 1)")]
    InvalidLimit(u32),

    /// The limiter backend could not be reached.
    #[error("rate limiter unavailable: {0}")]
    Unavailable(String),
}
