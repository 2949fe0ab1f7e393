//! Error Types
//!
//! One error enum for every Task Service interaction. `NotFound` is the only
//! variant the client recovers from (create-user-then-retry); everything else
//! is surfaced to the view and logged.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The requested resource does not exist (HTTP 404).
    #[error("resource not found")]
    NotFound,
    /// Any other non-2xx response.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The request never completed (fetch-level failure).
    #[error("network error: {0}")]
    Network(String),
    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
}
