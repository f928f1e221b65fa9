//! API Error Taxonomy
//!
//! Every failure is terminal for the operation that raised it; nothing is
//! retried. Page components catch these at the boundary and turn them into
//! a visible error state, leaving previously rendered content alone.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure, timeout, or a non-success HTTP status.
    #[error("network error: {0}")]
    Network(String),

    /// Response arrived but the expected envelope fields are missing.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Detail response lacks the required fields. The API does not
    /// distinguish "no such career" from a bad body, so neither do we.
    #[error("career not found")]
    NotFound,

    /// Missing or unparseable `id` query parameter on the detail page.
    #[error("invalid career id: {0:?}")]
    InvalidInput(String),
}
