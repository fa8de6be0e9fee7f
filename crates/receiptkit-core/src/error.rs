//! Error types for receiptkit core.

use thiserror::Error;

/// Errors that can occur while building core values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unsupported receipt URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("invalid receipt URL: {0}")]
    InvalidUrl(String),

    #[error("receipt URL host is not local: {0}")]
    NonLocalHost(String),

    #[error("receipt URL has an empty path")]
    EmptyPath,

    #[error("transaction identifier must not be empty")]
    EmptyTransactionId,
}
