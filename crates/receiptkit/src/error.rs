//! Error types for receiptkit.
//!
//! Resolution itself never fails: absence is its only negative outcome.
//! These errors come from setting a resolver up.

use receiptkit_core::CoreError;
use thiserror::Error;

/// Errors that can occur while configuring a resolver.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// Configuration could not be decoded.
    #[error("invalid resolver config: {0}")]
    Config(#[from] serde_json::Error),

    /// A core value (location, identifier) was malformed.
    #[error("invalid value: {0}")]
    Core(#[from] CoreError),
}

/// Result type for receiptkit setup operations.
pub type Result<T> = std::result::Result<T, ResolverError>;
