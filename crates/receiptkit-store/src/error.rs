//! Error types for the store module.

use std::io;

use receiptkit_core::ReceiptLocation;
use thiserror::Error;

/// Errors that can occur while reading a receipt location.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The location exists but could not be read.
    #[error("failed to read receipt at {location}: {source}")]
    Io {
        location: ReceiptLocation,
        #[source]
        source: io::Error,
    },

    /// An internal lock was poisoned by a panicking writer.
    #[error("receipt source lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub fn io(location: &ReceiptLocation, source: io::Error) -> Self {
        Self::Io {
            location: location.clone(),
            source,
        }
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
