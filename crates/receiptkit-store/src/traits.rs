//! ReceiptSource trait: the abstract interface for reading receipts.
//!
//! Implementations include the local filesystem (primary) and in-memory
//! (for tests).

use std::sync::Arc;

use bytes::Bytes;
use receiptkit_core::ReceiptLocation;

use crate::error::Result;

/// Read-only access to receipt storage.
///
/// # Contract
///
/// - `Ok(Some(bytes))`: the location holds `bytes`, verbatim (possibly empty).
/// - `Ok(None)`: nothing is stored at the location.
/// - `Err(_)`: something is there but it could not be read.
///
/// Implementations must not mutate storage and must be safe to call
/// concurrently from any number of threads.
pub trait ReceiptSource: Send + Sync {
    /// Read the full content stored at `location`.
    fn read_receipt(&self, location: &ReceiptLocation) -> Result<Option<Bytes>>;
}

impl<S: ReceiptSource + ?Sized> ReceiptSource for &S {
    fn read_receipt(&self, location: &ReceiptLocation) -> Result<Option<Bytes>> {
        (**self).read_receipt(location)
    }
}

impl<S: ReceiptSource + ?Sized> ReceiptSource for Arc<S> {
    fn read_receipt(&self, location: &ReceiptLocation) -> Result<Option<Bytes>> {
        (**self).read_receipt(location)
    }
}

impl<S: ReceiptSource + ?Sized> ReceiptSource for Box<S> {
    fn read_receipt(&self, location: &ReceiptLocation) -> Result<Option<Bytes>> {
        (**self).read_receipt(location)
    }
}
