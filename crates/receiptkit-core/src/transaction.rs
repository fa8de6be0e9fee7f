//! The read-only view of a platform transaction.
//!
//! The purchase queue owns transactions and their lifecycle. Receipt
//! resolution only ever needs two things from one: something to correlate
//! it by, and the legacy receipt location if the platform kept one.

use serde::{Deserialize, Serialize};

use crate::types::{ReceiptLocation, TransactionId};

/// Capability exposed by a completed transaction.
///
/// Implement this for the host's transaction handle. Implementations must be
/// side-effect free: resolution may call these methods any number of times.
pub trait Transaction {
    /// Opaque identifier assigned by the platform.
    fn id(&self) -> &TransactionId;

    /// Legacy per-transaction receipt location, when the platform version
    /// still provides one.
    fn receipt_location(&self) -> Option<ReceiptLocation>;
}

impl<T: Transaction + ?Sized> Transaction for &T {
    fn id(&self) -> &TransactionId {
        (**self).id()
    }

    fn receipt_location(&self) -> Option<ReceiptLocation> {
        (**self).receipt_location()
    }
}

impl<T: Transaction + ?Sized> Transaction for Box<T> {
    fn id(&self) -> &TransactionId {
        (**self).id()
    }

    fn receipt_location(&self) -> Option<ReceiptLocation> {
        (**self).receipt_location()
    }
}

impl<T: Transaction + ?Sized> Transaction for std::sync::Arc<T> {
    fn id(&self) -> &TransactionId {
        (**self).id()
    }

    fn receipt_location(&self) -> Option<ReceiptLocation> {
        (**self).receipt_location()
    }
}

/// A plain transaction snapshot, for hosts that already extracted the two
/// values from the platform handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: TransactionId,
    pub receipt_location: Option<ReceiptLocation>,
}

impl TransactionRecord {
    /// A transaction with no legacy receipt.
    pub fn new(id: TransactionId) -> Self {
        Self {
            id,
            receipt_location: None,
        }
    }

    /// Attach a legacy receipt location.
    pub fn with_receipt_location(mut self, location: impl Into<ReceiptLocation>) -> Self {
        self.receipt_location = Some(location.into());
        self
    }
}

impl Transaction for TransactionRecord {
    fn id(&self) -> &TransactionId {
        &self.id
    }

    fn receipt_location(&self) -> Option<ReceiptLocation> {
        self.receipt_location.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;

    fn record() -> TransactionRecord {
        TransactionRecord::new(TransactionId::new("tx-1").unwrap())
    }

    #[test]
    fn test_record_without_location() {
        let tx = record();
        assert_eq!(tx.id().as_str(), "tx-1");
        assert!(tx.receipt_location().is_none());
    }

    #[test]
    fn test_record_with_location() {
        let tx = record().with_receipt_location(PathBuf::from("/tmp/tx-1.receipt"));
        assert_eq!(
            tx.receipt_location().unwrap().path(),
            Path::new("/tmp/tx-1.receipt")
        );
    }

    #[test]
    fn test_trait_objects_forward() {
        let boxed: Box<dyn Transaction> = Box::new(record());
        assert_eq!(boxed.id().as_str(), "tx-1");

        let by_ref: &dyn Transaction = &*boxed;
        assert!(by_ref.receipt_location().is_none());
    }
}
