//! # receiptkit Core
//!
//! Pure primitives for receipt resolution: transaction handles, receipt
//! bytes, and receipt locations.
//!
//! This crate performs no I/O. It only describes *what* a receipt is and
//! *where* one may live; reading happens in `receiptkit-store`.
//!
//! ## Key Types
//!
//! - [`Transaction`] - Read-only capability exposed by a platform transaction
//! - [`TransactionId`] - Opaque transaction identifier
//! - [`ReceiptBytes`] - Verbatim, non-empty receipt payload
//! - [`ReceiptLocation`] - Where a receipt file is stored
//! - [`BundleLayout`] - Where the app-level receipt lives inside a bundle

pub mod error;
pub mod layout;
pub mod transaction;
pub mod types;

pub use error::CoreError;
pub use layout::{BundleLayout, ReceiptEnvironment};
pub use transaction::{Transaction, TransactionRecord};
pub use types::{ReceiptBytes, ReceiptLocation, TransactionId};
