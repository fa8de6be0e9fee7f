//! # receiptkit
//!
//! Locate the raw receipt that proves an in-app purchase, so a
//! verification pipeline can hand it to a local or remote validator.
//!
//! ## Overview
//!
//! Receipts live in one of two places:
//!
//! - **Transaction receipt**: older platform versions keep a receipt per
//!   transaction.
//! - **App receipt**: one receipt inside the installed bundle covering the
//!   whole purchase history.
//!
//! [`ReceiptResolver`] tries the transaction receipt first and falls back to
//! the app receipt. The result is the verbatim receipt bytes, or `None` when
//! no receipt is available right now. Read failures are never surfaced as
//! errors; they are logged through `tracing` and treated as "nothing here".
//!
//! ## Usage
//!
//! ```rust,no_run
//! use receiptkit::{ReceiptResolver, ResolverConfig};
//! use receiptkit::core::{BundleLayout, ReceiptEnvironment, TransactionId, TransactionRecord};
//!
//! let resolver = ReceiptResolver::from_config(ResolverConfig::for_bundle(
//!     "/path/to/My.app",
//!     BundleLayout::Ios,
//!     ReceiptEnvironment::Production,
//! ));
//!
//! let tx = TransactionRecord::new(TransactionId::new("1000000123").unwrap());
//! match resolver.resolve_receipt(&tx) {
//!     Some(receipt) => println!("receipt: {} bytes", receipt.len()),
//!     None => println!("no receipt yet; refresh and try again"),
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `receiptkit::core` - Transaction, ReceiptBytes, ReceiptLocation, layouts
//! - `receiptkit::store` - ReceiptSource and its implementations

pub mod config;
pub mod error;
pub mod resolver;

// Re-export component crates
pub use receiptkit_core as core;
pub use receiptkit_store as store;

pub use config::{BundleConfig, ResolverConfig};
pub use error::{ResolverError, Result};
pub use resolver::{resolve_receipt, ReceiptResolver, Resolution, Tier, TierOutcome};

// Re-export commonly used core types
pub use receiptkit_core::{
    ReceiptBytes, ReceiptLocation, Transaction, TransactionId, TransactionRecord,
};
