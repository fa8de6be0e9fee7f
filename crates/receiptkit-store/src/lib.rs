//! # receiptkit Store
//!
//! Read-only storage abstraction for receipts. Provides a trait-based
//! interface so the resolver does not care whether receipts come from the
//! real filesystem or from memory.
//!
//! ## Key Types
//!
//! - [`ReceiptSource`] - The trait for reading a receipt at a location
//! - [`FsReceiptSource`] - Reads receipt files from local storage
//! - [`MemoryReceiptSource`] - In-memory source for tests
//!
//! ## Usage
//!
//! ```rust,no_run
//! use receiptkit_core::ReceiptLocation;
//! use receiptkit_store::{FsReceiptSource, ReceiptSource};
//!
//! let source = FsReceiptSource::new();
//! let location = ReceiptLocation::new("/path/to/My.app/StoreKit/receipt");
//!
//! match source.read_receipt(&location) {
//!     Ok(Some(bytes)) => println!("{} bytes", bytes.len()),
//!     Ok(None) => println!("no receipt"),
//!     Err(e) => println!("unreadable: {e}"),
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Read-only**: no source ever writes, moves or deletes a receipt
//! - **Missing is not an error**: a location with nothing at it is `Ok(None)`
//! - **Verbatim**: bytes are returned exactly as stored, including zero-length
//!   content (deciding what an empty file means is the resolver's job)

pub mod error;
pub mod fs;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use fs::FsReceiptSource;
pub use memory::MemoryReceiptSource;
pub use traits::ReceiptSource;
