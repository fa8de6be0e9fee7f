//! Test fixtures and helpers.
//!
//! A [`BundleFixture`] is a temporary directory laid out like an installed
//! app bundle. Receipts are written where the platform would write them.

use std::io;
use std::path::Path;

use receiptkit::{ReceiptResolver, ResolverConfig};
use receiptkit_core::{
    BundleLayout, ReceiptEnvironment, ReceiptLocation, TransactionId, TransactionRecord,
};
use tempfile::TempDir;

/// What a fixture puts at a receipt location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stored {
    /// Nothing at the location.
    Missing,
    /// A zero-byte file.
    Empty,
    /// Something that exists but cannot be read as a file (a directory).
    Unreadable,
    /// A receipt file with this content.
    Content(Vec<u8>),
}

impl Stored {
    /// The receipt this setup yields, if any.
    pub fn receipt(&self) -> Option<&[u8]> {
        match self {
            Stored::Content(bytes) if !bytes.is_empty() => Some(bytes),
            _ => None,
        }
    }
}

/// A temporary app bundle. Deleted on drop.
pub struct BundleFixture {
    dir: TempDir,
    layout: BundleLayout,
    environment: ReceiptEnvironment,
}

impl BundleFixture {
    /// An iOS-style production bundle.
    pub fn new() -> io::Result<Self> {
        Self::with_layout(BundleLayout::Ios, ReceiptEnvironment::Production)
    }

    pub fn with_layout(layout: BundleLayout, environment: ReceiptEnvironment) -> io::Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
            layout,
            environment,
        })
    }

    /// Bundle root directory.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn app_receipt_location(&self) -> ReceiptLocation {
        self.layout.app_receipt_location(self.root(), self.environment)
    }

    /// Where a legacy receipt for `id` is kept.
    pub fn transaction_receipt_location(&self, id: &str) -> ReceiptLocation {
        ReceiptLocation::new(self.root().join("Transactions").join(format!("{id}.receipt")))
    }

    /// Config pointing at this bundle.
    pub fn config(&self) -> ResolverConfig {
        ResolverConfig::for_bundle(self.root(), self.layout, self.environment)
    }

    /// Filesystem resolver pointing at this bundle.
    pub fn resolver(&self) -> ReceiptResolver {
        ReceiptResolver::from_config(self.config())
    }

    pub fn write_app_receipt(&self, content: &[u8]) -> io::Result<ReceiptLocation> {
        let location = self.app_receipt_location();
        place(location.path(), &Stored::Content(content.to_vec()))?;
        Ok(location)
    }

    pub fn remove_app_receipt(&self) -> io::Result<()> {
        place(self.app_receipt_location().path(), &Stored::Missing)
    }

    /// Put `stored` at the app-level receipt location.
    pub fn set_app_receipt(&self, stored: &Stored) -> io::Result<()> {
        place(self.app_receipt_location().path(), stored)
    }

    /// A transaction the platform reports no legacy receipt for.
    pub fn transaction_without_receipt(&self, id: &str) -> TransactionRecord {
        TransactionRecord::new(transaction_id(id))
    }

    /// A transaction with a legacy receipt location holding `stored`.
    pub fn transaction_with(&self, id: &str, stored: &Stored) -> io::Result<TransactionRecord> {
        let location = self.transaction_receipt_location(id);
        place(location.path(), stored)?;
        Ok(TransactionRecord::new(transaction_id(id)).with_receipt_location(location))
    }

    /// A transaction with a readable legacy receipt.
    pub fn write_transaction_receipt(
        &self,
        id: &str,
        content: &[u8],
    ) -> io::Result<TransactionRecord> {
        self.transaction_with(id, &Stored::Content(content.to_vec()))
    }
}

/// Replace whatever is at `path` with `stored`.
fn place(path: &Path, stored: &Stored) -> io::Result<()> {
    clear(path)?;
    match stored {
        Stored::Missing => Ok(()),
        Stored::Empty => write_file(path, &[]),
        Stored::Unreadable => std::fs::create_dir_all(path),
        Stored::Content(bytes) => write_file(path, bytes),
    }
}

fn write_file(path: &Path, content: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}

fn clear(path: &Path) -> io::Result<()> {
    match std::fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => std::fs::remove_dir_all(path),
        Ok(_) => std::fs::remove_file(path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

fn transaction_id(id: &str) -> TransactionId {
    TransactionId::new(id).expect("fixture transaction ids must be non-empty")
}

/// Whether anything is stored at `location`.
pub fn exists(location: &ReceiptLocation) -> bool {
    location.path().exists()
}
