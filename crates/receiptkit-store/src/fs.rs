//! Filesystem implementation of the ReceiptSource trait.
//!
//! This is the primary source: receipts are small files written by the
//! platform into the app bundle or alongside legacy transactions.

use std::io;

use bytes::Bytes;
use receiptkit_core::ReceiptLocation;

use crate::error::{Result, StoreError};
use crate::traits::ReceiptSource;

/// Reads receipts from the local filesystem.
///
/// Stateless; every call opens, reads and closes the file. Blocking.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReceiptSource;

impl FsReceiptSource {
    pub fn new() -> Self {
        Self
    }
}

impl ReceiptSource for FsReceiptSource {
    fn read_receipt(&self, location: &ReceiptLocation) -> Result<Option<Bytes>> {
        match std::fs::read(location.path()) {
            Ok(content) => {
                tracing::trace!(%location, len = content.len(), "read receipt file");
                Ok(Some(Bytes::from(content)))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::trace!(%location, "no receipt file");
                Ok(None)
            }
            Err(e) => Err(StoreError::io(location, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn location(dir: &TempDir, name: &str) -> ReceiptLocation {
        ReceiptLocation::new(dir.path().join(name))
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let result = FsReceiptSource::new()
            .read_receipt(&location(&dir, "receipt"))
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_missing_parent_dir_is_none() {
        let dir = TempDir::new().unwrap();
        let loc = ReceiptLocation::new(dir.path().join("StoreKit").join("receipt"));
        assert!(FsReceiptSource::new().read_receipt(&loc).unwrap().is_none());
    }

    #[test]
    fn test_reads_verbatim() {
        let dir = TempDir::new().unwrap();
        let loc = location(&dir, "receipt");
        let content: Vec<u8> = (0u8..=255).collect();
        std::fs::write(loc.path(), &content).unwrap();

        let bytes = FsReceiptSource::new().read_receipt(&loc).unwrap().unwrap();
        assert_eq!(bytes.as_ref(), content.as_slice());
    }

    #[test]
    fn test_empty_file_is_some_empty() {
        let dir = TempDir::new().unwrap();
        let loc = location(&dir, "receipt");
        std::fs::write(loc.path(), b"").unwrap();

        let bytes = FsReceiptSource::new().read_receipt(&loc).unwrap().unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_directory_is_read_error() {
        let dir = TempDir::new().unwrap();
        let loc = location(&dir, "receipt");
        std::fs::create_dir(loc.path()).unwrap();

        let err = FsReceiptSource::new().read_receipt(&loc).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert!(err.to_string().contains("receipt"));
    }

    #[test]
    fn test_read_does_not_modify_file() {
        let dir = TempDir::new().unwrap();
        let loc = location(&dir, "receipt");
        std::fs::write(loc.path(), b"abc").unwrap();

        let source = FsReceiptSource::new();
        let first = source.read_receipt(&loc).unwrap();
        let second = source.read_receipt(&loc).unwrap();
        assert_eq!(first, second);
        assert_eq!(std::fs::read(loc.path()).unwrap(), b"abc");
    }
}
