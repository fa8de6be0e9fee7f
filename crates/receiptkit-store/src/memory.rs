//! In-memory implementation of the ReceiptSource trait.
//!
//! This is primarily for testing. It has the same semantics as the
//! filesystem source but keeps everything in memory, and can simulate
//! locations that exist but cannot be read.

use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use bytes::Bytes;
use receiptkit_core::ReceiptLocation;

use crate::error::{Result, StoreError};
use crate::traits::ReceiptSource;

/// In-memory receipt source.
///
/// Thread-safe via RwLock. Counts reads so tests can assert which
/// locations the resolver actually touched. Setup helpers panic on a
/// poisoned lock; `read_receipt` reports it as `StoreError::Poisoned`.
#[derive(Default)]
pub struct MemoryReceiptSource {
    entries: RwLock<HashMap<ReceiptLocation, Entry>>,
    reads: RwLock<HashMap<ReceiptLocation, usize>>,
    total_reads: AtomicUsize,
}

#[derive(Clone)]
enum Entry {
    Content(Bytes),
    Unreadable(io::ErrorKind),
}

impl MemoryReceiptSource {
    /// Create a new empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `content` at `location`, replacing anything already there.
    pub fn insert(&self, location: impl Into<ReceiptLocation>, content: impl Into<Bytes>) {
        let mut entries = self.entries.write().expect("memory source lock poisoned");
        entries.insert(location.into(), Entry::Content(content.into()));
    }

    /// Make `location` exist but fail every read with `kind`.
    pub fn insert_unreadable(&self, location: impl Into<ReceiptLocation>, kind: io::ErrorKind) {
        let mut entries = self.entries.write().expect("memory source lock poisoned");
        entries.insert(location.into(), Entry::Unreadable(kind));
    }

    /// Remove whatever is stored at `location`.
    pub fn remove(&self, location: &ReceiptLocation) {
        let mut entries = self.entries.write().expect("memory source lock poisoned");
        entries.remove(location);
    }

    /// Number of reads issued for `location`.
    pub fn reads_of(&self, location: &ReceiptLocation) -> usize {
        let reads = self.reads.read().expect("memory source lock poisoned");
        reads.get(location).copied().unwrap_or(0)
    }

    /// Number of reads issued across all locations.
    pub fn total_reads(&self) -> usize {
        self.total_reads.load(Ordering::Relaxed)
    }

    fn record_read(&self, location: &ReceiptLocation) -> Result<()> {
        self.total_reads.fetch_add(1, Ordering::Relaxed);
        let mut reads = self.reads.write().map_err(|_| StoreError::Poisoned)?;
        *reads.entry(location.clone()).or_insert(0) += 1;
        Ok(())
    }
}

impl ReceiptSource for MemoryReceiptSource {
    fn read_receipt(&self, location: &ReceiptLocation) -> Result<Option<Bytes>> {
        self.record_read(location)?;

        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        match entries.get(location) {
            Some(Entry::Content(bytes)) => Ok(Some(bytes.clone())),
            Some(Entry::Unreadable(kind)) => Err(StoreError::io(
                location,
                io::Error::new(*kind, "simulated read failure"),
            )),
            None => Ok(None),
        }
    }
}
