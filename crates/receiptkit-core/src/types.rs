//! Strong type definitions for receiptkit.
//!
//! Identifiers and payloads are newtypes so a transaction id can never be
//! confused with a path, and so an empty receipt cannot be constructed.

use std::fmt;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::CoreError;

/// Opaque identifier of a platform transaction.
///
/// Only used for correlation in diagnostics; its format is owned by the
/// platform purchase queue.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TransactionId(String);

impl TransactionId {
    /// Create a transaction id. Empty identifiers are rejected.
    pub fn new(id: impl Into<String>) -> Result<Self, CoreError> {
        let id = id.into();
        if id.is_empty() {
            return Err(CoreError::EmptyTransactionId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TransactionId {
    type Error = CoreError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<TransactionId> for String {
    fn from(id: TransactionId) -> Self {
        id.0
    }
}

impl fmt::Debug for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransactionId({})", self.0)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A raw receipt payload exactly as stored on disk.
///
/// Always non-empty. The content is never interpreted: no parsing, no
/// re-encoding. Cloning is cheap (reference counted).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ReceiptBytes(Bytes);

impl ReceiptBytes {
    /// Wrap a payload. Returns `None` for a zero-length buffer, so absence
    /// and "empty receipt" can never be confused.
    pub fn new(bytes: impl Into<Bytes>) -> Option<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            None
        } else {
            Some(Self(bytes))
        }
    }

    /// Number of bytes in the payload (always > 0).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with byte containers.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Give up the wrapper and return the underlying buffer.
    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Standard base64 of the payload, the form remote validators accept
    /// in request bodies.
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.0)
    }

    /// Short Blake3 digest (16 hex chars) for correlating receipts in logs
    /// without leaking their content.
    pub fn fingerprint(&self) -> String {
        let hash = blake3::hash(&self.0);
        hex::encode(&hash.as_bytes()[..8])
    }
}

impl fmt::Debug for ReceiptBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReceiptBytes")
            .field("len", &self.len())
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}

impl AsRef<[u8]> for ReceiptBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<ReceiptBytes> for Bytes {
    fn from(receipt: ReceiptBytes) -> Self {
        receipt.0
    }
}

impl From<ReceiptBytes> for Vec<u8> {
    fn from(receipt: ReceiptBytes) -> Self {
        receipt.0.to_vec()
    }
}

/// Location of a receipt file on local storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptLocation(PathBuf);

impl ReceiptLocation {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Build a location from a `file://` URL as handed out by the platform.
    ///
    /// Only local URLs are accepted: the host must be empty or `localhost`.
    /// Percent escapes are decoded byte for byte. Query and fragment are
    /// not part of the path.
    pub fn from_file_url(url: &str) -> Result<Self, CoreError> {
        let parsed = Url::parse(url).map_err(|e| CoreError::InvalidUrl(e.to_string()))?;
        if parsed.scheme() != "file" {
            return Err(CoreError::UnsupportedScheme(parsed.scheme().to_string()));
        }
        if parsed.path().is_empty() || parsed.path() == "/" {
            return Err(CoreError::EmptyPath);
        }

        let path = parsed.to_file_path().map_err(|()| {
            CoreError::NonLocalHost(parsed.host_str().unwrap_or_default().to_string())
        })?;
        Ok(Self(path))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ReceiptLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl AsRef<Path> for ReceiptLocation {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<PathBuf> for ReceiptLocation {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&Path> for ReceiptLocation {
    fn from(path: &Path) -> Self {
        Self(path.to_path_buf())
    }
}
