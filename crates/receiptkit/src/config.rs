//! Resolver configuration.

use std::path::PathBuf;

use receiptkit_core::{BundleLayout, ReceiptEnvironment, ReceiptLocation};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Where the installed application bundle lives and how it is laid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleConfig {
    pub root: PathBuf,
    pub layout: BundleLayout,
    #[serde(default)]
    pub environment: ReceiptEnvironment,
}

/// Configuration for the [`ReceiptResolver`](crate::ReceiptResolver).
///
/// The app-level receipt location is taken from `app_receipt` when set,
/// otherwise derived from `bundle`. With neither, the app-level tier is
/// skipped, as on a platform that reports no receipt URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Explicit app-level receipt location.
    pub app_receipt: Option<ReceiptLocation>,
    /// Installed bundle, used when `app_receipt` is not set.
    pub bundle: Option<BundleConfig>,
    /// Whether to try the transaction's legacy receipt location first.
    /// Turn off for platform versions that no longer keep per-transaction
    /// receipts.
    pub consult_transaction_receipt: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            app_receipt: None,
            bundle: None,
            consult_transaction_receipt: true,
        }
    }
}

impl ResolverConfig {
    /// Resolve the app-level receipt inside an installed bundle.
    pub fn for_bundle(
        root: impl Into<PathBuf>,
        layout: BundleLayout,
        environment: ReceiptEnvironment,
    ) -> Self {
        Self {
            bundle: Some(BundleConfig {
                root: root.into(),
                layout,
                environment,
            }),
            ..Self::default()
        }
    }

    /// Use an explicit app-level receipt location.
    pub fn with_app_receipt(location: impl Into<ReceiptLocation>) -> Self {
        Self {
            app_receipt: Some(location.into()),
            ..Self::default()
        }
    }

    /// Use an app-level receipt given as a `file://` URL.
    pub fn with_app_receipt_url(url: &str) -> Result<Self> {
        Ok(Self::with_app_receipt(ReceiptLocation::from_file_url(url)?))
    }

    /// Decode a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Skip the per-transaction legacy tier.
    pub fn without_transaction_receipts(mut self) -> Self {
        self.consult_transaction_receipt = false;
        self
    }

    /// The effective app-level receipt location, if any.
    pub fn app_receipt_location(&self) -> Option<ReceiptLocation> {
        if let Some(location) = &self.app_receipt {
            return Some(location.clone());
        }
        self.bundle
            .as_ref()
            .map(|b| b.layout.app_receipt_location(&b.root, b.environment))
    }
}
