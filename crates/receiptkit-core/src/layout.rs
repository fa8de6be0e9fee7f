//! Where the app-level receipt lives inside an installed bundle.
//!
//! The platform stores one receipt per installed app. Its path depends on
//! the bundle structure and, on iOS-style bundles, on whether the build was
//! installed from the production store or a sandbox/TestFlight environment.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::ReceiptLocation;

/// Bundle structure of the installed application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleLayout {
    /// Flat bundle: `<bundle>/StoreKit/<name>`. iOS, iPadOS, tvOS, watchOS.
    Ios,
    /// Deep bundle: `<bundle>/Contents/_MASReceipt/receipt`.
    MacOs,
}

/// Store environment the app was installed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptEnvironment {
    #[default]
    Production,
    Sandbox,
}

impl BundleLayout {
    /// Receipt file name for this layout and environment.
    pub fn receipt_file_name(self, env: ReceiptEnvironment) -> &'static str {
        match (self, env) {
            (BundleLayout::Ios, ReceiptEnvironment::Sandbox) => "sandboxReceipt",
            _ => "receipt",
        }
    }

    /// Directory (relative to the bundle root) holding the receipt.
    pub fn receipt_dir(self) -> &'static Path {
        match self {
            BundleLayout::Ios => Path::new("StoreKit"),
            BundleLayout::MacOs => Path::new("Contents/_MASReceipt"),
        }
    }

    /// Full app-level receipt location for a bundle installed at `bundle_root`.
    pub fn app_receipt_location(
        self,
        bundle_root: impl AsRef<Path>,
        env: ReceiptEnvironment,
    ) -> ReceiptLocation {
        ReceiptLocation::new(
            bundle_root
                .as_ref()
                .join(self.receipt_dir())
                .join(self.receipt_file_name(env)),
        )
    }
}
