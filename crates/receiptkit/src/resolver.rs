//! The ReceiptResolver: finds the receipt that proves a transaction.
//!
//! Resolution is a two-tier lookup, first success wins:
//!
//! 1. the transaction's own legacy receipt location, if it has one;
//! 2. the single app-level receipt inside the installed bundle.
//!
//! Every tier produces a tagged [`TierOutcome`]. The public contract
//! ([`ReceiptResolver::resolve_receipt`]) collapses those to
//! bytes-or-nothing; [`ReceiptResolver::resolve_detailed`] keeps them.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use receiptkit_core::{ReceiptBytes, ReceiptLocation, Transaction, TransactionId};
use receiptkit_store::{FsReceiptSource, ReceiptSource, StoreError};

use crate::config::ResolverConfig;

/// One step of the lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Legacy per-transaction receipt.
    Transaction,
    /// App-level receipt in the installed bundle.
    App,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Transaction => f.write_str("transaction"),
            Tier::App => f.write_str("app"),
        }
    }
}

/// What a single tier produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TierOutcome {
    /// A non-empty receipt.
    Found(ReceiptBytes),
    /// No location known for this tier, or nothing stored there.
    NotFound,
    /// The location exists but holds zero bytes.
    Empty,
    /// The location exists but could not be read.
    ReadError(String),
}

impl TierOutcome {
    /// Whether this tier produced a receipt.
    pub fn is_found(&self) -> bool {
        matches!(self, TierOutcome::Found(_))
    }

    /// The receipt, if this tier found one.
    pub fn receipt(&self) -> Option<&ReceiptBytes> {
        match self {
            TierOutcome::Found(receipt) => Some(receipt),
            _ => None,
        }
    }

    /// Consume the outcome, keeping only a found receipt.
    pub fn into_receipt(self) -> Option<ReceiptBytes> {
        match self {
            TierOutcome::Found(receipt) => Some(receipt),
            _ => None,
        }
    }

    fn from_read(read: Result<Option<Bytes>, StoreError>) -> Self {
        match read {
            Ok(Some(bytes)) => match ReceiptBytes::new(bytes) {
                Some(receipt) => TierOutcome::Found(receipt),
                None => TierOutcome::Empty,
            },
            Ok(None) => TierOutcome::NotFound,
            Err(e) => TierOutcome::ReadError(e.to_string()),
        }
    }
}

/// Every tier attempted for one transaction, in order.
///
/// A tier that was switched off by configuration, or that was never reached
/// because an earlier tier found a receipt, does not appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    attempts: Vec<(Tier, TierOutcome)>,
}

impl Resolution {
    /// Tiers attempted, in lookup order.
    pub fn attempts(&self) -> &[(Tier, TierOutcome)] {
        &self.attempts
    }

    /// Outcome of `tier`, if it was attempted.
    pub fn outcome(&self, tier: Tier) -> Option<&TierOutcome> {
        self.attempts
            .iter()
            .find(|(t, _)| *t == tier)
            .map(|(_, outcome)| outcome)
    }

    /// The tier that supplied the receipt.
    pub fn source(&self) -> Option<Tier> {
        self.attempts
            .iter()
            .find(|(_, outcome)| outcome.is_found())
            .map(|(tier, _)| *tier)
    }

    /// The resolved receipt, borrowed.
    pub fn receipt(&self) -> Option<&ReceiptBytes> {
        self.attempts.iter().find_map(|(_, outcome)| outcome.receipt())
    }

    /// Collapse to the external contract: bytes or nothing.
    pub fn into_receipt(self) -> Option<ReceiptBytes> {
        self.attempts
            .into_iter()
            .find_map(|(_, outcome)| outcome.into_receipt())
    }

    /// True when no tier supplied a receipt.
    pub fn is_absent(&self) -> bool {
        self.source().is_none()
    }
}

/// Resolves the receipt bytes for a completed transaction.
///
/// Holds no mutable state; every call reads storage afresh, so concurrent
/// calls from any number of threads are independent. Calls block on
/// storage reads; see [`ReceiptResolver::resolve_receipt_blocking`] for
/// async contexts.
#[derive(Debug, Clone)]
pub struct ReceiptResolver<S = FsReceiptSource> {
    source: S,
    app_receipt: Option<ReceiptLocation>,
    consult_transaction_receipt: bool,
}

impl ReceiptResolver<FsReceiptSource> {
    /// A resolver reading from the local filesystem.
    pub fn from_config(config: ResolverConfig) -> Self {
        Self::new(FsReceiptSource::new(), config)
    }
}

impl<S: ReceiptSource> ReceiptResolver<S> {
    /// Create a resolver over `source`.
    pub fn new(source: S, config: ResolverConfig) -> Self {
        Self {
            app_receipt: config.app_receipt_location(),
            consult_transaction_receipt: config.consult_transaction_receipt,
            source,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Where the app-level receipt is looked up, if anywhere.
    pub fn app_receipt_location(&self) -> Option<&ReceiptLocation> {
        self.app_receipt.as_ref()
    }

    /// Return the receipt currently available for `transaction`, or `None`.
    ///
    /// `None` means no receipt is available right now; it is not retried
    /// here. Callers wanting a fresh receipt must refresh it and call again.
    pub fn resolve_receipt<T: Transaction + ?Sized>(&self, transaction: &T) -> Option<ReceiptBytes> {
        self.resolve_detailed(transaction).into_receipt()
    }

    /// Like [`resolve_receipt`](Self::resolve_receipt), keeping the outcome
    /// of every tier.
    pub fn resolve_detailed<T: Transaction + ?Sized>(&self, transaction: &T) -> Resolution {
        let id = transaction.id();
        let mut attempts = Vec::with_capacity(2);

        if self.consult_transaction_receipt {
            let outcome = match transaction.receipt_location() {
                Some(location) => self.read_tier(&location),
                None => TierOutcome::NotFound,
            };
            log_outcome(Some(id), Tier::Transaction, &outcome);

            let found = outcome.is_found();
            attempts.push((Tier::Transaction, outcome));
            if found {
                return Resolution { attempts };
            }
        }

        let outcome = self.app_tier();
        log_outcome(Some(id), Tier::App, &outcome);
        attempts.push((Tier::App, outcome));

        let resolution = Resolution { attempts };
        if resolution.is_absent() {
            tracing::debug!(transaction = %id, "no receipt available");
        }
        resolution
    }

    /// The app-level receipt alone, for callers holding no transaction.
    pub fn app_receipt(&self) -> Option<ReceiptBytes> {
        let outcome = self.app_tier();
        log_outcome(None, Tier::App, &outcome);
        outcome.into_receipt()
    }

    fn app_tier(&self) -> TierOutcome {
        match &self.app_receipt {
            Some(location) => self.read_tier(location),
            None => TierOutcome::NotFound,
        }
    }

    fn read_tier(&self, location: &ReceiptLocation) -> TierOutcome {
        TierOutcome::from_read(self.source.read_receipt(location))
    }
}

impl<S: ReceiptSource + 'static> ReceiptResolver<S> {
    /// Resolve on tokio's blocking pool, for latency-sensitive async callers.
    ///
    /// A lookup task that fails to complete is reported as absence.
    pub async fn resolve_receipt_blocking<T>(self: Arc<Self>, transaction: T) -> Option<ReceiptBytes>
    where
        T: Transaction + Send + 'static,
    {
        let id = transaction.id().clone();
        match tokio::task::spawn_blocking(move || self.resolve_receipt(&transaction)).await {
            Ok(receipt) => receipt,
            Err(e) => {
                tracing::warn!(transaction = %id, error = %e, "receipt lookup task failed");
                None
            }
        }
    }
}

/// Resolve against the local filesystem without building a resolver.
///
/// `app_receipt` is the app-level receipt location; pass `None` on
/// platforms that report none.
pub fn resolve_receipt<T: Transaction + ?Sized>(
    transaction: &T,
    app_receipt: Option<&ReceiptLocation>,
) -> Option<ReceiptBytes> {
    let config = ResolverConfig {
        app_receipt: app_receipt.cloned(),
        ..ResolverConfig::default()
    };
    ReceiptResolver::from_config(config).resolve_receipt(transaction)
}

fn log_outcome(id: Option<&TransactionId>, tier: Tier, outcome: &TierOutcome) {
    let id = id.map(TransactionId::as_str).unwrap_or("-");
    match outcome {
        TierOutcome::Found(receipt) => tracing::debug!(
            transaction = id,
            %tier,
            len = receipt.len(),
            fingerprint = %receipt.fingerprint(),
            "receipt found"
        ),
        TierOutcome::NotFound => tracing::debug!(transaction = id, %tier, "no receipt at tier"),
        TierOutcome::Empty => tracing::debug!(transaction = id, %tier, "receipt file is empty"),
        TierOutcome::ReadError(reason) => {
            tracing::warn!(transaction = id, %tier, %reason, "receipt unreadable, falling through")
        }
    }
}
