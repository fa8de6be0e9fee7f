//! Proptest generators for property-based testing.

use std::io;

use proptest::prelude::*;

use receiptkit::Tier;
use receiptkit_core::{TransactionId, TransactionRecord};

use crate::fixtures::{BundleFixture, Stored};

/// Generate non-empty receipt content up to `max_len` bytes.
pub fn receipt_content(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..=max_len.max(1))
}

/// Generate a platform-style numeric transaction identifier.
pub fn transaction_id() -> impl Strategy<Value = TransactionId> {
    "[1-9][0-9]{9,15}".prop_filter_map("non-empty id", |s| TransactionId::new(s).ok())
}

/// Generate what might be stored at a receipt location.
pub fn stored() -> impl Strategy<Value = Stored> {
    prop_oneof![
        1 => Just(Stored::Missing),
        1 => Just(Stored::Empty),
        1 => Just(Stored::Unreadable),
        3 => receipt_content(256).prop_map(Stored::Content),
    ]
}

/// The receipt resolution should yield for a storage setup, and its tier.
///
/// `transaction` is `None` when the transaction has no legacy location.
pub fn expected_receipt(transaction: Option<&Stored>, app: &Stored) -> Option<(Tier, Vec<u8>)> {
    if let Some(bytes) = transaction.and_then(Stored::receipt) {
        return Some((Tier::Transaction, bytes.to_vec()));
    }
    app.receipt().map(|bytes| (Tier::App, bytes.to_vec()))
}

/// A full storage setup for one transaction.
#[derive(Debug, Clone)]
pub struct ScenarioParams {
    pub transaction_id: TransactionId,
    /// `None` when the transaction has no legacy location.
    pub transaction: Option<Stored>,
    pub app: Stored,
}

impl ScenarioParams {
    pub fn expected(&self) -> Option<(Tier, Vec<u8>)> {
        expected_receipt(self.transaction.as_ref(), &self.app)
    }

    /// Lay the setup out in a fresh bundle.
    pub fn install(&self) -> io::Result<(BundleFixture, TransactionRecord)> {
        let fixture = BundleFixture::new()?;
        fixture.set_app_receipt(&self.app)?;

        let id = self.transaction_id.as_str();
        let tx = match &self.transaction {
            Some(stored) => fixture.transaction_with(id, stored)?,
            None => fixture.transaction_without_receipt(id),
        };
        Ok((fixture, tx))
    }
}

impl Arbitrary for ScenarioParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (transaction_id(), prop::option::of(stored()), stored())
            .prop_map(|(transaction_id, transaction, app)| ScenarioParams {
                transaction_id,
                transaction,
                app,
            })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn receipt_content_is_never_empty(content in receipt_content(64)) {
            prop_assert!(!content.is_empty());
            prop_assert!(content.len() <= 64);
        }

        #[test]
        fn transaction_ids_are_numeric(id in transaction_id()) {
            prop_assert!(id.as_str().bytes().all(|b| b.is_ascii_digit()));
        }

        #[test]
        fn oracle_prefers_transaction_tier(tx in receipt_content(32), app in receipt_content(32)) {
            let expected = expected_receipt(
                Some(&Stored::Content(tx.clone())),
                &Stored::Content(app),
            );
            prop_assert_eq!(expected, Some((Tier::Transaction, tx)));
        }
    }

    #[test]
    fn test_oracle_fallbacks() {
        let app = Stored::Content(vec![9; 4]);
        for tx in [None, Some(Stored::Missing), Some(Stored::Empty), Some(Stored::Unreadable)] {
            assert_eq!(
                expected_receipt(tx.as_ref(), &app),
                Some((Tier::App, vec![9; 4]))
            );
        }
        assert_eq!(expected_receipt(None, &Stored::Empty), None);
    }
}
