//! Resolution scenarios against real temporary bundles.

use std::sync::Arc;

use proptest::prelude::*;
use receiptkit::core::{BundleLayout, ReceiptEnvironment};
use receiptkit::Tier;
use receiptkit_testkit::{verify_all_vectors, BundleFixture, ScenarioParams, Stored};

#[test]
fn all_vectors_pass() {
    let failures: Vec<_> = verify_all_vectors()
        .into_iter()
        .filter_map(|(_, result)| result.err())
        .collect();
    assert!(failures.is_empty(), "failing vectors: {failures:#?}");
}

#[test]
fn scenario_a_legacy_receipt() {
    let fixture = BundleFixture::new().unwrap();
    let legacy: Vec<u8> = vec![
        0x30, 0x82, 0x00, 0x0d, 0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x07, 0x02,
        0xa0, 0x00,
    ];
    fixture.write_app_receipt(&[0x11; 40]).unwrap();
    let tx = fixture.write_transaction_receipt("1000000001", &legacy).unwrap();

    let receipt = fixture.resolver().resolve_receipt(&tx).unwrap();
    assert_eq!(receipt.len(), 17);
    assert_eq!(receipt.as_bytes(), legacy.as_slice());
}

#[test]
fn scenario_b_app_receipt() {
    let fixture = BundleFixture::new().unwrap();
    fixture.write_app_receipt(&[0x22; 200]).unwrap();
    let tx = fixture.transaction_without_receipt("1000000002");

    let receipt = fixture.resolver().resolve_receipt(&tx).unwrap();
    assert_eq!(receipt.to_vec(), vec![0x22; 200]);
}

#[test]
fn scenario_c_nothing_available() {
    let fixture = BundleFixture::new().unwrap();
    let tx = fixture.transaction_without_receipt("1000000003");

    let resolution = fixture.resolver().resolve_detailed(&tx);
    assert!(resolution.is_absent());
    assert!(resolution.into_receipt().is_none());
}

#[test]
fn receipt_appears_after_refresh() {
    let fixture = BundleFixture::new().unwrap();
    let resolver = fixture.resolver();
    let tx = fixture.transaction_without_receipt("1000000004");

    assert!(resolver.resolve_receipt(&tx).is_none());

    // A refresh performed by the caller writes the receipt into the bundle.
    fixture.write_app_receipt(b"fresh receipt").unwrap();
    assert_eq!(resolver.resolve_receipt(&tx).unwrap().as_bytes(), b"fresh receipt");

    fixture.remove_app_receipt().unwrap();
    assert!(resolver.resolve_receipt(&tx).is_none());
}

#[test]
fn sandbox_bundle_uses_sandbox_receipt() {
    let fixture =
        BundleFixture::with_layout(BundleLayout::Ios, ReceiptEnvironment::Sandbox).unwrap();
    let location = fixture.write_app_receipt(b"sandbox").unwrap();
    assert!(location.path().ends_with("StoreKit/sandboxReceipt"));

    let tx = fixture.transaction_with("1", &Stored::Unreadable).unwrap();
    let resolution = fixture.resolver().resolve_detailed(&tx);
    assert_eq!(resolution.source(), Some(Tier::App));
}

#[tokio::test]
async fn off_thread_resolution_matches_inline() {
    let fixture = BundleFixture::new().unwrap();
    fixture.write_app_receipt(b"app").unwrap();
    let tx = fixture.write_transaction_receipt("7", b"legacy").unwrap();

    let resolver = Arc::new(fixture.resolver());
    let inline = resolver.resolve_receipt(&tx);
    let off_thread = resolver.clone().resolve_receipt_blocking(tx).await;
    assert_eq!(inline, off_thread);
    assert_eq!(off_thread.unwrap().as_bytes(), b"legacy");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn resolution_matches_oracle(params: ScenarioParams) {
        let (fixture, tx) = params.install().unwrap();
        let resolution = fixture.resolver().resolve_detailed(&tx);
        let expected = params.expected();

        prop_assert_eq!(resolution.source(), expected.as_ref().map(|(tier, _)| *tier));
        prop_assert_eq!(
            resolution.into_receipt().map(|r| r.to_vec()),
            expected.map(|(_, bytes)| bytes)
        );
    }

    #[test]
    fn resolution_is_idempotent(params: ScenarioParams) {
        let (fixture, tx) = params.install().unwrap();
        let resolver = fixture.resolver();
        prop_assert_eq!(resolver.resolve_detailed(&tx), resolver.resolve_detailed(&tx));
    }
}
