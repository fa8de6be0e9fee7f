//! # receiptkit Testkit
//!
//! Testing utilities for receiptkit.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: temporary app bundles on disk with receipts placed where
//!   the platform would put them
//! - **Scenario vectors**: named storage setups with their expected outcome
//! - **Generators**: proptest strategies for storage setups, plus an oracle
//!   for the expected result
//!
//! ## Scenario Vectors
//!
//! ```rust
//! use receiptkit_testkit::vectors::{all_vectors, verify_vector};
//!
//! for vector in all_vectors() {
//!     verify_vector(&vector).unwrap();
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use receiptkit_testkit::generators::ScenarioParams;
//!
//! proptest! {
//!     #[test]
//!     fn resolution_matches_oracle(params: ScenarioParams) {
//!         let (fixture, tx) = params.install().unwrap();
//!         let got = fixture.resolver().resolve_receipt(&tx).map(|r| r.to_vec());
//!         prop_assert_eq!(got, params.expected().map(|(_, bytes)| bytes));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use receiptkit_testkit::fixtures::BundleFixture;
//!
//! let fixture = BundleFixture::new().unwrap();
//! fixture.write_app_receipt(b"receipt").unwrap();
//! let tx = fixture.transaction_without_receipt("1000000001");
//! assert!(fixture.resolver().resolve_receipt(&tx).is_some());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{BundleFixture, Stored};
pub use generators::{expected_receipt, ScenarioParams};
pub use vectors::{all_vectors, verify_all_vectors, verify_vector, ScenarioVector};
