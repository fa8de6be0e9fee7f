//! Named resolution scenarios with their expected outcome.
//!
//! Each vector describes what is stored for the transaction tier and the
//! app tier, and which tier (if any) must supply the receipt.

use receiptkit::Tier;
use receiptkit_core::TransactionId;

use crate::fixtures::Stored;
use crate::generators::{expected_receipt, ScenarioParams};

/// A resolution scenario.
#[derive(Debug, Clone)]
pub struct ScenarioVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Transaction tier setup; `None` when the transaction has no legacy
    /// location at all.
    pub transaction: Option<Stored>,
    /// App tier setup.
    pub app: Stored,
    /// Tier expected to supply the receipt.
    pub expected_source: Option<Tier>,
    /// Expected receipt length (0 when absent).
    pub expected_len: usize,
}

impl ScenarioVector {
    /// The vector as installable parameters, with a fixed transaction id.
    pub fn params(&self) -> ScenarioParams {
        ScenarioParams {
            transaction_id: TransactionId::new("1000000001")
                .expect("literal transaction id is non-empty"),
            transaction: self.transaction.clone(),
            app: self.app.clone(),
        }
    }
}

/// 17-byte legacy receipt with a DER sequence header.
fn legacy_receipt() -> Vec<u8> {
    let mut bytes = vec![0x30, 0x82];
    bytes.extend((0u8..15).map(|i| i.wrapping_mul(17)));
    bytes
}

/// Get all scenario vectors.
pub fn all_vectors() -> Vec<ScenarioVector> {
    vec![
        ScenarioVector {
            name: "legacy receipt wins over differing app receipt",
            transaction: Some(Stored::Content(legacy_receipt())),
            app: Stored::Content(vec![0xA5; 40]),
            expected_source: Some(Tier::Transaction),
            expected_len: 17,
        },
        ScenarioVector {
            name: "no legacy location, app receipt present",
            transaction: None,
            app: Stored::Content(vec![0x42; 200]),
            expected_source: Some(Tier::App),
            expected_len: 200,
        },
        ScenarioVector {
            name: "no legacy location, no app receipt",
            transaction: None,
            app: Stored::Missing,
            expected_source: None,
            expected_len: 0,
        },
        ScenarioVector {
            name: "unreadable legacy receipt falls back to app",
            transaction: Some(Stored::Unreadable),
            app: Stored::Content(vec![0x01; 64]),
            expected_source: Some(Tier::App),
            expected_len: 64,
        },
        ScenarioVector {
            name: "empty legacy receipt falls back to app",
            transaction: Some(Stored::Empty),
            app: Stored::Content(vec![0x02; 32]),
            expected_source: Some(Tier::App),
            expected_len: 32,
        },
        ScenarioVector {
            name: "legacy location with nothing stored, no app receipt",
            transaction: Some(Stored::Missing),
            app: Stored::Missing,
            expected_source: None,
            expected_len: 0,
        },
        ScenarioVector {
            name: "legacy receipt used when app receipt unreadable",
            transaction: Some(Stored::Content(vec![0x03; 8])),
            app: Stored::Unreadable,
            expected_source: Some(Tier::Transaction),
            expected_len: 8,
        },
        ScenarioVector {
            name: "empty app receipt is absence",
            transaction: None,
            app: Stored::Empty,
            expected_source: None,
            expected_len: 0,
        },
    ]
}

/// Run a vector against a fresh on-disk bundle.
///
/// Returns a description of the first mismatch.
pub fn verify_vector(vector: &ScenarioVector) -> Result<(), String> {
    let (fixture, tx) = vector
        .params()
        .install()
        .map_err(|e| format!("{}: setup failed: {e}", vector.name))?;
    let resolution = fixture.resolver().resolve_detailed(&tx);

    if resolution.source() != vector.expected_source {
        return Err(format!(
            "{}: expected source {:?}, got {:?}",
            vector.name,
            vector.expected_source,
            resolution.source()
        ));
    }

    let got = resolution.into_receipt().map(|r| r.to_vec());
    let got_len = got.as_ref().map_or(0, Vec::len);
    if got_len != vector.expected_len {
        return Err(format!(
            "{}: expected {} bytes, got {}",
            vector.name, vector.expected_len, got_len
        ));
    }

    let expected = expected_receipt(vector.transaction.as_ref(), &vector.app).map(|(_, b)| b);
    if got != expected {
        return Err(format!(
            "{}: content mismatch: expected {}, got {}",
            vector.name,
            expected.as_deref().map(hex::encode).unwrap_or_default(),
            got.as_deref().map(hex::encode).unwrap_or_default()
        ));
    }

    Ok(())
}

/// Verify every vector, returning each name with its outcome.
pub fn verify_all_vectors() -> Vec<(&'static str, Result<(), String>)> {
    all_vectors()
        .iter()
        .map(|v| (v.name, verify_vector(v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectors_are_consistent_with_oracle() {
        for v in all_vectors() {
            let expected = expected_receipt(v.transaction.as_ref(), &v.app);
            assert_eq!(expected.as_ref().map(|(t, _)| *t), v.expected_source, "{}", v.name);
            assert_eq!(
                expected.map_or(0, |(_, b)| b.len()),
                v.expected_len,
                "{}",
                v.name
            );
        }
    }

    #[test]
    fn test_legacy_receipt_shape() {
        let r = legacy_receipt();
        assert_eq!(r.len(), 17);
        assert_eq!(&r[..2], &[0x30, 0x82]);
    }

    #[test]
    fn test_vector_names_unique() {
        let vectors = all_vectors();
        let mut names: Vec<_> = vectors.iter().map(|v| v.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), vectors.len());
    }
}
