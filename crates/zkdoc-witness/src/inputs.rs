//! # Circuit Input Set
//!
//! The six named witness values handed to the document circuit, in the fixed
//! order the circuit's `Prover.toml` lists them.
//!
//! ## Prover.toml
//!
//! ```toml
//! # Generated from: contract.json
//! doc_commitment = "0x…"
//! doc_type_code = "7"
//! enable_type_check = "1"
//! doc_hash_raw = "…"
//! salt = "…"
//! expected_doc_type = "7"
//! ```
//!
//! Every value is a quoted string, including the integers.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use zkdoc_core::{DocumentTypeCode, FieldElement};
use zkdoc_crypto::Commitment;

/// Key names in output order.
pub const CIRCUIT_INPUT_KEYS: [&str; 6] = [
    "doc_commitment",
    "doc_type_code",
    "enable_type_check",
    "doc_hash_raw",
    "salt",
    "expected_doc_type",
];

/// The witness values for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitInputSet {
    /// Placeholder commitment over `doc_hash_raw` and `salt`.
    pub doc_commitment: Commitment,
    /// Declared document type, or [`DocumentTypeCode::OTHER`].
    pub doc_type_code: DocumentTypeCode,
    /// True iff a document type was declared.
    pub enable_type_check: bool,
    /// The document digest as a field element.
    pub doc_hash_raw: FieldElement,
    /// The commitment salt.
    pub salt: FieldElement,
    /// Always equal to `doc_type_code`.
    pub expected_doc_type: DocumentTypeCode,
}

impl CircuitInputSet {
    /// The six `(key, value)` pairs in output order.
    pub fn entries(&self) -> [(&'static str, String); 6] {
        let [k_commitment, k_type, k_check, k_hash, k_salt, k_expected] = CIRCUIT_INPUT_KEYS;
        [
            (k_commitment, self.doc_commitment.to_string()),
            (k_type, self.doc_type_code.to_string()),
            (k_check, String::from(if self.enable_type_check { "1" } else { "0" })),
            (k_hash, self.doc_hash_raw.to_string()),
            (k_salt, self.salt.to_string()),
            (k_expected, self.expected_doc_type.to_string()),
        ]
    }

    /// Render the `key = "value"` lines, one per entry.
    pub fn to_assignments(&self) -> String {
        self.entries()
            .iter()
            .map(|(k, v)| format!("{k} = \"{v}\"\n"))
            .collect()
    }

    /// Render a `Prover.toml` document with a provenance header.
    ///
    /// Line breaks in `source` are replaced by spaces so the header stays a
    /// single comment line.
    pub fn to_prover_toml(&self, source: &str) -> String {
        let source = source.replace(['\n', '\r'], " ");
        format!("# Generated from: {source}\n{}", self.to_assignments())
    }
}

impl Serialize for CircuitInputSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (k, v) in &entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zkdoc_crypto::build_commitment;

    fn sample(declared: Option<u8>) -> CircuitInputSet {
        let doc_hash_raw = FieldElement::from(11u64);
        let salt = FieldElement::from(22u64);
        let code = declared
            .map(|c| DocumentTypeCode::new(i64::from(c)).unwrap())
            .unwrap_or(DocumentTypeCode::OTHER);
        CircuitInputSet {
            doc_commitment: build_commitment(&doc_hash_raw, &salt),
            doc_type_code: code,
            enable_type_check: declared.is_some(),
            doc_hash_raw,
            salt,
            expected_doc_type: code,
        }
    }

    #[test]
    fn entries_follow_key_order() {
        let keys: Vec<&str> = sample(None).entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, CIRCUIT_INPUT_KEYS);
    }

    #[test]
    fn prover_toml_exact_layout() {
        let set = sample(Some(7));
        let commitment = set.doc_commitment.to_string();
        let toml = set.to_prover_toml("docs/contract.json");
        let expected = format!(
            "# Generated from: docs/contract.json\n\
             doc_commitment = \"{commitment}\"\n\
             doc_type_code = \"7\"\n\
             enable_type_check = \"1\"\n\
             doc_hash_raw = \"11\"\n\
             salt = \"22\"\n\
             expected_doc_type = \"7\"\n"
        );
        assert_eq!(toml, expected);
    }

    #[test]
    fn undeclared_type_uses_other_and_disables_check() {
        let toml = sample(None).to_prover_toml("a.txt");
        assert!(toml.contains("doc_type_code = \"99\"\n"));
        assert!(toml.contains("enable_type_check = \"0\"\n"));
        assert!(toml.contains("expected_doc_type = \"99\"\n"));
    }

    #[test]
    fn header_source_stays_on_one_line() {
        let toml = sample(None).to_prover_toml("evil\nname.txt");
        assert!(toml.starts_with("# Generated from: evil name.txt\n"));
        assert_eq!(toml.lines().count(), 7);
    }

    #[test]
    fn json_preserves_order_and_uses_strings() {
        let json = serde_json::to_string(&sample(Some(3))).unwrap();
        let order: Vec<usize> = CIRCUIT_INPUT_KEYS
            .iter()
            .map(|k| json.find(&format!("\"{k}\"")).unwrap())
            .collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
        assert!(json.contains("\"doc_type_code\":\"3\""));
        assert!(json.contains("\"enable_type_check\":\"1\""));
    }
}
