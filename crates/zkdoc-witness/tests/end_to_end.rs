//! # End-to-End Witness Tests
//!
//! Drives the full normalize → digest → salt → commit pipeline through the
//! public API and checks the rendered `Prover.toml`.

use zkdoc_core::{ContentType, DocumentTypeCode};
use zkdoc_witness::{process, PipelineError, PipelineOptions};

#[test]
fn same_document_twice_fresh_salts() {
    let ct = ContentType::from_extension(".txt");
    let options = PipelineOptions::default();
    let a = process(b"hello\r\nworld  \n", &ct, &options).unwrap();
    let b = process(b"hello\nworld", &ct, &options).unwrap();

    assert_eq!(a.inputs.doc_hash_raw, b.inputs.doc_hash_raw);
    assert_ne!(a.inputs.salt, b.inputs.salt);
    assert_ne!(a.inputs.doc_commitment, b.inputs.doc_commitment);
    assert!(a.salt_generated && b.salt_generated);
}

#[test]
fn json_documents_equal_after_normalization() {
    let ct = ContentType::from_extension(".json");
    let options = PipelineOptions::default().with_salt_str("7").unwrap();
    let a = process(b"{\"version\":0,\"name\":\"acme\"}", &ct, &options).unwrap();
    let b = process(b"{ \"name\": \"acme\",\n  \"version\": 0 }\n", &ct, &options).unwrap();
    assert_eq!(a.inputs, b.inputs);
    assert_eq!(
        a.inputs.doc_hash_raw.to_string(),
        "9458780678532724986870386419353708980630256123468925594480216074820030038014"
    );
}

#[test]
fn overflowing_json_fails_for_both_spellings() {
    let ct = ContentType::from_extension(".json");
    let options = PipelineOptions::default();
    let a = process(br#"{"b":2,"a":1}"#, &ct, &options).unwrap_err();
    let b = process(br#"{"a": 1, "b": 2}"#, &ct, &options).unwrap_err();
    assert_eq!(a, b);
    assert!(matches!(a, PipelineError::DigestOutOfRange(_)));
}

#[test]
fn prover_toml_for_registration_form() {
    let ct = ContentType::from_extension(".txt");
    let options = PipelineOptions::default()
        .with_declared_type(DocumentTypeCode::new(7).unwrap())
        .with_salt_str("12345")
        .unwrap();
    let out = process(b"hello\r\nworld  \n", &ct, &options).unwrap();
    let toml = out.inputs.to_prover_toml("hello.txt");
    assert_eq!(
        toml,
        "# Generated from: hello.txt\n\
         doc_commitment = \"0xa04332c3719696db170af54240b5c77e56a3a68e311fdee236c3ec386d71b8e3\"\n\
         doc_type_code = \"7\"\n\
         enable_type_check = \"1\"\n\
         doc_hash_raw = \"17537795619485715730544710892002109709559451292229910321485992538252569596856\"\n\
         salt = \"12345\"\n\
         expected_doc_type = \"7\"\n"
    );
}
