//! # Canonical Document Bytes: Content-Type-Aware Normalization
//!
//! This module defines `CanonicalBytes`, the sole construction path for bytes
//! that are fed to the document digest.
//!
//! ## Security Invariant
//!
//! The `CanonicalBytes` newtype has a private inner field. It can only be
//! produced by [`normalize()`] or, when the caller has explicitly turned
//! normalization off, by [`CanonicalBytes::unnormalized()`]. Since
//! [`sha256_digest()`](crate::digest::sha256_digest) accepts only
//! `&CanonicalBytes`, every digest in the system is traceable to one of these
//! two paths.
//!
//! ## Rules
//!
//! | Content type | Rule |
//! |--------------|------|
//! | PlainText | UTF-8 decode, `\r\n` and `\r` to `\n`, strip trailing whitespace per line, strip trailing newlines |
//! | StructuredJson | parse, re-serialize with sorted keys, compact separators, ASCII-only strings |
//! | OpaqueBinary | passthrough, warn |
//! | Unknown | passthrough, warn |
//!
//! Text and JSON normalization are idempotent. When decoding or parsing fails
//! the raw bytes are used and a [`NormalizationWarning`] is returned.

use serde_json::Value;

use crate::content::ContentType;
use crate::error::NormalizationWarning;

/// Bytes produced by document normalization.
///
/// # Invariants
///
/// - Constructed only by [`normalize()`] or [`CanonicalBytes::unnormalized()`].
/// - For `PlainText` input that decoded as UTF-8: no `\r`, no trailing
///   whitespace on any line, no trailing `\n`.
/// - For `StructuredJson` input that parsed: the compact sorted-key form
///   described at `normalize_json`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Wrap raw bytes without normalization.
    ///
    /// Used when the caller disables normalization. The digest then commits
    /// to the exact file bytes.
    pub fn unnormalized(raw: impl Into<Vec<u8>>) -> Self {
        Self(raw.into())
    }

    /// Access the canonical bytes for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume and return the byte buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Returns the length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Result of [`normalize()`]: the bytes to hash plus any recoverable warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Bytes to feed to the digest.
    pub bytes: CanonicalBytes,
    /// Set when the rule could not be applied and raw bytes were used.
    pub warning: Option<NormalizationWarning>,
}

impl Normalized {
    fn clean(bytes: Vec<u8>) -> Self {
        Self {
            bytes: CanonicalBytes(bytes),
            warning: None,
        }
    }

    fn fallback(raw: &[u8], warning: NormalizationWarning) -> Self {
        Self {
            bytes: CanonicalBytes(raw.to_vec()),
            warning: Some(warning),
        }
    }
}

/// Apply the normalization rule for `content_type` to `raw`.
///
/// Never fails: when a rule cannot be applied the raw bytes are returned
/// together with a warning.
pub fn normalize(raw: &[u8], content_type: &ContentType) -> Normalized {
    match content_type {
        ContentType::PlainText(_) => match std::str::from_utf8(raw) {
            Ok(text) => Normalized::clean(normalize_text(text).into_bytes()),
            Err(_) => Normalized::fallback(raw, NormalizationWarning::TextDecodeFailed),
        },
        ContentType::StructuredJson(_) => match normalize_json(raw) {
            Ok(bytes) => Normalized::clean(bytes),
            Err(reason) => Normalized::fallback(raw, NormalizationWarning::JsonParseFailed(reason)),
        },
        ContentType::OpaqueBinary(ext) => Normalized::fallback(
            raw,
            NormalizationWarning::BinaryPassthrough {
                extension: ext.clone(),
            },
        ),
        ContentType::Unknown(ext) => Normalized::fallback(
            raw,
            NormalizationWarning::UnknownContentType {
                extension: ext.clone(),
            },
        ),
    }
}

/// Canonical text form: LF line endings, right-trimmed lines, no trailing
/// newlines.
///
/// Lines are split on `\n` only, after `\r\n` and lone `\r` have been
/// rewritten. Trailing newlines are all removed, not just the last one, so
/// that `normalize_text(normalize_text(s)) == normalize_text(s)`.
///
/// Trailing whitespace is Unicode `White_Space` plus the information
/// separators U+001C..U+001F.
pub fn normalize_text(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let joined = unified
        .split('\n')
        .map(|line| line.trim_end_matches(is_line_space))
        .collect::<Vec<_>>()
        .join("\n");
    joined.trim_end_matches('\n').to_string()
}

fn is_line_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Canonical JSON form.
///
/// - Object keys sorted by code point at every level.
/// - `,` and `:` separators with no whitespace.
/// - Strings escaped to pure ASCII: `\"`, `\\`, `\b`, `\f`, `\n`, `\r`,
///   `\t`, and `\uXXXX` (lowercase, surrogate pairs above U+FFFF) for every
///   other character outside `' '..='~'`.
/// - Integers kept exactly as written, at any size. `-0` becomes `0`.
/// - Numbers with a fraction or exponent are floats, printed as the shortest
///   round-tripping decimal with a `.0` or `e+XX` marker, so `1.0` and `1`
///   stay distinct. Overflowing literals print as `Infinity`/`-Infinity`.
fn normalize_json(raw: &[u8]) -> Result<Vec<u8>, String> {
    let text = std::str::from_utf8(raw).map_err(|e| e.to_string())?;
    let value: Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
    let mut out = String::with_capacity(raw.len());
    write_value(&mut out, &value)?;
    Ok(out.into_bytes())
}

fn write_value(out: &mut String, value: &Value) -> Result<(), String> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => write_number(out, &n.to_string())?,
        Value::String(s) => write_string(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item)?;
            }
            out.push(']');
        }
        Value::Object(map) => {
            // UTF-8 byte order is code point order.
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(out, key);
                out.push(':');
                write_value(out, item)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

/// `literal` is the number exactly as it appeared in the document.
fn write_number(out: &mut String, literal: &str) -> Result<(), String> {
    if !literal.contains(['.', 'e', 'E']) {
        let digits = literal.strip_prefix('-').unwrap_or(literal);
        if digits.bytes().all(|b| b == b'0') {
            out.push('0');
        } else {
            out.push_str(literal);
        }
        return Ok(());
    }

    let f: f64 = literal
        .parse()
        .map_err(|_| format!("unparseable number {literal}"))?;
    if f.is_infinite() {
        out.push_str(if f > 0.0 { "Infinity" } else { "-Infinity" });
        return Ok(());
    }
    if f.is_sign_negative() {
        out.push('-');
    }

    // `{:e}` yields the shortest round-tripping digits, e.g. "1.25e1".
    let shortest = format!("{:e}", f.abs());
    let (mantissa, exp) = shortest
        .split_once('e')
        .ok_or_else(|| format!("unexpected float rendering {shortest}"))?;
    let exp: i32 = exp
        .parse()
        .map_err(|_| format!("unexpected float rendering {shortest}"))?;
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    // Value is 0.DIGITS * 10^point.
    let point = exp + 1;
    let len = digits.len() as i32;

    if point <= -4 || point > 16 {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        let sign = if exp < 0 { '-' } else { '+' };
        out.push_str(&format!("e{sign}{:02}", exp.abs()));
    } else if point <= 0 {
        out.push_str("0.");
        out.push_str(&"0".repeat(point.unsigned_abs() as usize));
        out.push_str(&digits);
    } else if point < len {
        let (int, frac) = digits.split_at(point as usize);
        out.push_str(int);
        out.push('.');
        out.push_str(frac);
    } else {
        out.push_str(&digits);
        out.push_str(&"0".repeat((point - len) as usize));
        out.push_str(".0");
    }
    Ok(())
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            ' '..='~' => out.push(c),
            _ => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{unit:04x}"));
                }
            }
        }
    }
    out.push('"');
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn json_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| serde_json::json!(n)),
            "-?[1-9][0-9]{20,40}".prop_map(|digits| {
                serde_json::from_str::<Value>(&digits).unwrap()
            }),
            "[a-zA-Z0-9_ \"\\\\\n\u{e9}\u{1f600}]{0,20}".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 48, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,6}", inner, 0..6)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        /// Pretty and compact renderings of the same value normalize identically.
        #[test]
        fn json_formatting_irrelevant(value in json_value()) {
            let compact = serde_json::to_vec(&value).unwrap();
            let pretty = serde_json::to_vec_pretty(&value).unwrap();
            let a = normalize(&compact, &ContentType::from_extension(".json"));
            let b = normalize(&pretty, &ContentType::from_extension(".json"));
            prop_assert!(a.warning.is_none());
            prop_assert_eq!(a.bytes, b.bytes);
        }

        #[test]
        fn json_idempotent(value in json_value()) {
            let ct = ContentType::from_extension(".json");
            let raw = serde_json::to_vec_pretty(&value).unwrap();
            let once = normalize(&raw, &ct);
            let twice = normalize(once.bytes.as_bytes(), &ct);
            prop_assert_eq!(once.bytes, twice.bytes);
        }

        /// Canonical JSON is pure ASCII.
        #[test]
        fn json_output_ascii(value in json_value()) {
            let raw = serde_json::to_vec(&value).unwrap();
            let n = normalize(&raw, &ContentType::from_extension(".json"));
            prop_assert!(n.bytes.as_bytes().is_ascii());
        }

        /// Any finite float renders to text that parses back to the same value.
        #[test]
        fn json_float_round_trips(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
            let raw = format!("[{f:e}]");
            let n = normalize(raw.as_bytes(), &ContentType::from_extension(".json"));
            let text = std::str::from_utf8(n.bytes.as_bytes()).unwrap();
            let inner = &text[1..text.len() - 1];
            prop_assert!(inner.contains(['.', 'e']));
            prop_assert_eq!(inner.parse::<f64>().unwrap(), f);
        }

        #[test]
        fn text_idempotent(s in "[a-z \t\r\n\u{a0}]{0,64}") {
            let ct = ContentType::from_extension(".txt");
            let once = normalize(s.as_bytes(), &ct);
            let twice = normalize(once.bytes.as_bytes(), &ct);
            prop_assert_eq!(once.bytes, twice.bytes);
        }

        /// Converting LF to CRLF and padding lines with spaces changes nothing.
        #[test]
        fn text_line_endings_irrelevant(lines in prop::collection::vec("[a-z]{0,8}", 0..8)) {
            let ct = ContentType::from_extension(".md");
            let lf = lines.join("\n");
            let crlf_padded = lines
                .iter()
                .map(|l| format!("{l}  \t"))
                .collect::<Vec<_>>()
                .join("\r\n");
            prop_assert_eq!(
                normalize(lf.as_bytes(), &ct).bytes,
                normalize(crlf_padded.as_bytes(), &ct).bytes
            );
        }

        /// Arbitrary bytes never panic and idempotence holds even on fallback.
        #[test]
        fn arbitrary_bytes_idempotent(raw in prop::collection::vec(any::<u8>(), 0..64)) {
            for ext in [".txt", ".json"] {
                let ct = ContentType::from_extension(ext);
                let once = normalize(&raw, &ct);
                let twice = normalize(once.bytes.as_bytes(), &ct);
                prop_assert_eq!(once.bytes, twice.bytes);
            }
        }
    }
}
