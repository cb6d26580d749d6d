//! # BN254 Scalar Field Elements
//!
//! Defines `FieldElement`, an integer guaranteed to lie in `[0, p)` where `p`
//! is the BN254 scalar-field modulus used by the downstream Noir circuits.
//!
//! ## Security Invariant
//!
//! [`is_in_range()`] is the single modulus comparison in the workspace.
//! Every fallible `FieldElement` constructor goes through it, and values at
//! or above the modulus are rejected with [`FieldError::OutOfRange`]. The
//! infallible `From<u64>` skips the check because `u64::MAX < p`. Nothing is
//! ever reduced modulo `p`: a silent reduction would let two distinct digests
//! collide on the same witness value.

use std::str::FromStr;
use std::sync::OnceLock;

use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FieldError;

/// Big-endian bytes of the BN254 scalar-field modulus.
///
/// p = 21888242871839275222246405745257275088548364400416034343698204186575808495617
const MODULUS_BE_BYTES: [u8; 32] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x28, 0x33, 0xe8, 0x48, 0x79, 0xb9, 0x70, 0x91, 0x43, 0xe1, 0xf5, 0x93, 0xf0, 0x00, 0x00, 0x01,
];

static MODULUS: OnceLock<BigUint> = OnceLock::new();

/// The BN254 scalar-field modulus. Initialized once, never mutated.
pub fn field_modulus() -> &'static BigUint {
    MODULUS.get_or_init(|| BigUint::from_bytes_be(&MODULUS_BE_BYTES))
}

/// Returns true if `value < p`.
pub fn is_in_range(value: &BigUint) -> bool {
    value < field_modulus()
}

/// Convert a non-negative integer into a field element.
///
/// # Errors
///
/// Returns [`FieldError::OutOfRange`] if `value >= p`.
pub fn to_field_element(value: BigUint) -> Result<FieldElement, FieldError> {
    if is_in_range(&value) {
        Ok(FieldElement(value))
    } else {
        Err(FieldError::OutOfRange {
            value: value.to_string(),
            modulus: field_modulus().to_string(),
        })
    }
}

/// An element of the BN254 scalar field, `0 <= value < p`.
///
/// Renders as its canonical decimal string (no sign, no leading zeros),
/// which is the form the circuit witness files expect.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldElement(BigUint);

impl FieldElement {
    /// Interpret 32 bytes as a big-endian unsigned integer.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::OutOfRange`] if the integer is `>= p`.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Result<Self, FieldError> {
        to_field_element(BigUint::from_bytes_be(bytes))
    }

    /// Parse a decimal integer string.
    ///
    /// Surrounding whitespace and a single leading `+` are accepted. The
    /// remainder must be ASCII digits.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidFormat`] for anything that is not a
    /// non-negative decimal integer, and [`FieldError::OutOfRange`] if the
    /// integer is `>= p`.
    pub fn from_decimal_str(s: &str) -> Result<Self, FieldError> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FieldError::InvalidFormat(s.to_string()));
        }
        let value = BigUint::parse_bytes(digits.as_bytes(), 10)
            .ok_or_else(|| FieldError::InvalidFormat(s.to_string()))?;
        to_field_element(value)
    }

    /// The zero element.
    pub fn zero() -> Self {
        Self(BigUint::from(0u8))
    }

    /// Borrow the underlying integer.
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Big-endian 32-byte encoding, left-padded with zeros.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let raw = self.0.to_bytes_be();
        let mut out = [0u8; 32];
        // raw.len() <= 32 because value < p < 2^256.
        out[32 - raw.len()..].copy_from_slice(&raw);
        out
    }

    /// Canonical decimal rendering.
    pub fn to_decimal(&self) -> String {
        self.0.to_str_radix(10)
    }
}

impl std::fmt::Display for FieldElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FieldElement {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}

impl TryFrom<BigUint> for FieldElement {
    type Error = FieldError;

    fn try_from(value: BigUint) -> Result<Self, Self::Error> {
        to_field_element(value)
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        // u64::MAX < p, so no range check is needed.
        Self(BigUint::from(value))
    }
}

impl Serialize for FieldElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for FieldElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_decimal_str(&s).map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any 32 bytes below the modulus round-trip through the field.
        #[test]
        fn in_range_bytes_round_trip(bytes in any::<[u8; 32]>()) {
            let value = BigUint::from_bytes_be(&bytes);
            let result = to_field_element(value.clone());
            if value < *field_modulus() {
                let fe = result.unwrap();
                prop_assert_eq!(fe.as_biguint(), &value);
                prop_assert_eq!(fe.to_be_bytes(), bytes);
            } else {
                prop_assert!(result.is_err());
            }
        }

        /// Values at or above the modulus are always rejected.
        #[test]
        fn above_modulus_rejected(offset in any::<u128>()) {
            let value = field_modulus() + BigUint::from(offset);
            prop_assert!(to_field_element(value).is_err());
        }

        /// Decimal rendering parses back to the same element.
        #[test]
        fn decimal_round_trip(n in any::<u64>()) {
            let fe = FieldElement::from(n);
            let back = FieldElement::from_decimal_str(&fe.to_string()).unwrap();
            prop_assert_eq!(back, fe);
        }
    }
}
