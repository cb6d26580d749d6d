//! # Field Salts: Rejection Sampling
//!
//! Generates uniformly random BN254 field elements for use as commitment
//! salts.
//!
//! ## Algorithm
//!
//! Draw 32 bytes from a cryptographically secure RNG, read them as a
//! big-endian integer, and accept the draw only if it is below p. Otherwise
//! discard it and draw again. Accepted values are uniform over `[0, p)`.
//! Reducing a 256-bit draw modulo p instead would make the low
//! `2^256 mod p` residues noticeably more likely.
//!
//! Roughly 19% of draws are accepted, so a salt costs about five draws on
//! average.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zkdoc_core::FieldElement;

use crate::error::SaltError;

/// Generate a salt from the operating system CSPRNG.
pub fn generate_salt() -> FieldElement {
    generate_salt_with(&mut OsRng)
}

/// Generate a salt from the given CSPRNG.
pub fn generate_salt_with<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> FieldElement {
    let mut buf = [0u8; 32];
    loop {
        rng.fill_bytes(&mut buf);
        // Range check lives in zkdoc_core::field; a rejection is not an error.
        if let Ok(salt) = FieldElement::from_be_bytes(&buf) {
            return salt;
        }
    }
}

/// Validate a caller-supplied decimal salt.
///
/// The quality of a supplied salt is the caller's responsibility; only the
/// format and range are checked.
///
/// # Errors
///
/// Returns [`SaltError::InvalidFormat`] if the string is not a non-negative
/// integer, or if the integer is `>= p`.
pub fn accept_salt(candidate: &str) -> Result<FieldElement, SaltError> {
    Ok(FieldElement::from_decimal_str(candidate)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use zkdoc_core::{field_modulus, FieldError};

    /// Replays fixed 32-byte blocks, then zeros.
    struct ScriptedRng {
        blocks: Vec<[u8; 32]>,
        draws: usize,
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            let mut b = [0u8; 4];
            self.fill_bytes(&mut b);
            u32::from_le_bytes(b)
        }

        fn next_u64(&mut self) -> u64 {
            let mut b = [0u8; 8];
            self.fill_bytes(&mut b);
            u64::from_le_bytes(b)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let block = self.blocks.get(self.draws).copied().unwrap_or([0u8; 32]);
            self.draws += 1;
            for (d, s) in dest.iter_mut().zip(block.iter().cycle()) {
                *d = *s;
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for ScriptedRng {}

    fn modulus_bytes() -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&field_modulus().to_bytes_be());
        out
    }

    #[test]
    fn out_of_range_draws_are_discarded() {
        let mut five = [0u8; 32];
        five[31] = 5;
        let mut rng = ScriptedRng {
            blocks: vec![[0xff; 32], modulus_bytes(), five],
            draws: 0,
        };
        let salt = generate_salt_with(&mut rng);
        assert_eq!(salt, FieldElement::from(5u64));
        assert_eq!(rng.draws, 3);
    }

    #[test]
    fn first_in_range_draw_is_accepted_unchanged() {
        let mut below = modulus_bytes();
        below[31] -= 1;
        let mut rng = ScriptedRng {
            blocks: vec![below],
            draws: 0,
        };
        let salt = generate_salt_with(&mut rng);
        assert_eq!(salt.to_be_bytes(), below);
        assert_eq!(rng.draws, 1);
    }

    #[test]
    fn os_salts_are_in_range_and_distinct() {
        let a = generate_salt();
        let b = generate_salt();
        assert!(a.as_biguint() < field_modulus());
        assert!(b.as_biguint() < field_modulus());
        assert_ne!(a, b);
    }

    #[test]
    fn no_low_end_bias() {
        let mut rng = StdRng::seed_from_u64(0x5a17);
        let half = field_modulus() / BigUint::from(2u8);
        let quarter = field_modulus() / BigUint::from(4u8);
        let trials = 4000;
        let mut below_half = 0usize;
        let mut below_quarter = 0usize;
        for _ in 0..trials {
            let salt = generate_salt_with(&mut rng);
            assert!(salt.as_biguint() < field_modulus());
            if salt.as_biguint() < &half {
                below_half += 1;
            }
            if salt.as_biguint() < &quarter {
                below_quarter += 1;
            }
        }
        let half_ratio = below_half as f64 / trials as f64;
        let quarter_ratio = below_quarter as f64 / trials as f64;
        assert!((0.45..0.55).contains(&half_ratio), "half ratio {half_ratio}");
        assert!((0.20..0.30).contains(&quarter_ratio), "quarter ratio {quarter_ratio}");
    }

    #[test]
    fn accept_salt_valid() {
        let salt = accept_salt("12345").unwrap();
        assert_eq!(salt.to_string(), "12345");
    }

    #[test]
    fn accept_salt_rejects_non_integer() {
        assert_eq!(
            accept_salt("12ab"),
            Err(SaltError::InvalidFormat(FieldError::InvalidFormat(
                "12ab".to_string()
            )))
        );
        assert!(accept_salt("-5").is_err());
        assert!(accept_salt("").is_err());
    }

    #[test]
    fn accept_salt_rejects_modulus() {
        let p = field_modulus().to_string();
        assert!(matches!(
            accept_salt(&p),
            Err(SaltError::InvalidFormat(FieldError::OutOfRange { .. }))
        ));
        let max = (field_modulus() - BigUint::from(1u8)).to_string();
        assert!(accept_salt(&max).is_ok());
    }
}
