//! Digest-to-scalar mapping and secure scalar generation.

use super::curve::ORDER;
use crate::sha256;
use num_bigint::{BigUint, RandBigInt};
use num_traits::Zero;
use rand::{CryptoRng, Rng};

/// Interpret the SHA-256 digest of a message as a big-endian unsigned
/// integer.
///
/// No reduction is applied here; the modular expressions that consume the
/// result reduce it implicitly.
pub(crate) fn hash_to_scalar(message: &[u8]) -> BigUint {
    BigUint::from_bytes_be(sha256::hash(message).as_ref())
}

/// Draw a uniformly random scalar in [1, n-1].
///
/// Draws bits(n) bits, reduces mod n, and redraws on zero. The `CryptoRng`
/// bound keeps non-cryptographic sources out by construction; this backs
/// both private-key generation and per-signature nonces.
pub(crate) fn random_scalar<R: Rng + CryptoRng>(rng: &mut R) -> BigUint {
    loop {
        let candidate = rng.gen_biguint(ORDER.bits()) % &*ORDER;
        if !candidate.is_zero() {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    #[test]
    fn test_hash_to_scalar_known_value() {
        // SHA-256("abc") interpreted as a big-endian integer.
        let expected: BigUint =
            "84342368487090800366523834928142263660104883695016514377462985829716817089965"
                .parse()
                .unwrap();
        assert_eq!(hash_to_scalar(b"abc"), expected);
    }

    #[test]
    fn test_hash_to_scalar_is_deterministic() {
        assert_eq!(hash_to_scalar(b"message"), hash_to_scalar(b"message"));
        assert_ne!(hash_to_scalar(b"message"), hash_to_scalar(b"messagf"));
    }

    #[test]
    fn test_random_scalar_in_range() {
        for _ in 0..64 {
            let scalar = random_scalar(&mut OsRng);
            assert!(!scalar.is_zero());
            assert!(scalar < *ORDER);
        }
    }
}
