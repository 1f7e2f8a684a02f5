//! Generate secp256k1 keys, sign arbitrary messages, and verify signatures.
//!
//! Keys, key pairs, and signatures serialize to '|'-delimited decimal text
//! and parse back with explicit errors (never a panic). Randomness is always
//! an explicit parameter: key generation and signing take an `Rng + CryptoRng`
//! so that nothing in the library reaches for ambient global state.
//!
//! # Warning
//!
//! All arithmetic is variable-time. This crate is not hardened against
//! timing side channels and should not be used where they are a concern.
//!
//! # Example
//!
//! ```rust
//! use secp256k1_ecdsa::{secp256k1::KeyPair, Verifier};
//! use rand::rngs::OsRng;
//!
//! // Generate a new key pair
//! let keypair = KeyPair::generate(&mut OsRng);
//!
//! // Sign a message
//! let message = b"hello, world!";
//! let signature = keypair.sign(&mut OsRng, message);
//!
//! // Verify the signature
//! assert!(keypair.public_key().verify(message, &signature));
//! ```

use num_bigint::ParseBigIntError;
use rand::{CryptoRng, Rng, SeedableRng};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

pub mod secp256k1;
pub mod sha256;
pub use sha256::{hash, Digest};

/// Errors surfaced when parsing or validating keys and signatures.
#[derive(Error, Debug)]
pub enum Error {
    /// The text encoding did not have the expected number of '|'-delimited
    /// fields.
    #[error("expected {expected} field(s), found {found}")]
    WrongFieldCount { expected: usize, found: usize },
    /// A field was not a valid decimal integer.
    #[error("invalid integer: {0}")]
    InvalidInteger(#[from] ParseBigIntError),
    /// A scalar was outside [1, n-1].
    #[error("scalar out of range")]
    ScalarOutOfRange,
    /// A coordinate was not reduced mod the field prime.
    #[error("coordinate out of range")]
    CoordinateOutOfRange,
    /// The coordinates do not satisfy the curve equation.
    #[error("point not on curve")]
    NotOnCurve,
    /// A deserialized key pair whose public key is not derived from its
    /// private key.
    #[error("public key does not match private key")]
    KeyMismatch,
}

/// Produces [Signature]s over messages that can be verified with a
/// corresponding [PublicKey].
pub trait Signer: Send + Sync + Clone + 'static {
    /// The type of [Signature] produced by this [Signer].
    type Signature: Signature;

    /// The corresponding [PublicKey] type.
    type PublicKey: PublicKey<Signature = Self::Signature>;

    /// Returns the [PublicKey] corresponding to this [Signer].
    fn public_key(&self) -> Self::PublicKey;

    /// Sign a message.
    ///
    /// The message should not be hashed prior to calling this function; it is
    /// digested internally. The RNG is an explicit parameter because a fresh
    /// nonce is drawn on every call.
    fn sign<R: Rng + CryptoRng>(&self, rng: &mut R, message: &[u8]) -> Self::Signature;
}

/// A [Signer] with a canonical text encoding.
pub trait PrivateKey:
    Signer + Sized + Display + FromStr<Err = Error> + PartialEq + Fingerprint
{
}

/// A [PrivateKey] that can be generated from a seed or RNG.
pub trait PrivateKeyExt: PrivateKey {
    /// Create a [PrivateKey] from a seed.
    ///
    /// # Warning
    ///
    /// This function is insecure and should only be used for examples
    /// and testing.
    fn from_seed(seed: u64) -> Self {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        Self::from_rng(&mut rng)
    }

    /// Create a fresh [PrivateKey] using the supplied RNG.
    fn from_rng<R: Rng + CryptoRng>(rng: &mut R) -> Self;
}

/// Verifies [Signature]s over messages.
pub trait Verifier {
    /// The type of [Signature] that this verifier can verify.
    type Signature: Signature;

    /// Verify that a [Signature] is valid over a given message.
    ///
    /// The message should not be hashed prior to calling this function; it is
    /// digested internally.
    fn verify(&self, message: &[u8], signature: &Self::Signature) -> bool;
}

/// A [PublicKey], able to verify [Signature]s, with a canonical text
/// encoding.
pub trait PublicKey:
    Verifier + Sized + Display + FromStr<Err = Error> + PartialEq + Fingerprint
{
}

/// A [Signature] over a message, with a canonical text encoding.
pub trait Signature: Sized + Clone + Display + FromStr<Err = Error> + PartialEq {}

/// A content fingerprint derived from a value's canonical text encoding.
pub trait Fingerprint: Display {
    /// Returns the SHA-256 hex digest of the value's text encoding.
    ///
    /// This is an identity/debug hash only and must never be used as signing
    /// material.
    fn fingerprint(&self) -> String {
        hex::encode(sha256::hash(self.to_string().as_bytes()))
    }
}
