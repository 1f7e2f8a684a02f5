//! ECDSA over the secp256k1 curve.
//!
//! Implements key generation, signing, and verification on the short
//! Weierstrass curve y^2 = x^3 + 7 over the secp256k1 prime field, together
//! with '|'-delimited decimal text encodings for every key and signature
//! type. Nonces are drawn fresh from the caller-supplied RNG on every
//! signing call and redrawn whenever r or s reduces to zero.
//!
//! # Warning
//!
//! Point arithmetic and scalar multiplication are variable-time. This module
//! provides no protection against timing side channels and must not be used
//! where an attacker can observe execution time.
//!
//! # Example
//! ```rust
//! use secp256k1_ecdsa::{secp256k1::PrivateKey, PrivateKeyExt, Signer, Verifier};
//! use rand::rngs::OsRng;
//!
//! // Generate a new private key
//! let private_key = PrivateKey::from_rng(&mut OsRng);
//!
//! // Sign a message
//! let message = b"hello, world!";
//! let signature = private_key.sign(&mut OsRng, message);
//!
//! // Verify the signature
//! assert!(private_key.public_key().verify(message, &signature));
//! ```

mod curve;
mod scalar;
mod scheme;

pub use curve::{generator, CurvePoint};
pub use scheme::{KeyPair, PrivateKey, PublicKey, Signature};
