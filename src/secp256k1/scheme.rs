//! Key and signature types and the ECDSA sign/verify protocol.

use super::{
    curve::{self, CurvePoint, ORDER, PRIME},
    scalar::{hash_to_scalar, random_scalar},
};
use crate::{Error, Fingerprint, PrivateKeyExt, Signer, Verifier};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, Rng};
use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

const PRIVATE_KEY_FIELDS: usize = 1;
const PUBLIC_KEY_FIELDS: usize = 2;
const KEY_PAIR_FIELDS: usize = 3;
const SIGNATURE_FIELDS: usize = 2;

/// Fixed-nonce signing core.
///
/// Returns `None` when r or s reduces to zero, in which case the caller must
/// redraw the nonce rather than emit the signature.
fn sign_with_nonce(d: &BigUint, k: &BigUint, e: &BigUint) -> Option<Signature> {
    let n = &*ORDER;
    let r = match curve::generator().mul(k) {
        CurvePoint::Affine { x, .. } => x % n,
        CurvePoint::Infinity => return None,
    };
    if r.is_zero() {
        return None;
    }
    let k_inverse = k.modinv(n)?;
    let s = (k_inverse * (e + &r * d)) % n;
    if s.is_zero() {
        return None;
    }
    Some(Signature { r, s })
}

/// Secp256k1 private key: a scalar in [1, n-1].
#[derive(Clone, Eq, PartialEq)]
pub struct PrivateKey {
    d: BigUint,
}

impl Signer for PrivateKey {
    type Signature = Signature;
    type PublicKey = PublicKey;

    fn public_key(&self) -> PublicKey {
        PublicKey::from(self)
    }

    fn sign<R: Rng + CryptoRng>(&self, rng: &mut R, message: &[u8]) -> Signature {
        let e = hash_to_scalar(message);
        loop {
            let k = random_scalar(rng);
            if let Some(signature) = sign_with_nonce(&self.d, &k, &e) {
                return signature;
            }
        }
    }
}

impl crate::PrivateKey for PrivateKey {}

impl PrivateKeyExt for PrivateKey {
    fn from_rng<R: Rng + CryptoRng>(rng: &mut R) -> Self {
        Self {
            d: random_scalar(rng),
        }
    }
}

impl Fingerprint for PrivateKey {}

impl TryFrom<BigUint> for PrivateKey {
    type Error = Error;

    fn try_from(d: BigUint) -> Result<Self, Error> {
        if d.is_zero() || d >= *ORDER {
            return Err(Error::ScalarOutOfRange);
        }
        Ok(Self { d })
    }
}

impl FromStr for PrivateKey {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Error> {
        let fields: Vec<&str> = text.split('|').collect();
        let d = match fields.as_slice() {
            [d] => d.parse::<BigUint>()?,
            _ => {
                return Err(Error::WrongFieldCount {
                    expected: PRIVATE_KEY_FIELDS,
                    found: fields.len(),
                })
            }
        };
        Self::try_from(d)
    }
}

impl Display for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.d)
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.d)
    }
}

/// Secp256k1 public key: the affine point Q = d*G.
#[derive(Clone, Eq, PartialEq)]
pub struct PublicKey {
    x: BigUint,
    y: BigUint,
}

impl PublicKey {
    fn try_new(x: BigUint, y: BigUint) -> Result<Self, Error> {
        if x >= *PRIME || y >= *PRIME {
            return Err(Error::CoordinateOutOfRange);
        }
        let key = Self { x, y };
        if !key.point().is_on_curve() {
            return Err(Error::NotOnCurve);
        }
        Ok(key)
    }

    /// The underlying curve point. Never the identity.
    pub fn point(&self) -> CurvePoint {
        CurvePoint::Affine {
            x: self.x.clone(),
            y: self.y.clone(),
        }
    }
}

impl Verifier for PublicKey {
    type Signature = Signature;

    fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        let n = &*ORDER;
        // r and s must lie in [1, n-1]. s = 0 has no inverse, so this guard
        // must precede the inversion below.
        if signature.r.is_zero() || signature.r >= *n {
            return false;
        }
        if signature.s.is_zero() || signature.s >= *n {
            return false;
        }
        let w = match signature.s.modinv(n) {
            Some(w) => w,
            None => return false,
        };
        let e = hash_to_scalar(message);
        let u1 = (e * &w) % n;
        let u2 = (&signature.r * &w) % n;
        let recovered = curve::generator().mul(&u1).add(&self.point().mul(&u2));
        match recovered {
            CurvePoint::Affine { x, .. } => x % n == signature.r,
            CurvePoint::Infinity => false,
        }
    }
}

impl crate::PublicKey for PublicKey {}

impl Fingerprint for PublicKey {}

impl From<&PrivateKey> for PublicKey {
    fn from(private_key: &PrivateKey) -> Self {
        match curve::generator().mul(&private_key.d) {
            CurvePoint::Affine { x, y } => Self { x, y },
            // d is in [1, n-1], so d*G cannot be the identity.
            CurvePoint::Infinity => unreachable!("private scalar is nonzero mod n"),
        }
    }
}

impl FromStr for PublicKey {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Error> {
        let fields: Vec<&str> = text.split('|').collect();
        let (x, y) = match fields.as_slice() {
            [x, y] => (x.parse::<BigUint>()?, y.parse::<BigUint>()?),
            _ => {
                return Err(Error::WrongFieldCount {
                    expected: PUBLIC_KEY_FIELDS,
                    found: fields.len(),
                })
            }
        };
        Self::try_new(x, y)
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}", self.x, self.y)
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}", self.x, self.y)
    }
}

/// A private/public key pair with Q = d*G.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyPair {
    private: PrivateKey,
    public: PublicKey,
}

impl KeyPair {
    /// Generate a fresh key pair using the supplied RNG.
    pub fn generate<R: Rng + CryptoRng>(rng: &mut R) -> Self {
        let private = PrivateKey::from_rng(rng);
        let public = PublicKey::from(&private);
        Self { private, public }
    }

    /// Create a [KeyPair] from a seed.
    ///
    /// # Warning
    ///
    /// This function is insecure and should only be used for examples
    /// and testing.
    pub fn from_seed(seed: u64) -> Self {
        let private = PrivateKey::from_seed(seed);
        let public = PublicKey::from(&private);
        Self { private, public }
    }

    /// Returns the private key.
    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    /// Returns the public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Sign a message with the private key.
    pub fn sign<R: Rng + CryptoRng>(&self, rng: &mut R, message: &[u8]) -> Signature {
        self.private.sign(rng, message)
    }
}

impl Fingerprint for KeyPair {}

impl FromStr for KeyPair {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Error> {
        let fields: Vec<&str> = text.split('|').collect();
        let (d, x, y) = match fields.as_slice() {
            [d, x, y] => (
                d.parse::<BigUint>()?,
                x.parse::<BigUint>()?,
                y.parse::<BigUint>()?,
            ),
            _ => {
                return Err(Error::WrongFieldCount {
                    expected: KEY_PAIR_FIELDS,
                    found: fields.len(),
                })
            }
        };
        let private = PrivateKey::try_from(d)?;
        let public = PublicKey::try_new(x, y)?;
        // The encoding is redundant; reject a pair that violates Q = d*G
        // instead of accepting it silently.
        if public != PublicKey::from(&private) {
            return Err(Error::KeyMismatch);
        }
        Ok(Self { private, public })
    }
}

impl Display for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}", self.private, self.public)
    }
}

/// ECDSA signature (r, s).
///
/// Construction and parsing are format-checked only; range validity of r and
/// s is the verifier's precondition.
#[derive(Clone, Eq, PartialEq)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Create a signature from raw components.
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// The r component.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The s component.
    pub fn s(&self) -> &BigUint {
        &self.s
    }
}

impl crate::Signature for Signature {}

impl FromStr for Signature {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Error> {
        let fields: Vec<&str> = text.split('|').collect();
        let (r, s) = match fields.as_slice() {
            [r, s] => (r.parse::<BigUint>()?, s.parse::<BigUint>()?),
            _ => {
                return Err(Error::WrongFieldCount {
                    expected: SIGNATURE_FIELDS,
                    found: fields.len(),
                })
            }
        };
        Ok(Self { r, s })
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}", self.r, self.s)
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}", self.r, self.s)
    }
}
