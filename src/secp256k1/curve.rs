//! Curve parameters and affine point algebra for secp256k1.

use num_bigint::BigUint;
use num_traits::Zero;
use std::sync::LazyLock;

/// Prime modulus of the base field: 2^256 - 2^32 - 977.
pub(crate) static PRIME: LazyLock<BigUint> = LazyLock::new(|| {
    BigUint::parse_bytes(
        b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
        16,
    )
    .unwrap()
});

/// Order of the group generated by the generator point.
pub(crate) static ORDER: LazyLock<BigUint> = LazyLock::new(|| {
    BigUint::parse_bytes(
        b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
        16,
    )
    .unwrap()
});

static GENERATOR: LazyLock<CurvePoint> = LazyLock::new(|| CurvePoint::Affine {
    x: BigUint::parse_bytes(
        b"79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
        16,
    )
    .unwrap(),
    y: BigUint::parse_bytes(
        b"483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
        16,
    )
    .unwrap(),
});

/// Returns the generator point G.
pub fn generator() -> CurvePoint {
    GENERATOR.clone()
}

/// Positive residue of a - b mod m.
fn sub_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    ((a % m) + m - (b % m)) % m
}

/// A point on the curve: an affine coordinate pair satisfying
/// y^2 = x^3 + 7 (mod p), or the identity element.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CurvePoint {
    Affine { x: BigUint, y: BigUint },
    Infinity,
}

impl CurvePoint {
    /// Whether this point is the identity element.
    pub fn is_infinity(&self) -> bool {
        matches!(self, Self::Infinity)
    }

    /// Whether the coordinates satisfy the curve equation. The identity is
    /// on the curve by convention.
    pub fn is_on_curve(&self) -> bool {
        match self {
            Self::Infinity => true,
            Self::Affine { x, y } => {
                let p = &*PRIME;
                (y * y) % p == (x * x * x + BigUint::from(7u32)) % p
            }
        }
    }

    /// Additive inverse: (x, -y mod p). The identity is its own inverse.
    pub fn negate(&self) -> Self {
        match self {
            Self::Infinity => Self::Infinity,
            Self::Affine { x, y } => Self::Affine {
                x: x.clone(),
                y: (&*PRIME - y) % &*PRIME,
            },
        }
    }

    /// Add two points under the chord-and-tangent group law.
    pub fn add(&self, other: &Self) -> Self {
        let (x1, y1, x2, y2) = match (self, other) {
            (Self::Infinity, q) => return q.clone(),
            (p, Self::Infinity) => return p.clone(),
            (Self::Affine { x: x1, y: y1 }, Self::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };
        let p = &*PRIME;

        // P + (-P) = O. This must be caught before the slope is computed:
        // the denominator would be zero and have no inverse.
        if x1 == x2 && ((y1 + y2) % p).is_zero() {
            return Self::Infinity;
        }

        let lambda = if x1 == x2 {
            // Tangent slope 3*x^2 / (2*y) (the curve's a coefficient is 0).
            let numerator = (BigUint::from(3u32) * x1 * x1) % p;
            let denominator = (BigUint::from(2u32) * y1) % p;
            let inverse = match denominator.modinv(p) {
                Some(inverse) => inverse,
                None => return Self::Infinity,
            };
            (numerator * inverse) % p
        } else {
            // Chord slope (y2 - y1) / (x2 - x1).
            let numerator = sub_mod(y2, y1, p);
            let denominator = sub_mod(x2, x1, p);
            let inverse = match denominator.modinv(p) {
                Some(inverse) => inverse,
                None => return Self::Infinity,
            };
            (numerator * inverse) % p
        };

        let x3 = sub_mod(&sub_mod(&((&lambda * &lambda) % p), x1, p), x2, p);
        let y3 = sub_mod(&((lambda * sub_mod(x1, &x3, p)) % p), y1, p);
        Self::Affine { x: x3, y: y3 }
    }

    /// Double a point: defined as adding the point to itself.
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Multiply by a scalar with double-and-add.
    ///
    /// k = 0 maps every point to the identity. Unreduced scalars (k >= n)
    /// are accepted; the walk covers the full bit length of k.
    pub fn mul(&self, k: &BigUint) -> Self {
        let mut result = Self::Infinity;
        let mut addend = self.clone();
        for i in 0..k.bits() {
            if k.bit(i) {
                result = result.add(&addend);
            }
            addend = addend.double();
        }
        result
    }
}
