//! Prime field helpers over arbitrary-precision integers.
//!
//! All field elements are plain `BigInt`s. Every helper here returns the
//! canonical representative in `[0, p)`; callers never see a negative residue.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

use crate::CurveError;

/// Reduce `value` into `[0, p)`.
///
/// Uses floored modulo, so `reduce(-1, p) == p - 1`.
///
/// # Panics
///
/// Panics if `p` is zero.
#[inline]
pub fn reduce(value: &BigInt, p: &BigInt) -> BigInt {
    value.mod_floor(p)
}

/// Modular multiplicative inverse of `value` modulo `p`.
///
/// Returns `CurveError::NoModularInverse` when `gcd(value, p) != 1`, which
/// includes `value ≡ 0 (mod p)`.
pub fn inverse(value: &BigInt, p: &BigInt) -> Result<BigInt, CurveError> {
    let value = reduce(value, p);
    if value.is_zero() {
        return Err(CurveError::NoModularInverse {
            value,
            modulus: p.clone(),
        });
    }

    match value.modinv(p) {
        Some(inv) => Ok(reduce(&inv, p)),
        None => Err(CurveError::NoModularInverse {
            value,
            modulus: p.clone(),
        }),
    }
}

/// `(lhs - rhs) mod p`.
#[inline]
pub fn sub(lhs: &BigInt, rhs: &BigInt, p: &BigInt) -> BigInt {
    reduce(&(lhs - rhs), p)
}

/// `(lhs * rhs) mod p`.
#[inline]
pub fn mul(lhs: &BigInt, rhs: &BigInt, p: &BigInt) -> BigInt {
    reduce(&(lhs * rhs), p)
}

/// `(-value) mod p`.
#[inline]
pub fn neg(value: &BigInt, p: &BigInt) -> BigInt {
    reduce(&-value, p)
}

/// Number of bytes in the big-endian encoding of `|n|`. Zero encodes in zero bytes.
#[inline]
pub fn byte_len(n: &BigInt) -> usize {
    n.bits().div_ceil(8) as usize
}
