//! Error types for curve arithmetic and curve configuration.

use num_bigint::BigInt;

/// Errors that can occur while combining points or loading curve parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurveError {
    /// The operands of a binary operation lie on curves with differing
    /// coefficients or modulus.
    #[error("operands lie on different curves")]
    CurveMismatch,

    /// A slope denominator has no inverse modulo the field modulus.
    ///
    /// This only happens when the modulus is not prime, since the group law
    /// already routes `P + (-P)` and 2-torsion doubling to the identity.
    #[error("{value} has no inverse modulo {modulus}")]
    NoModularInverse { value: BigInt, modulus: BigInt },

    /// A curve parameter could not be parsed or is out of range.
    #[error("invalid curve parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}
