//! Error types for keypair generation.

use curve::CurveError;

/// Errors that can occur while generating or deriving keys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeypairError {
    /// The curve has no designated base point to derive public keys from.
    #[error("curve has no base point")]
    MissingBasePoint,

    /// The configured base point order leaves no valid secret scalar.
    #[error("base point order must be at least 2")]
    DegenerateOrder,

    /// The secure random source failed. The draw is never retried and no
    /// fallback source is used.
    #[error("secure random source unavailable: {0}")]
    RandomnessUnavailable(String),

    /// Scalar multiplication of the base point failed.
    ///
    /// In practice this indicates a non-prime field modulus.
    #[error(transparent)]
    Curve(#[from] CurveError),
}
