//! Secret and public keys over a curve's base point.

use core::fmt;

use curve::{BigUint, Curve, Point, ScalarSampler};
use rand::TryCryptoRng;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

use crate::errors::KeypairError;

/// A secret scalar in `[1, n)`, where `n` is the order of the curve's base point.
///
/// It must be kept secret and protected from unauthorized access. The `Debug`
/// implementation does not print the scalar.
///
/// # Example
///
/// ```
/// use curve::{BigInt, BigUint, Curve};
/// use keypair::SecretKey;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let curve = Curve::new(BigInt::from(9), BigInt::from(17), BigInt::from(23))
///     .with_base_point(BigInt::from(16), BigInt::from(5), BigUint::from(32u32));
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let secret_key = SecretKey::random(&curve, &mut rng).expect("keygen");
/// let public_key = secret_key.public_key(&curve).expect("derive");
/// assert!(!public_key.point().is_identity());
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretKey {
    scalar: BigUint,
}

/// A public key: the base point multiplied by the secret scalar.
///
/// The key borrows the curve it was derived on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey<'c> {
    point: Point<'c>,
}

impl SecretKey {
    /// Generates a random secret key for `curve` using the provided random
    /// number generator.
    ///
    /// The scalar is sampled in `[1, n)` where `n` is the base point order.
    /// Earlier designs reduced a random string of the field modulus' byte
    /// length modulo the field modulus `p`; that is biased and may yield
    /// scalars that are not below the group order, so the reduction here is by
    /// the group order instead, with 16 extra random bytes to make the bias
    /// negligible.
    ///
    /// # Errors
    ///
    /// - [`KeypairError::MissingBasePoint`] if the curve has no base point
    /// - [`KeypairError::DegenerateOrder`] if the base order is below 2
    /// - [`KeypairError::RandomnessUnavailable`] if `rng` fails
    pub fn random<R: TryCryptoRng + ?Sized>(
        curve: &Curve,
        rng: &mut R,
    ) -> Result<Self, KeypairError> {
        let order = curve.base_order().ok_or(KeypairError::MissingBasePoint)?;
        let sampler = ScalarSampler::new(order).ok_or(KeypairError::DegenerateOrder)?;

        let scalar = sampler.sample(rng).map_err(|err| {
            tracing::warn!(%err, "secure random source failed");
            KeypairError::RandomnessUnavailable(err.to_string())
        })?;

        Ok(Self { scalar })
    }

    /// Wraps an existing scalar. The scalar is not range checked.
    pub fn from_scalar(scalar: BigUint) -> Self {
        Self { scalar }
    }

    #[inline]
    pub fn scalar(&self) -> &BigUint {
        &self.scalar
    }

    /// Derives the public key `G * sk`, where `G` is the base point of `curve`.
    pub fn public_key<'c>(&self, curve: &'c Curve) -> Result<PublicKey<'c>, KeypairError> {
        let base = curve.base_point().ok_or(KeypairError::MissingBasePoint)?;
        Ok(PublicKey {
            point: base.scalar_mul(&self.scalar)?,
        })
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}

impl<'c> PublicKey<'c> {
    #[inline]
    pub fn point(&self) -> &Point<'c> {
        &self.point
    }

    #[inline]
    pub fn into_point(self) -> Point<'c> {
        self.point
    }
}

/// Generates a keypair on `curve` with the operating system's secure random source.
pub fn generate_keypair(curve: &Curve) -> Result<(SecretKey, PublicKey<'_>), KeypairError> {
    generate_keypair_with_rng(curve, &mut OsRng)
}

/// Generates a keypair on `curve` drawing randomness from `rng`.
///
/// Nothing is persisted: the caller owns the secret key from here on.
#[tracing::instrument(level = "debug", skip_all)]
pub fn generate_keypair_with_rng<'c, R: TryCryptoRng + ?Sized>(
    curve: &'c Curve,
    rng: &mut R,
) -> Result<(SecretKey, PublicKey<'c>), KeypairError> {
    let secret = SecretKey::random(curve, rng)?;
    let public = secret.public_key(curve)?;
    tracing::debug!(
        order_bits = curve.base_order().map(|order| order.bits()),
        "generated keypair"
    );
    Ok((secret, public))
}
