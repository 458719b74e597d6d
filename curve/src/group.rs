use num_bigint::BigUint;

use crate::{CurveError, Point};

impl<'c> Point<'c> {
    /// Scalar multiplication `k * self` by LSB-first double-and-add.
    ///
    /// The running double is computed at every bit position whether or not the
    /// bit is set. `k = 0` yields the identity. `k` is not reduced by the group
    /// order and may be arbitrarily large.
    #[tracing::instrument(level = "trace", skip_all, fields(bits = k.bits()))]
    pub fn scalar_mul(&self, k: &BigUint) -> Result<Self, CurveError> {
        let mut result = Self::identity(self.curve());
        let mut temp = self.clone();

        for bit in 0..k.bits() {
            if k.bit(bit) {
                result = result.add(&temp)?;
            }
            temp = temp.double()?;
        }

        Ok(result)
    }

    /// Scalar multiplication by a machine-sized scalar.
    #[inline]
    pub fn mul_u64(&self, n: u64) -> Result<Self, CurveError> {
        self.scalar_mul(&BigUint::from(n))
    }
}
