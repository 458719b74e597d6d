use num_bigint::BigUint;
use rand::TryCryptoRng;

/// Extra random bytes drawn beyond the byte length of the bound, so that the
/// reduction bias is at most `2^-128`.
pub const WIDE_REDUCTION_EXTRA_BYTES: usize = 16;

/// Samples nonzero scalars below a group order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScalarSampler {
    // order - 1, at least 1
    range: BigUint,
    byte_len: usize,
}

impl ScalarSampler {
    /// Returns `None` if `order < 2`, since `[1, order)` would be empty.
    pub fn new(order: &BigUint) -> Option<Self> {
        if *order < BigUint::from(2u32) {
            return None;
        }
        let byte_len = order.bits().div_ceil(8) as usize + WIDE_REDUCTION_EXTRA_BYTES;
        Some(Self {
            range: order - 1u32,
            byte_len,
        })
    }

    /// Draw a scalar in `[1, order)`.
    ///
    /// Reads `byte_len(order) + 16` bytes from `rng`, interprets them
    /// big-endian and maps the value onto the range by `v mod (order - 1) + 1`.
    /// Failures of the random source are returned unchanged.
    pub fn sample<R: TryCryptoRng + ?Sized>(&self, rng: &mut R) -> Result<BigUint, R::Error> {
        let mut bytes = vec![0u8; self.byte_len];
        rng.try_fill_bytes(&mut bytes)?;

        let wide = BigUint::from_bytes_be(&bytes);
        Ok(wide % &self.range + 1u32)
    }
}
