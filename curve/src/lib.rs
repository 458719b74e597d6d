//! Elliptic curve groups on short Weierstrass curves over prime fields.
//!
//! This crate provides curves with runtime parameters `y^2 = x^3 + a*x + b`
//! over `GF(p)`, affine points borrowing their curve, the group law, scalar
//! multiplication, configuration loading, and helpers for random sampling.
//! Coordinates and coefficients are arbitrary-precision integers.
//!
//! ```
//! use curve::{BigInt, BigUint, Curve};
//!
//! let curve = Curve::new(BigInt::from(9), BigInt::from(17), BigInt::from(23));
//! let g = curve.point(BigInt::from(16), BigInt::from(5));
//!
//! assert_eq!(g.double()?, curve.point(BigInt::from(20), BigInt::from(20)));
//! assert!(g.scalar_mul(&BigUint::from(32u32))?.is_identity());
//! # Ok::<(), curve::CurveError>(())
//! ```

mod affine;
mod config;
mod curve;
mod errors;
mod group;
pub mod modular;
mod random;


pub use affine::Point;
pub use config::{BaseConfig, CurveConfig};
pub use curve::{BasePoint, Curve};
pub use errors::CurveError;
pub use num_bigint::{BigInt, BigUint};
pub use random::{ScalarSampler, WIDE_REDUCTION_EXTRA_BYTES};
