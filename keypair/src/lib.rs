//! Keypair generation over short Weierstrass curves.
//!
//! A keypair is a secret scalar `sk` and the public point `G * sk`, where `G` is
//! the base point configured on the [`curve::Curve`].
//!
//! # Example
//!
//! ```
//! use curve::{BigInt, BigUint, Curve};
//! use keypair::generate_keypair;
//!
//! let curve = Curve::new(BigInt::from(9), BigInt::from(17), BigInt::from(23))
//!     .with_base_point(BigInt::from(16), BigInt::from(5), BigUint::from(32u32));
//!
//! let (secret_key, public_key) = generate_keypair(&curve).expect("keygen");
//! let base = curve.base_point().expect("base point");
//! assert_eq!(base.scalar_mul(secret_key.scalar()).unwrap(), *public_key.point());
//! ```
//!
//! # Security Considerations
//!
//! - Secret scalars are reduced by the order of the base point, not by the
//!   field modulus. Curves must therefore be configured with their base order.
//! - Point arithmetic is not constant time.
//! - Protect the secret key from unauthorized access; it is never logged.

mod errors;
mod keys;


pub use errors::KeypairError;
pub use keys::{PublicKey, SecretKey, generate_keypair, generate_keypair_with_rng};
