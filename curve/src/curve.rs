use core::fmt;

use num_bigint::{BigInt, BigUint};
use serde::{Deserialize, Serialize};

use crate::modular::{mul, reduce};
use crate::Point;

/// Designated base point of a curve, together with the order of the
/// subgroup it generates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasePoint {
    pub x: BigInt,
    pub y: BigInt,
    pub order: BigUint,
}

/// Short Weierstrass curve `y^2 = x^3 + a*x + b` over `GF(p)`.
///
/// A curve is built once and borrowed by every [`Point`] on it. Neither the
/// primality of `p` nor the non-singularity of the curve is checked.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Curve {
    a: BigInt,
    b: BigInt,
    p: BigInt,
    base: Option<BasePoint>,
}

impl Curve {
    /// Create a curve from its coefficients and field modulus.
    pub fn new(a: BigInt, b: BigInt, p: BigInt) -> Self {
        Curve { a, b, p, base: None }
    }

    /// Attach a base point and the order of the group it generates.
    ///
    /// The order is used by key generation to sample secret scalars.
    pub fn with_base_point(mut self, x: BigInt, y: BigInt, order: BigUint) -> Self {
        self.base = Some(BasePoint { x, y, order });
        self
    }

    /// The `a` coefficient, exactly as supplied.
    #[inline]
    pub fn a(&self) -> &BigInt {
        &self.a
    }

    /// The `b` coefficient, exactly as supplied.
    #[inline]
    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// The field modulus.
    #[inline]
    pub fn p(&self) -> &BigInt {
        &self.p
    }

    #[inline]
    pub fn base(&self) -> Option<&BasePoint> {
        self.base.as_ref()
    }

    /// The base point as a [`Point`] on this curve, if one is configured.
    pub fn base_point(&self) -> Option<Point<'_>> {
        self.base
            .as_ref()
            .map(|base| Point::new(base.x.clone(), base.y.clone(), self))
    }

    /// Order of the subgroup generated by the base point.
    #[inline]
    pub fn base_order(&self) -> Option<&BigUint> {
        self.base.as_ref().map(|base| &base.order)
    }

    /// The point at infinity on this curve.
    #[inline]
    pub fn identity(&self) -> Point<'_> {
        Point::identity(self)
    }

    /// Create an affine point on this curve. The coordinates are not validated.
    #[inline]
    pub fn point(&self, x: BigInt, y: BigInt) -> Point<'_> {
        Point::new(x, y, self)
    }

    /// Check whether `point` satisfies `y^2 = x^3 + a*x + b (mod p)`.
    ///
    /// The identity is on every curve. Only coordinates are checked, not the
    /// curve the point is tagged with.
    pub fn contains(&self, point: &Point<'_>) -> bool {
        let Some((x, y)) = point.coordinates() else {
            return true;
        };

        let p = &self.p;
        let y2 = mul(y, y, p);
        let x3 = mul(&mul(x, x, p), x, p);
        let ax = mul(&self.a, x, p);
        let rhs = reduce(&(x3 + ax + &self.b), p);

        y2 == rhs
    }
}

// Coefficient-only equality: the base point does not take part.
impl PartialEq for Curve {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b && self.p == other.p
    }
}

impl Eq for Curve {}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y^2 = x^3 + {}*x + {} mod {}", self.a, self.b, self.p)
    }
}
