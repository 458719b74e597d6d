use core::fmt;
use core::ops::Neg;

use num_bigint::BigInt;

use crate::modular::{inverse, mul, neg, reduce, sub};
use crate::{Curve, CurveError};

/// Affine point on a short Weierstrass curve.
///
/// Represents a point in affine coordinates (x, y) or the point at infinity.
/// Points borrow the curve they lie on, so a curve outlives all of its points.
///
/// Coordinates produced by the group law are canonical (in `[0, p)`) and lie on
/// the curve. Coordinates supplied through [`Point::new`] are stored as given
/// and are not checked against the curve equation; see [`Point::is_on_curve`].
#[derive(Clone, Debug)]
pub struct Point<'c> {
    /// `None` for the point at infinity
    coords: Option<(BigInt, BigInt)>,
    curve: &'c Curve,
}

impl<'c> Point<'c> {
    /// Create a new affine point from owned coordinates.
    pub fn new(x: BigInt, y: BigInt, curve: &'c Curve) -> Self {
        Point {
            coords: Some((x, y)),
            curve,
        }
    }

    /// The point at infinity (identity element) on `curve`.
    #[inline]
    pub fn identity(curve: &'c Curve) -> Self {
        Point {
            coords: None,
            curve,
        }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.coords.is_none()
    }

    /// The curve this point is tagged with.
    #[inline]
    pub fn curve(&self) -> &'c Curve {
        self.curve
    }

    /// The `(x, y)` pair, or `None` for the identity.
    #[inline]
    pub fn coordinates(&self) -> Option<(&BigInt, &BigInt)> {
        self.coords.as_ref().map(|(x, y)| (x, y))
    }

    #[inline]
    pub fn x(&self) -> Option<&BigInt> {
        self.coords.as_ref().map(|(x, _)| x)
    }

    #[inline]
    pub fn y(&self) -> Option<&BigInt> {
        self.coords.as_ref().map(|(_, y)| y)
    }

    /// Check if the point satisfies the equation of its curve.
    pub fn is_on_curve(&self) -> bool {
        self.curve.contains(self)
    }

    /// Overwrite this point with a deep copy of `src`: coordinates, identity
    /// tag and curve. The two points share no storage afterwards.
    pub fn set(&mut self, src: &Point<'c>) {
        self.clone_from(src);
    }

    /// Additive inverse `(x, -y mod p)`. The identity is its own inverse.
    pub fn inverse(&self) -> Self {
        match &self.coords {
            None => Self::identity(self.curve),
            Some((x, y)) => Self::new(x.clone(), neg(y, self.curve.p()), self.curve),
        }
    }

    /// Group law: `self + other`.
    ///
    /// Fails with [`CurveError::CurveMismatch`] when the operands lie on
    /// different curves, and with [`CurveError::NoModularInverse`] when a
    /// slope denominator is not invertible (only possible for a non-prime
    /// modulus).
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Point<'c>) -> Result<Self, CurveError> {
        self.ensure_same_curve(other)?;

        // Handle infinity cases
        let Some((x1, y1)) = self.coordinates() else {
            tracing::trace!(branch = "lhs_identity", "point addition");
            return Ok(other.clone());
        };
        let Some((x2, y2)) = other.coordinates() else {
            tracing::trace!(branch = "rhs_identity", "point addition");
            return Ok(self.clone());
        };

        let curve = self.curve;
        let p = curve.p();
        let (x1, y1) = (reduce(x1, p), reduce(y1, p));
        let (x2, y2) = (reduce(x2, p), reduce(y2, p));

        // P + (-P) = O. Also covers doubling a point with y = 0.
        if x1 == x2 && y1 == neg(&y2, p) {
            tracing::trace!(branch = "inverse", "point addition");
            return Ok(Self::identity(curve));
        }

        let lambda = if x1 == x2 && y1 == y2 {
            // λ = (3x^2 + a) / (2y)
            tracing::trace!(branch = "double", "point addition");
            let x_sq = mul(&x1, &x1, p);
            let numerator = reduce(&(x_sq * 3u32 + curve.a()), p);
            let denominator = inverse(&(&y1 * 2u32), p)?;
            mul(&numerator, &denominator, p)
        } else {
            // λ = (y1 - y2) / (x1 - x2)
            tracing::trace!(branch = "distinct", "point addition");
            let numerator = sub(&y1, &y2, p);
            let denominator = inverse(&sub(&x1, &x2, p), p)?;
            mul(&numerator, &denominator, p)
        };

        // x_r = λ^2 - x1 - x2
        let x_r = reduce(&(&lambda * &lambda - &x1 - &x2), p);

        // y_r = λ(x1 - x_r) - y1
        let y_r = reduce(&(&lambda * (&x1 - &x_r) - &y1), p);

        Ok(Self::new(x_r, y_r, curve))
    }

    /// Point doubling: `2 * self`.
    #[inline]
    pub fn double(&self) -> Result<Self, CurveError> {
        self.add(self)
    }

    /// `self + (-other)`.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, other: &Point<'c>) -> Result<Self, CurveError> {
        self.ensure_same_curve(other)?;
        self.add(&other.inverse())
    }

    fn ensure_same_curve(&self, other: &Point<'_>) -> Result<(), CurveError> {
        if core::ptr::eq(self.curve, other.curve) || *self.curve == *other.curve {
            Ok(())
        } else {
            Err(CurveError::CurveMismatch)
        }
    }
}

// Both identity, or both affine with equal coordinates. The curve is not compared.
impl PartialEq for Point<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.coords == other.coords
    }
}

impl Eq for Point<'_> {}

impl<'c> Neg for &Point<'c> {
    type Output = Point<'c>;

    fn neg(self) -> Point<'c> {
        self.inverse()
    }
}

impl<'c> Neg for Point<'c> {
    type Output = Point<'c>;

    fn neg(self) -> Point<'c> {
        self.inverse()
    }
}

impl fmt::Display for Point<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coords {
            None => write!(f, "O"),
            Some((x, y)) => write!(f, "({x}, {y})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(v: i64) -> BigInt {
        BigInt::from(v)
    }

    fn toy_curve() -> Curve {
        Curve::new(int(9), int(17), int(23))
    }

    #[test]
    fn test_identity() {
        let curve = toy_curve();
        let id = curve.identity();
        assert!(id.is_identity());
        assert!(id.is_on_curve());
        assert!(id.coordinates().is_none());
        assert_eq!(id, Point::identity(&curve));
    }

    #[test]
    fn test_new_point_is_not_identity() {
        let curve = toy_curve();
        let g = curve.point(int(16), int(5));
        assert!(!g.is_identity());
        assert_eq!(g.coordinates(), Some((&int(16), &int(5))));
        assert!(g.is_on_curve());
    }

    #[test]
    fn test_point_addition_with_infinity() {
        let curve = toy_curve();
        let g = curve.point(int(16), int(5));
        let inf = curve.identity();

        assert_eq!(g.add(&inf).unwrap(), g);
        assert_eq!(inf.add(&g).unwrap(), g);
        assert_eq!(inf.add(&inf).unwrap(), inf);
    }

    #[test]
    fn test_point_doubling() {
        let curve = toy_curve();
        let g = curve.point(int(16), int(5));
        let g2 = g.double().unwrap();

        assert_eq!(g2, curve.point(int(20), int(20)));
        assert!(g2.is_on_curve(), "Doubled point is not on the curve");
        assert_eq!(g.add(&g).unwrap(), g2);
    }

    #[test]
    fn test_distinct_addition() {
        let curve = toy_curve();
        let g = curve.point(int(16), int(5));
        let g2 = curve.point(int(20), int(20));

        let g3 = g.add(&g2).unwrap();
        assert_eq!(g3, curve.point(int(14), int(14)));
        assert!(g3.is_on_curve());
    }

    #[test]
    fn test_point_negation() {
        let curve = toy_curve();
        let g = curve.point(int(16), int(5));
        let neg_g = g.inverse();

        assert_eq!(neg_g, curve.point(int(16), int(18)));
        assert!(neg_g.is_on_curve());
        assert_eq!(g.add(&neg_g).unwrap(), curve.identity());
        assert_eq!(-&g, neg_g);
        assert!(curve.identity().inverse().is_identity());
    }

    #[test]
    fn test_inverse_is_canonical() {
        let curve = toy_curve();
        let p = curve.point(int(3), int(0));
        assert_eq!(p.inverse().y(), Some(&int(0)));

        let p = curve.point(int(16), int(-5));
        assert_eq!(p.inverse().y(), Some(&int(5)));

        let p = curve.point(int(16), int(40));
        assert_eq!(p.inverse().y(), Some(&int(6)));
    }

    #[test]
    fn test_two_torsion_doubles_to_identity() {
        let curve = toy_curve();
        let t = curve.point(int(17), int(0));
        assert!(t.is_on_curve());
        assert!(t.double().unwrap().is_identity());
    }

    #[test]
    fn test_sub() {
        let curve = toy_curve();
        let g = curve.point(int(16), int(5));
        let g2 = g.double().unwrap();

        assert_eq!(g2.sub(&g).unwrap(), g);
        assert!(g.sub(&g).unwrap().is_identity());
    }

    #[test]
    fn test_curve_mismatch() {
        let c1 = toy_curve();
        let c2 = Curve::new(int(9), int(17), int(29));
        let p = c1.point(int(16), int(5));
        let q = c2.point(int(16), int(5));

        assert_eq!(p.add(&q), Err(CurveError::CurveMismatch));
        assert_eq!(q.add(&p), Err(CurveError::CurveMismatch));
        assert_eq!(c1.identity().add(&q), Err(CurveError::CurveMismatch));
        assert_eq!(p.sub(&q), Err(CurveError::CurveMismatch));
    }

    #[test]
    fn test_equal_curves_are_compatible() {
        let c1 = toy_curve();
        let c2 = toy_curve();
        let p = c1.point(int(16), int(5));
        let q = c2.point(int(16), int(5));

        assert_eq!(p.add(&q).unwrap(), c1.point(int(20), int(20)));
    }

    #[test]
    fn test_equality_ignores_curve() {
        let c1 = toy_curve();
        let c2 = Curve::new(int(1), int(1), int(101));
        assert_eq!(c1.point(int(1), int(2)), c2.point(int(1), int(2)));
        assert_eq!(c1.identity(), c2.identity());
        assert_ne!(c1.point(int(0), int(0)), c1.identity());
    }

    #[test]
    fn test_non_canonical_inputs() {
        // p = 65535 is not prime, but these denominators are invertible
        let curve = Curve::new(int(-1), int(4), int(65535));
        let x = curve.point(int(0), int(2));
        let y = curve.point(int(-1), int(-2));

        let sum = x.add(&y).unwrap();
        assert_eq!(sum, curve.point(int(17), int(65465)));
    }

    #[test]
    fn test_non_canonical_operands_of_same_point() {
        let curve = toy_curve();
        let g = curve.point(int(16), int(5));
        let g_alias = curve.point(int(39), int(-18));

        assert_eq!(g_alias.add(&g).unwrap(), curve.point(int(20), int(20)));
        assert!(g_alias.add(&g.inverse()).unwrap().is_identity());
    }

    #[test]
    fn test_no_inverse_for_composite_modulus() {
        let curve = Curve::new(int(0), int(7), int(15));
        let p = curve.point(int(4), int(1));
        let q = curve.point(int(1), int(2));

        assert_eq!(
            p.add(&q),
            Err(CurveError::NoModularInverse {
                value: int(3),
                modulus: int(15)
            })
        );

        let r = curve.point(int(1), int(3));
        assert!(matches!(
            r.double(),
            Err(CurveError::NoModularInverse { .. })
        ));
    }

    #[test]
    fn test_set_isolation() {
        let curve = toy_curve();
        let src = curve.point(int(16), int(5));
        let mut dst = curve.identity();

        dst.set(&src);
        assert_eq!(dst, src);
        assert!(!dst.is_identity());

        dst.set(&src.double().unwrap());
        assert_eq!(dst, curve.point(int(20), int(20)));
        assert_eq!(src, curve.point(int(16), int(5)));

        dst.set(&curve.identity());
        assert!(dst.is_identity());
        assert_eq!(src.coordinates(), Some((&int(16), &int(5))));
    }

    #[test]
    fn test_add_leaves_operands_untouched() {
        let curve = toy_curve();
        let g = curve.point(int(16), int(-18));
        let h = g.clone();
        let _ = g.add(&h).unwrap();

        assert_eq!(g.coordinates(), Some((&int(16), &int(-18))));
        assert_eq!(h.coordinates(), Some((&int(16), &int(-18))));
    }

    #[test]
    fn test_display() {
        let curve = toy_curve();
        assert_eq!(curve.point(int(16), int(5)).to_string(), "(16, 5)");
        assert_eq!(curve.identity().to_string(), "O");
    }
}
