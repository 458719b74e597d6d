//! String-encoded curve parameters, for loading curves from configuration.

use num_bigint::{BigInt, BigUint, Sign};
use serde::{Deserialize, Serialize};

use crate::{Curve, CurveError};

/// Curve parameters as they appear in configuration files.
///
/// Every value is a decimal string or a `0x`-prefixed hexadecimal string.
/// Coefficients and coordinates may carry a leading `-`.
///
/// ```
/// use curve::{Curve, CurveConfig};
///
/// let config = CurveConfig {
///     a: "9".into(),
///     b: "17".into(),
///     p: "0x17".into(),
///     base: None,
/// };
/// let curve = Curve::from_config(config).expect("valid parameters");
/// assert_eq!(curve.to_string(), "y^2 = x^3 + 9*x + 17 mod 23");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveConfig {
    pub a: String,
    pub b: String,
    pub p: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<BaseConfig>,
}

/// Base point coordinates and the order of the subgroup it generates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseConfig {
    pub x: String,
    pub y: String,
    pub order: String,
}

impl Curve {
    /// Build a curve from configuration, validating that every value parses,
    /// that `p >= 2`, and that a configured base order is at least 2.
    pub fn from_config(config: CurveConfig) -> Result<Self, CurveError> {
        Self::try_from(config)
    }
}

impl TryFrom<CurveConfig> for Curve {
    type Error = CurveError;

    fn try_from(config: CurveConfig) -> Result<Self, Self::Error> {
        let a = parse_int("a", &config.a)?;
        let b = parse_int("b", &config.b)?;
        let p = parse_int("p", &config.p)?;
        if p < BigInt::from(2u32) {
            return Err(CurveError::InvalidParameter {
                name: "p",
                reason: format!("modulus must be at least 2, got {p}"),
            });
        }

        let curve = Curve::new(a, b, p);
        let Some(base) = config.base else {
            return Ok(curve);
        };

        let x = parse_int("base.x", &base.x)?;
        let y = parse_int("base.y", &base.y)?;
        let order = parse_int("base.order", &base.order)?;
        let order = match order.to_biguint() {
            Some(order) if order >= BigUint::from(2u32) => order,
            _ => {
                return Err(CurveError::InvalidParameter {
                    name: "base.order",
                    reason: format!("group order must be at least 2, got {order}"),
                });
            }
        };

        Ok(curve.with_base_point(x, y, order))
    }
}

impl From<&Curve> for CurveConfig {
    fn from(curve: &Curve) -> Self {
        CurveConfig {
            a: curve.a().to_string(),
            b: curve.b().to_string(),
            p: curve.p().to_string(),
            base: curve.base().map(|base| BaseConfig {
                x: base.x.to_string(),
                y: base.y.to_string(),
                order: base.order.to_string(),
            }),
        }
    }
}

fn parse_int(name: &'static str, value: &str) -> Result<BigInt, CurveError> {
    let trimmed = value.trim();
    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (Sign::Minus, rest),
        None => (Sign::Plus, trimmed),
    };
    let (radix, digits) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, unsigned),
    };

    let magnitude =
        BigUint::parse_bytes(digits.as_bytes(), radix).ok_or_else(|| {
            CurveError::InvalidParameter {
                name,
                reason: format!("`{value}` is not a decimal or 0x-prefixed hex integer"),
            }
        })?;

    Ok(BigInt::from_biguint(sign, magnitude))
}
