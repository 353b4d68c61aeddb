//! Pareto target distribution
//!
//! Inverse-CDF sampling for the standard Pareto distribution (scale 1, shape `b`):
//!
//! ```text
//! F(x)    = 1 - x^(-b)        for x >= 1
//! F^-1(u) = (1 - u)^(-1/b)
//! ```
//!
//! # Characteristics
//!
//! - Heavy right tail: most samples sit just above 1, a few are very large
//! - Smaller `b`: heavier tail, so after min-max scaling more keys crowd the low end
//! - Default `b` (1.5): strongly skewed key space

use super::Quantile;
use crate::error::KeyGenError;

/// Pareto quantile function with shape `b`
#[derive(Debug, Clone, Copy)]
pub struct ParetoQuantile {
    b: f64,
}

impl ParetoQuantile {
    pub fn new(b: f64) -> Result<Self, KeyGenError> {
        if !(b.is_finite() && b > 0.0) {
            return Err(KeyGenError::InvalidParameter {
                distribution: "pareto",
                name: "b",
                value: b,
                reason: "shape must be a positive finite number",
            });
        }
        Ok(Self { b })
    }
}

impl Quantile for ParetoQuantile {
    #[inline]
    fn quantile(&self, u: f64) -> f64 {
        (1.0 - u).powf(-1.0 / self.b)
    }
}
