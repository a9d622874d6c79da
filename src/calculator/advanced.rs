//! Advanced numeric functions: powers, roots, factorial and logarithms.

use super::error::{MathError, MathResult};

/// Largest `n` whose factorial fits in an `i64`.
pub const MAX_FACTORIAL_INPUT: i64 = 20;

const LOG_DOMAIN: &str = "Logarithm is not defined for non-positive numbers";

/// Stateless provider of the advanced numeric functions.
#[derive(Clone, Copy, Debug, Default)]
pub struct AdvancedOperations;

impl AdvancedOperations {
    /// Raise `base` to `exponent`.
    ///
    /// Follows real exponentiation: a negative base with a fractional
    /// exponent yields NaN.
    pub fn power(&self, base: f64, exponent: f64) -> f64 {
        base.powf(exponent)
    }

    pub fn square_root(&self, x: f64) -> MathResult<f64> {
        if x < 0.0 {
            return Err(MathError::invalid_domain(
                "square_root",
                "Square root of negative number is not defined",
            ));
        }
        Ok(x.sqrt())
    }

    /// Real cube root, defined for negative inputs as well.
    pub fn cube_root(&self, x: f64) -> f64 {
        x.cbrt()
    }

    pub fn absolute(&self, x: f64) -> f64 {
        x.abs()
    }

    /// Compute `n!` as an exact integer.
    ///
    /// Inputs above [`MAX_FACTORIAL_INPUT`] wrap around instead of
    /// panicking; bounding `n` is the caller's job.
    pub fn factorial(&self, n: i64) -> MathResult<i64> {
        if n < 0 {
            return Err(MathError::invalid_domain(
                "factorial",
                "Factorial is not defined for negative numbers",
            ));
        }
        Ok((2..=n).fold(1i64, i64::wrapping_mul))
    }

    pub fn natural_log(&self, x: f64) -> MathResult<f64> {
        if x <= 0.0 {
            return Err(MathError::invalid_domain("natural_log", LOG_DOMAIN));
        }
        Ok(x.ln())
    }

    pub fn log10(&self, x: f64) -> MathResult<f64> {
        if x <= 0.0 {
            return Err(MathError::invalid_domain("log10", LOG_DOMAIN));
        }
        Ok(x.log10())
    }
}
