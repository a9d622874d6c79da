//! Basic arithmetic: the four operators plus truncated remainder.

use super::error::{MathError, MathResult};

/// Stateless provider of the basic arithmetic operations.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicOperations;

impl BasicOperations {
    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    /// Divide `a` by `b`, failing when `b` is exactly zero.
    pub fn divide(&self, a: f64, b: f64) -> MathResult<f64> {
        if b == 0.0 {
            return Err(MathError::division_by_zero("divide"));
        }
        Ok(a / b)
    }

    /// Remainder of `a / b` with the sign of the dividend.
    ///
    /// This is the truncated remainder computed by Rust's `%` on floats, not
    /// the Euclidean one (`rem_euclid`).
    pub fn modulo(&self, a: f64, b: f64) -> MathResult<f64> {
        if b == 0.0 {
            return Err(MathError::division_by_zero("modulo"));
        }
        Ok(a % b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-3;

    fn ops() -> BasicOperations {
        BasicOperations
    }

    #[test]
    fn test_add() {
        assert!((ops().add(5.0, 3.0) - 8.0).abs() < EPS);
        assert!((ops().add(-5.0, 3.0) + 2.0).abs() < EPS);
        assert!(ops().add(-3.0, 3.0).abs() < EPS);
    }

    #[test]
    fn test_subtract() {
        assert!((ops().subtract(5.0, 3.0) - 2.0).abs() < EPS);
        assert!((ops().subtract(-5.0, 3.0) + 8.0).abs() < EPS);
        assert!((ops().subtract(-3.0, 3.0) + 6.0).abs() < EPS);
    }

    #[test]
    fn test_multiply() {
        assert!((ops().multiply(5.0, 3.0) - 15.0).abs() < EPS);
        assert!((ops().multiply(-5.0, 3.0) + 15.0).abs() < EPS);
        assert!(ops().multiply(0.0, 3.0).abs() < EPS);
    }

    #[test]
    fn test_divide() {
        assert_eq!(ops().divide(6.0, 3.0), Ok(2.0));
        assert_eq!(ops().divide(-6.0, 3.0), Ok(-2.0));
        assert_eq!(ops().divide(0.0, 3.0), Ok(0.0));
    }

    #[test]
    fn test_divide_by_zero() {
        let err = ops().divide(5.0, 0.0).unwrap_err();
        assert!(err.is_division_by_zero());
        assert_eq!(err.operation(), "divide");

        // Negative zero compares equal to zero.
        assert!(ops().divide(5.0, -0.0).is_err());
    }

    #[test]
    fn test_modulo() {
        assert_eq!(ops().modulo(7.0, 3.0), Ok(1.0));
        assert_eq!(ops().modulo(6.0, 3.0), Ok(0.0));
    }

    #[test]
    fn test_modulo_sign_follows_dividend() {
        assert_eq!(ops().modulo(-7.0, 3.0), Ok(-1.0));
        assert_eq!(ops().modulo(7.0, -3.0), Ok(1.0));
        assert!((ops().modulo(5.5, 2.0).unwrap() - 1.5).abs() < EPS);
    }

    #[test]
    fn test_modulo_by_zero() {
        let err = ops().modulo(5.0, 0.0).unwrap_err();
        assert!(err.is_division_by_zero());
        assert_eq!(err.to_string(), "Modulo by zero is not allowed");
    }

    #[test]
    fn test_non_finite_follows_ieee() {
        assert!(ops().add(f64::INFINITY, 1.0).is_infinite());
        assert!(ops().subtract(f64::INFINITY, f64::INFINITY).is_nan());
        assert!(ops().multiply(f64::NAN, 2.0).is_nan());
    }
}
