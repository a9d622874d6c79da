//! Trigonometric functions and angle conversions. Angles are in radians.

use super::error::{MathError, MathResult};

/// Stateless provider of the trigonometric functions.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrigOperations;

impl TrigOperations {
    pub fn sin(&self, radians: f64) -> f64 {
        radians.sin()
    }

    pub fn cos(&self, radians: f64) -> f64 {
        radians.cos()
    }

    /// Tangent; grows without bound near odd multiples of pi/2.
    pub fn tan(&self, radians: f64) -> f64 {
        radians.tan()
    }

    /// Principal arc sine in `[-pi/2, pi/2]`.
    pub fn asin(&self, value: f64) -> MathResult<f64> {
        if is_outside_unit_range(value) {
            return Err(MathError::invalid_domain(
                "asin",
                "Arc sine is defined only for values between -1 and 1",
            ));
        }
        Ok(value.asin())
    }

    /// Principal arc cosine in `[0, pi]`.
    pub fn acos(&self, value: f64) -> MathResult<f64> {
        if is_outside_unit_range(value) {
            return Err(MathError::invalid_domain(
                "acos",
                "Arc cosine is defined only for values between -1 and 1",
            ));
        }
        Ok(value.acos())
    }

    pub fn atan(&self, value: f64) -> f64 {
        value.atan()
    }

    pub fn degrees_to_radians(&self, degrees: f64) -> f64 {
        degrees.to_radians()
    }

    pub fn radians_to_degrees(&self, radians: f64) -> f64 {
        radians.to_degrees()
    }
}

/// NaN is not outside the range; it propagates through `asin`/`acos`.
fn is_outside_unit_range(value: f64) -> bool {
    value < -1.0 || value > 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPS: f64 = 1e-3;

    fn ops() -> TrigOperations {
        TrigOperations
    }

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < EPS
    }

    #[test]
    fn test_sin() {
        assert!(close(ops().sin(0.0), 0.0));
        assert!(close(ops().sin(FRAC_PI_2), 1.0));
        assert!(close(ops().sin(PI), 0.0));
    }

    #[test]
    fn test_cos() {
        assert!(close(ops().cos(0.0), 1.0));
        assert!(close(ops().cos(FRAC_PI_2), 0.0));
        assert!(close(ops().cos(PI), -1.0));
    }

    #[test]
    fn test_tan() {
        assert!(close(ops().tan(0.0), 0.0));
        assert!(close(ops().tan(FRAC_PI_4), 1.0));
        assert!(ops().tan(FRAC_PI_2).abs() > 1e10);
    }

    #[test]
    fn test_asin() {
        assert!(close(ops().asin(0.0).unwrap(), 0.0));
        assert!(close(ops().asin(1.0).unwrap(), FRAC_PI_2));
        assert!(close(ops().asin(-1.0).unwrap(), -FRAC_PI_2));
    }

    #[test]
    fn test_asin_out_of_range() {
        let err = ops().asin(1.5).unwrap_err();
        assert!(err.is_invalid_domain());
        assert_eq!(err.to_string(), "Arc sine is defined only for values between -1 and 1");
        assert!(ops().asin(-1.0001).is_err());
    }

    #[test]
    fn test_acos() {
        assert!(close(ops().acos(1.0).unwrap(), 0.0));
        assert!(close(ops().acos(0.0).unwrap(), FRAC_PI_2));
        assert!(close(ops().acos(-1.0).unwrap(), PI));
    }

    #[test]
    fn test_acos_out_of_range() {
        assert!(ops().acos(2.0).unwrap_err().is_invalid_domain());
        assert!(ops().acos(-2.0).unwrap_err().is_invalid_domain());
    }

    #[test]
    fn test_nan_propagates() {
        assert!(ops().asin(f64::NAN).unwrap().is_nan());
        assert!(ops().acos(f64::NAN).unwrap().is_nan());
    }

    #[test]
    fn test_atan() {
        assert!(close(ops().atan(0.0), 0.0));
        assert!(close(ops().atan(1.0), FRAC_PI_4));
        assert!(ops().atan(1e300) < FRAC_PI_2 + EPS);
    }

    #[test]
    fn test_conversions() {
        assert!(close(ops().degrees_to_radians(180.0), PI));
        assert!(close(ops().degrees_to_radians(90.0), FRAC_PI_2));
        assert!(close(ops().radians_to_degrees(PI), 180.0));
        assert!(close(ops().radians_to_degrees(FRAC_PI_2), 90.0));
    }

    #[test]
    fn test_common_angles() {
        assert!(close(ops().sin(ops().degrees_to_radians(30.0)), 0.5));
        assert!(close(ops().cos(ops().degrees_to_radians(60.0)), 0.5));
        assert!(close(ops().tan(ops().degrees_to_radians(45.0)), 1.0));
    }
}
