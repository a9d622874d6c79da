//! Facade over the three operation providers.
//!
//! Every call records one `info` event naming the operation and its operands
//! before delegating. Results and errors are passed through untouched.

use tracing::{debug, info};

use super::advanced::AdvancedOperations;
use super::basic::BasicOperations;
use super::error::{MathError, MathResult};
use super::trig::TrigOperations;

/// Single entry point for every calculator operation.
#[derive(Clone, Debug, Default)]
pub struct MathService {
    basic: BasicOperations,
    advanced: AdvancedOperations,
    trig: TrigOperations,
}

impl MathService {
    pub fn new() -> Self {
        Self::default()
    }

    // Basic operations

    pub fn add(&self, a: f64, b: f64) -> f64 {
        info!(operation = "add", a, b, "adding numbers");
        self.basic.add(a, b)
    }

    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        info!(operation = "subtract", a, b, "subtracting b from a");
        self.basic.subtract(a, b)
    }

    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        info!(operation = "multiply", a, b, "multiplying numbers");
        self.basic.multiply(a, b)
    }

    pub fn divide(&self, a: f64, b: f64) -> MathResult<f64> {
        info!(operation = "divide", a, b, "dividing a by b");
        self.basic.divide(a, b).inspect_err(log_failure)
    }

    pub fn modulo(&self, a: f64, b: f64) -> MathResult<f64> {
        info!(operation = "modulo", a, b, "calculating remainder");
        self.basic.modulo(a, b).inspect_err(log_failure)
    }

    // Advanced operations

    pub fn power(&self, base: f64, exponent: f64) -> f64 {
        info!(operation = "power", base, exponent, "raising base to exponent");
        self.advanced.power(base, exponent)
    }

    pub fn square_root(&self, x: f64) -> MathResult<f64> {
        info!(operation = "square_root", x, "calculating square root");
        self.advanced.square_root(x).inspect_err(log_failure)
    }

    pub fn cube_root(&self, x: f64) -> f64 {
        info!(operation = "cube_root", x, "calculating cube root");
        self.advanced.cube_root(x)
    }

    pub fn absolute(&self, x: f64) -> f64 {
        info!(operation = "absolute", x, "calculating absolute value");
        self.advanced.absolute(x)
    }

    pub fn factorial(&self, n: i64) -> MathResult<i64> {
        info!(operation = "factorial", n, "calculating factorial");
        self.advanced.factorial(n).inspect_err(log_failure)
    }

    pub fn natural_log(&self, x: f64) -> MathResult<f64> {
        info!(operation = "natural_log", x, "calculating natural logarithm");
        self.advanced.natural_log(x).inspect_err(log_failure)
    }

    pub fn log10(&self, x: f64) -> MathResult<f64> {
        info!(operation = "log10", x, "calculating base 10 logarithm");
        self.advanced.log10(x).inspect_err(log_failure)
    }

    // Trigonometric operations

    pub fn sin(&self, radians: f64) -> f64 {
        info!(operation = "sin", radians, "calculating sine");
        self.trig.sin(radians)
    }

    pub fn cos(&self, radians: f64) -> f64 {
        info!(operation = "cos", radians, "calculating cosine");
        self.trig.cos(radians)
    }

    pub fn tan(&self, radians: f64) -> f64 {
        info!(operation = "tan", radians, "calculating tangent");
        self.trig.tan(radians)
    }

    pub fn asin(&self, value: f64) -> MathResult<f64> {
        info!(operation = "asin", value, "calculating arc sine");
        self.trig.asin(value).inspect_err(log_failure)
    }

    pub fn acos(&self, value: f64) -> MathResult<f64> {
        info!(operation = "acos", value, "calculating arc cosine");
        self.trig.acos(value).inspect_err(log_failure)
    }

    pub fn atan(&self, value: f64) -> f64 {
        info!(operation = "atan", value, "calculating arc tangent");
        self.trig.atan(value)
    }

    pub fn degrees_to_radians(&self, degrees: f64) -> f64 {
        info!(operation = "degrees_to_radians", degrees, "converting degrees to radians");
        self.trig.degrees_to_radians(degrees)
    }

    pub fn radians_to_degrees(&self, radians: f64) -> f64 {
        info!(operation = "radians_to_degrees", radians, "converting radians to degrees");
        self.trig.radians_to_degrees(radians)
    }
}

fn log_failure(err: &MathError) {
    debug!(operation = err.operation(), error = %err, "operation failed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::E;
    use tracing_test::traced_test;

    const EPS: f64 = 1e-4;

    #[test]
    fn test_delegates_to_providers() {
        let service = MathService::new();
        assert_eq!(service.add(10.0, 5.0), 15.0);
        assert_eq!(service.subtract(10.0, 5.0), 5.0);
        assert_eq!(service.multiply(10.0, 5.0), 50.0);
        assert_eq!(service.divide(10.0, 5.0), Ok(2.0));
        assert_eq!(service.power(2.0, 8.0), 256.0);
        assert_eq!(service.square_root(16.0), Ok(4.0));
        assert_eq!(service.factorial(5), Ok(120));
        assert!((service.natural_log(E).unwrap() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_demo_angles() {
        let service = MathService::new();
        let sin30 = service.sin(service.degrees_to_radians(30.0));
        let cos60 = service.cos(service.degrees_to_radians(60.0));
        let tan45 = service.tan(service.degrees_to_radians(45.0));
        assert!((sin30 - 0.5).abs() < EPS);
        assert!((cos60 - 0.5).abs() < EPS);
        assert!((tan45 - 1.0).abs() < EPS);
    }

    #[test]
    fn test_errors_pass_through_unchanged() {
        let service = MathService::new();
        assert_eq!(
            service.divide(10.0, 0.0),
            BasicOperations.divide(10.0, 0.0)
        );
        assert_eq!(service.factorial(-3), AdvancedOperations.factorial(-3));
        assert_eq!(service.acos(1.1), TrigOperations.acos(1.1));
    }

    #[test]
    #[traced_test]
    fn test_logs_operation_and_operands() {
        let service = MathService::new();
        service.add(10.0, 5.0);

        assert!(logs_contain("adding numbers"));
        assert!(logs_contain("a=10"));
        assert!(logs_contain("b=5"));
    }

    #[test]
    #[traced_test]
    fn test_logs_before_failure() {
        let service = MathService::new();
        assert!(service.divide(10.0, 0.0).is_err());

        assert!(logs_contain("dividing a by b"));
        assert!(logs_contain("b=0"));
        assert!(logs_contain("Division by zero is not allowed"));
    }

    #[test]
    #[traced_test]
    fn test_logs_every_call() {
        let service = MathService::new();
        let _ = service.square_root(-4.0);
        service.atan(0.25);
        service.radians_to_degrees(1.0);

        assert!(logs_contain("calculating square root"));
        assert!(logs_contain("x=-4"));
        assert!(logs_contain("calculating arc tangent"));
        assert!(logs_contain("converting radians to degrees"));
    }
}
