//! Failure taxonomy for the calculator operations.

/// Result alias used by every fallible calculator operation.
pub type MathResult<T> = Result<T, MathError>;

/// Error raised when an operation cannot produce a value for its inputs.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum MathError {
    /// A division or modulo was asked to divide by exactly zero.
    #[error("{} by zero is not allowed", divisor_noun(.operation))]
    DivisionByZero {
        /// Name of the operation that failed (`divide` or `modulo`).
        operation: &'static str,
    },

    /// An argument lies outside the mathematical domain of the function.
    #[error("{message}")]
    InvalidDomain {
        /// Name of the operation that failed.
        operation: &'static str,
        /// Human readable explanation shown to the user.
        message: &'static str,
    },
}

impl MathError {
    pub(crate) fn division_by_zero(operation: &'static str) -> Self {
        Self::DivisionByZero { operation }
    }

    pub(crate) fn invalid_domain(operation: &'static str, message: &'static str) -> Self {
        Self::InvalidDomain { operation, message }
    }

    /// Name of the operation that raised this error.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::DivisionByZero { operation } => *operation,
            Self::InvalidDomain { operation, .. } => *operation,
        }
    }

    /// Whether a zero divisor caused this error.
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }

    /// Whether an out-of-domain argument caused this error.
    pub fn is_invalid_domain(&self) -> bool {
        matches!(self, Self::InvalidDomain { .. })
    }
}

fn divisor_noun(operation: &str) -> &'static str {
    match operation {
        "modulo" => "Modulo",
        _ => "Division",
    }
}
