//! Calculator core.
//!
//! This module provides:
//! - Three stateless operation providers (basic, advanced, trigonometric)
//! - The `MathError` failure taxonomy
//! - `MathService`, the logging facade the shell calls into

mod advanced;
mod basic;
mod error;
mod service;
mod trig;

pub use advanced::{AdvancedOperations, MAX_FACTORIAL_INPUT};
pub use basic::BasicOperations;
pub use error::{MathError, MathResult};
pub use service::MathService;
pub use trig::TrigOperations;
