//! Menu-driven calculator for basic, advanced and trigonometric math.
//!
//! The [`calculator`] module holds the pure operations and the logging
//! [`MathService`](calculator::MathService) facade. The [`shell`] module is
//! the interactive front end that reads operands and prints results.

pub mod calculator;
pub mod config;
pub mod logging;
pub mod shell;
