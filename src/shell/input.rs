//! Console input validation.
//!
//! Decides whether a line typed at a prompt is a usable number or menu
//! choice. Anything rejected here makes the shell prompt again.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Decimal number with optional sign, thousands separators, fraction and exponent.
    /// Rejects `inf`, `nan` and other spellings `f64::from_str` would accept.
    static ref NUMBER: Regex = Regex::new(
        r"^[+-]?(?:(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$"
    ).unwrap();

    /// Whole number with optional sign.
    static ref INTEGER: Regex = Regex::new(r"^[+-]?\d+$").unwrap();
}

/// Parse a real number typed by the user.
pub fn parse_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if !NUMBER.is_match(trimmed) {
        return None;
    }

    let cleaned: String = trimmed.chars().filter(|&c| c != ',').collect();
    cleaned.parse().ok()
}

/// Parse a menu choice. Values that do not fit an `i64` are rejected.
pub fn parse_choice(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    if !INTEGER.is_match(trimmed) {
        return None;
    }
    trimmed.parse().ok()
}

/// Return `value` as an integer if it has no fractional part and lies in `0..=max`.
pub fn as_bounded_integer(value: f64, max: i64) -> Option<i64> {
    if value.fract() != 0.0 || value < 0.0 || value > max as f64 {
        return None;
    }
    Some(value as i64)
}
