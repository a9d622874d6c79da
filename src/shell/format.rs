//! Fixed-precision number formatting for shell output.

/// Format `value` with exactly `decimals` fractional digits.
///
/// Non-finite values are spelled out instead of printed as `inf`/`NaN`.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        format!("{:.*}", decimals, value)
    }
}
