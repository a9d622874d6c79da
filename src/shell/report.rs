//! One printed line of a section's results.

use std::fmt;

use crate::calculator::MathResult;

/// A labelled result line. Failed operations carry the error message in
/// place of the value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportLine {
    /// What was computed, e.g. "Square root".
    pub label: String,
    /// The formatted value, or the error message.
    pub text: String,
    /// Whether `text` is an error message.
    pub is_error: bool,
}

impl ReportLine {
    pub fn value(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
            is_error: false,
        }
    }

    /// Build a line from a fallible operation, rendering the success value.
    pub fn from_result<T>(
        label: impl Into<String>,
        result: MathResult<T>,
        render: impl FnOnce(T) -> String,
    ) -> Self {
        match result {
            Ok(value) => Self::value(label, render(value)),
            Err(err) => Self {
                label: label.into(),
                text: err.to_string(),
                is_error: true,
            },
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.text)
    }
}
