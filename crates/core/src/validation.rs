//! Field-level validation primitives.
//!
//! Validation runs before any persistence attempt and collects every
//! violation instead of stopping at the first one, so clients see the full
//! list in a single response.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::status::UnknownStatus;

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// Ordered list of violations for one request body.
///
/// `Display` joins the messages with `", "`, which is the format used in
/// the failure envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// `Ok(value)` when nothing was recorded, otherwise `Err(self)`.
    pub fn finish<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&violation.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Trim surrounding whitespace, keeping an emptied string as `Some("")`.
pub fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string())
}

/// Length in Unicode scalar values, not bytes.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Record `message` when `value` is absent or empty. Returns the value when
/// it is present and non-empty.
pub fn require<'a>(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<&'a str>,
    message: &str,
) -> Option<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            errors.push(field, message);
            None
        }
    }
}

/// Record `message` when `value` is longer than `max` characters.
pub fn max_chars(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    max: usize,
    message: &str,
) {
    if char_len(value) > max {
        errors.push(field, message);
    }
}

/// Parse a status string, recording the enum violation on failure.
pub fn status<S>(errors: &mut ValidationErrors, value: &str) -> Option<S>
where
    S: FromStr<Err = UnknownStatus>,
{
    match value.parse::<S>() {
        Ok(status) => Some(status),
        Err(err) => {
            errors.push("status", err.to_string());
            None
        }
    }
}
