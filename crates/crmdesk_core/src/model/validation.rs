//! Form-level validation rules shared by create and update paths.
//!
//! # Responsibility
//! - Reject blank required fields, non-positive amounts, and malformed
//!   email/website values before they reach a store.
//!
//! # Invariants
//! - Rules are pure; they never consult store state.
//! - Optional fields are only format-checked when non-blank.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::error::Error;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email regex"));
static WEBSITE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://.+").expect("valid website regex"));

/// Validation failure for caller-supplied record data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is empty after trim.
    Required(&'static str),
    /// Amount must be strictly greater than zero.
    NotPositive(&'static str),
    /// Value does not look like an email address.
    InvalidEmail(String),
    /// Value is not an `http://` or `https://` URL.
    InvalidWebsite(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required(field) => write!(f, "{field} is required"),
            Self::NotPositive(field) => write!(f, "{field} must be a positive number"),
            Self::InvalidEmail(value) => write!(f, "invalid email address: `{value}`"),
            Self::InvalidWebsite(value) => {
                write!(f, "invalid website `{value}`: expected http:// or https://")
            }
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

pub(crate) fn require_positive(field: &'static str, value: Decimal) -> Result<(), ValidationError> {
    if value <= Decimal::ZERO {
        return Err(ValidationError::NotPositive(field));
    }
    Ok(())
}

pub(crate) fn optional_email(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && !EMAIL_RE.is_match(trimmed) {
        return Err(ValidationError::InvalidEmail(trimmed.to_string()));
    }
    Ok(())
}

pub(crate) fn optional_website(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && !WEBSITE_RE.is_match(trimmed) {
        return Err(ValidationError::InvalidWebsite(trimmed.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{optional_email, optional_website, require, require_positive, ValidationError};
    use rust_decimal::Decimal;

    #[test]
    fn require_rejects_whitespace_only() {
        assert_eq!(require("name", "   "), Err(ValidationError::Required("name")));
        assert!(require("name", " Ana ").is_ok());
    }

    #[test]
    fn require_positive_rejects_zero_and_negative() {
        assert!(require_positive("value", Decimal::ZERO).is_err());
        assert!(require_positive("value", Decimal::new(-5, 0)).is_err());
        assert!(require_positive("value", Decimal::new(1, 2)).is_ok());
    }

    #[test]
    fn email_and_website_formats_are_checked_only_when_present() {
        assert!(optional_email("").is_ok());
        assert!(optional_email("sales@acme.io").is_ok());
        assert!(matches!(
            optional_email("not-an-email"),
            Err(ValidationError::InvalidEmail(_))
        ));

        assert!(optional_website("").is_ok());
        assert!(optional_website("https://acme.io").is_ok());
        assert!(matches!(
            optional_website("acme.io"),
            Err(ValidationError::InvalidWebsite(_))
        ));
    }
}
