//! Exact-match enum filters with an "All" sentinel.

use crate::model::Labeled;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Sentinel accepted wherever a status/type/stage filter is parsed.
pub const ALL_SENTINEL: &str = "All";

/// Equality filter over a labeled enum. `All` lets every record through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: Labeled> Filter<T> {
    /// Parses a UI filter parameter.
    ///
    /// `""` and `"All"` mean no filtering; any other value must be an exact
    /// variant label.
    pub fn parse(raw: &str) -> Result<Self, FilterParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == ALL_SENTINEL {
            return Ok(Self::All);
        }
        T::from_label(trimmed)
            .map(Self::Only)
            .ok_or_else(|| FilterParseError {
                value: trimmed.to_string(),
                expected: T::VARIANTS.iter().map(|variant| variant.label()).collect(),
            })
    }

    pub fn matches(&self, value: T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => *expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => ALL_SENTINEL,
            Self::Only(value) => value.label(),
        }
    }
}

impl<T: Labeled> FromStr for Filter<T> {
    type Err = FilterParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl<T> From<T> for Filter<T> {
    fn from(value: T) -> Self {
        Self::Only(value)
    }
}

/// Filter parameter did not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParseError {
    pub value: String,
    pub expected: Vec<&'static str>,
}

impl Display for FilterParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown filter value `{}`; expected {}|{}",
            self.value,
            ALL_SENTINEL,
            self.expected.join("|")
        )
    }
}

impl Error for FilterParseError {}
