//! Operator types for version comparators

use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

/// Comparison operators for version comparators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (=)
    Equal,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
}

#[derive(Error, Debug)]
#[error("Invalid operator: {0}")]
pub struct InvalidOperatorError(pub String);

impl Operator {
    /// Parse operator from string. The empty token means equality.
    pub fn from_str(s: &str) -> Result<Self, InvalidOperatorError> {
        match s {
            "" | "=" => Ok(Operator::Equal),
            "<" => Ok(Operator::LessThan),
            "<=" => Ok(Operator::LessThanOrEqual),
            ">" => Ok(Operator::GreaterThan),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            _ => Err(InvalidOperatorError(s.to_string())),
        }
    }

    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
        }
    }

    /// Get all supported operator tokens, longest first.
    pub fn supported_operators() -> &'static [&'static str] {
        &["<=", ">=", "<", ">", "="]
    }

    /// True for `<` and `<=`.
    pub fn is_less_side(&self) -> bool {
        matches!(self, Operator::LessThan | Operator::LessThanOrEqual)
    }

    /// True for `>` and `>=`.
    pub fn is_greater_side(&self) -> bool {
        matches!(self, Operator::GreaterThan | Operator::GreaterThanOrEqual)
    }

    /// Whether an ordering outcome of `candidate.cmp(&bound)` satisfies this
    /// operator.
    pub fn matches(&self, ordering: Ordering) -> bool {
        match self {
            Operator::Equal => ordering == Ordering::Equal,
            Operator::LessThan => ordering == Ordering::Less,
            Operator::LessThanOrEqual => ordering != Ordering::Greater,
            Operator::GreaterThan => ordering == Ordering::Greater,
            Operator::GreaterThanOrEqual => ordering != Ordering::Less,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
