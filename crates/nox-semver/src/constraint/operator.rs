//! Operator types for version constraints

use std::fmt;
use thiserror::Error;

/// Primitive comparison operators of the range grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Equal (=)
    Equal,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Greater than (>)
    GreaterThan,
}

#[derive(Error, Debug)]
#[error("invalid operator \"{operator}\", expected one of: {expected}")]
pub struct InvalidOperatorError {
    operator: String,
    expected: String,
}

impl Op {
    /// Parse operator from string
    pub fn from_str(s: &str) -> Result<Self, InvalidOperatorError> {
        match s {
            "<" => Ok(Op::LessThan),
            "<=" => Ok(Op::LessThanOrEqual),
            "=" => Ok(Op::Equal),
            ">=" => Ok(Op::GreaterThanOrEqual),
            ">" => Ok(Op::GreaterThan),
            _ => Err(InvalidOperatorError {
                operator: s.to_string(),
                expected: Op::supported_operators().join(", "),
            }),
        }
    }

    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Op::LessThan => "<",
            Op::LessThanOrEqual => "<=",
            Op::Equal => "=",
            Op::GreaterThanOrEqual => ">=",
            Op::GreaterThan => ">",
        }
    }

    /// Get all supported operators
    pub fn supported_operators() -> &'static [&'static str] {
        &["<", "<=", "=", ">=", ">"]
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
