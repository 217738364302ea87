use decval_core::{DecimalValue, ParseDecimalError, parse_decimal};
use derive_more::From;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// RawInput
///
/// The pre-coercion field value. `Absent` is the type system's empty
/// sentinel and the only shape coercion skips; falsy-but-present values
/// (`0`, `false`, `""`) still go through the parser. `Bool` exists exactly
/// to pin that contract: it always fails coercion, it is never silently
/// ignored.
///

#[derive(Clone, Debug, From, PartialEq, Deserialize, Serialize)]
pub enum RawInput {
    #[from(ignore)]
    Absent,
    Bool(bool),
    Decimal(DecimalValue),
    Number(f64),
    Text(String),
}

impl RawInput {
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Interpret the input as a decimal via the literal grammar.
    ///
    /// `Absent` and `Bool` are not decimal-shaped and fail outright; native
    /// floats map NaN/±Infinity onto the sentinels.
    pub fn to_decimal(&self) -> Result<DecimalValue, ParseDecimalError> {
        match self {
            Self::Text(s) => parse_decimal(s),
            Self::Number(f) => DecimalValue::from_f64(*f)
                .ok_or_else(|| ParseDecimalError::OutOfRange(f.to_string())),
            Self::Decimal(v) => Ok(*v),
            Self::Absent | Self::Bool(_) => {
                Err(ParseDecimalError::Invalid(self.to_string()))
            }
        }
    }
}

impl fmt::Display for RawInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, ""),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Decimal(v) => write!(f, "{v}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for RawInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for RawInput {
    fn from(n: i64) -> Self {
        Self::Decimal(DecimalValue::from(n))
    }
}

///
/// TESTS
///
