use decval_core::ParseDecimalError;
use std::fmt;
use thiserror::Error;

///
/// ErrorKind
///
/// Closed catalog of validation-time failure kinds. `code()` yields the
/// stable dotted identifier used by error consumers and language packs.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Input could not be parsed as a decimal.
    Base,
    /// Coerced value is NaN or ±Infinity.
    Finite,
    /// Coerced value is not strictly greater than the limit.
    Greater,
    /// Coerced value has a fractional component.
    Integer,
    /// Coerced value is not strictly less than the limit.
    Less,
    /// Coerced value exceeds the inclusive maximum.
    Max,
    /// Coerced value is below the inclusive minimum.
    Min,
    /// Coerced value is not NaN.
    Nan,
    /// Coerced value is not negative.
    Negative,
    /// Coerced value is not positive.
    Positive,
    /// A deferred limit reference did not resolve to a decimal-comparable
    /// value. The problem is with the limit, not the field.
    Ref,
    /// Coerced value is not zero.
    Zero,
}

impl ErrorKind {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Base => "decimal.base",
            Self::Finite => "decimal.finite",
            Self::Greater => "decimal.greater",
            Self::Integer => "decimal.integer",
            Self::Less => "decimal.less",
            Self::Max => "decimal.max",
            Self::Min => "decimal.min",
            Self::Nan => "decimal.nan",
            Self::Negative => "decimal.negative",
            Self::Positive => "decimal.positive",
            Self::Ref => "decimal.ref",
            Self::Zero => "decimal.zero",
        }
    }
}

///
/// ValidateError
///
/// A field-level validation failure: the kind, the offending value, and the
/// resolved limit when a comparison was involved. Returned to the caller,
/// never panicked across the boundary.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidateError {
    kind: ErrorKind,
    value: String,
    limit: Option<String>,
}

impl ValidateError {
    #[must_use]
    pub fn new(kind: ErrorKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            limit: None,
        }
    }

    #[must_use]
    pub fn with_limit(mut self, limit: impl Into<String>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Display form of the offending raw or coerced value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Display form of the resolved limit, for comparison and reference
    /// failures.
    #[must_use]
    pub fn limit(&self) -> Option<&str> {
        self.limit.as_deref()
    }

    fn limit_or_empty(&self) -> &str {
        self.limit.as_deref().unwrap_or("")
    }
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = &self.value;
        let limit = self.limit_or_empty();

        match self.kind {
            ErrorKind::Base => {
                write!(f, "\"{value}\" is not a Decimal or could not be cast to a Decimal")
            }
            ErrorKind::Finite => write!(f, "\"{value}\" is not a finite number"),
            ErrorKind::Greater => {
                write!(f, "\"{value}\" is lower or equal to the limit \"{limit}\"")
            }
            ErrorKind::Integer => write!(f, "\"{value}\" is not a valid integer"),
            ErrorKind::Less => {
                write!(f, "\"{value}\" is higher or equal to the limit \"{limit}\"")
            }
            ErrorKind::Max => write!(f, "\"{value}\" is higher than the limit \"{limit}\""),
            ErrorKind::Min => write!(f, "\"{value}\" is lower than the limit \"{limit}\""),
            ErrorKind::Nan => write!(f, "\"{value}\" is not NaN"),
            ErrorKind::Negative => write!(f, "\"{value}\" is positive"),
            ErrorKind::Positive => write!(f, "\"{value}\" is negative"),
            ErrorKind::Ref => write!(
                f,
                "reference \"{limit}\" is not a Decimal or could not be cast to a Decimal"
            ),
            ErrorKind::Zero => write!(f, "\"{value}\" is not zero"),
        }
    }
}

impl std::error::Error for ValidateError {}

///
/// SchemaError
///
/// Build-time configuration failures. Fatal to schema construction; these
/// never reach validation time.
///

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SchemaError {
    #[error("invalid literal limit {raw:?}: {source}")]
    InvalidLimit {
        raw: String,
        source: ParseDecimalError,
    },

    #[error("significant digits must be a positive integer")]
    ZeroSignificantDigits,
}

///
/// TESTS
///
