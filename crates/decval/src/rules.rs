use crate::{
    context::Context,
    error::{ErrorKind, ValidateError},
    limit::Limit,
};
use decval_core::DecimalValue;

///
/// Rule
///
/// The closed catalog of decimal rules. Predicates take no operand;
/// comparisons carry a [`Limit`]. Dispatch is exhaustive; adding a rule
/// means adding a variant.
///

#[remain::sorted]
#[derive(Clone, Debug, PartialEq)]
pub enum Rule {
    /// Not NaN and not ±Infinity.
    Finite,
    /// Strictly greater than the limit.
    Greater(Limit),
    /// No fractional component.
    Integer,
    /// Strictly less than the limit.
    Less(Limit),
    /// Less than or equal to the limit.
    Max(Limit),
    /// Greater than or equal to the limit.
    Min(Limit),
    /// Is the NaN sentinel.
    Nan,
    /// Sign bit set (negative zero counts).
    Negative,
    /// Sign bit unset (positive zero and +Infinity count).
    Positive,
    /// Numerically zero, either sign.
    Zero,
}

impl Rule {
    /// Check one already-coerced value. Comparisons resolve their limit
    /// against `ctx` first; NaN on either side fails every comparison.
    pub(crate) fn apply(
        &self,
        value: &DecimalValue,
        ctx: &Context,
    ) -> Result<(), ValidateError> {
        match self {
            Self::Finite => predicate(value, DecimalValue::is_finite, ErrorKind::Finite),
            Self::Integer => predicate(value, DecimalValue::is_integer, ErrorKind::Integer),
            Self::Nan => predicate(value, DecimalValue::is_nan, ErrorKind::Nan),
            Self::Negative => predicate(value, DecimalValue::is_negative, ErrorKind::Negative),
            Self::Positive => predicate(value, DecimalValue::is_positive, ErrorKind::Positive),
            Self::Zero => predicate(value, DecimalValue::is_zero, ErrorKind::Zero),
            Self::Greater(limit) => compare(value, limit, ctx, DecimalValue::gt, ErrorKind::Greater),
            Self::Less(limit) => compare(value, limit, ctx, DecimalValue::lt, ErrorKind::Less),
            Self::Max(limit) => compare(value, limit, ctx, DecimalValue::lte, ErrorKind::Max),
            Self::Min(limit) => compare(value, limit, ctx, DecimalValue::gte, ErrorKind::Min),
        }
    }
}

fn predicate(
    value: &DecimalValue,
    holds: fn(&DecimalValue) -> bool,
    kind: ErrorKind,
) -> Result<(), ValidateError> {
    if holds(value) {
        Ok(())
    } else {
        Err(ValidateError::new(kind, value.to_string()))
    }
}

fn compare(
    value: &DecimalValue,
    limit: &Limit,
    ctx: &Context,
    holds: fn(&DecimalValue, &DecimalValue) -> bool,
    kind: ErrorKind,
) -> Result<(), ValidateError> {
    let resolved = limit.resolve(value, ctx)?;

    if holds(value, &resolved) {
        Ok(())
    } else {
        Err(ValidateError::new(kind, value.to_string()).with_limit(resolved.to_string()))
    }
}

///
/// TESTS
///
