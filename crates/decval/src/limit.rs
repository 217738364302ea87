use crate::{
    context::{Context, RefPath},
    error::{ErrorKind, SchemaError, ValidateError},
    raw::RawInput,
};
use decval_core::DecimalValue;

///
/// Limit
///
/// Operand of a comparative rule: a literal decimal fixed at schema-build
/// time, or a deferred reference resolved against the validation context on
/// every validation call.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Limit {
    Literal(DecimalValue),
    Reference(RefPath),
}

impl Limit {
    /// Build a literal limit, parsing it eagerly. An unparsable literal is
    /// a schema-build-time error, never a deferred validation failure.
    pub fn literal(raw: impl Into<RawInput>) -> Result<Self, SchemaError> {
        let raw = raw.into();

        raw.to_decimal()
            .map(Self::Literal)
            .map_err(|source| SchemaError::InvalidLimit {
                raw: raw.to_string(),
                source,
            })
    }

    #[must_use]
    pub fn reference(path: impl Into<RefPath>) -> Self {
        Self::Reference(path.into())
    }

    /// Resolve to a concrete decimal for one validation call.
    ///
    /// A reference must first resolve, then pass the limit shape check
    /// (text, number incl. NaN/±Infinity, or an already-typed decimal),
    /// and only then is it parsed. Any miss is a `decimal.ref` failure
    /// carrying the field value and the offending reference.
    pub(crate) fn resolve(
        &self,
        field: &DecimalValue,
        ctx: &Context,
    ) -> Result<DecimalValue, ValidateError> {
        match self {
            Self::Literal(value) => Ok(*value),
            Self::Reference(path) => {
                let ref_error = |limit: String| {
                    ValidateError::new(ErrorKind::Ref, field.to_string()).with_limit(limit)
                };

                let resolved = ctx.resolve(path).ok_or_else(|| ref_error(path.to_string()))?;

                match resolved {
                    RawInput::Text(_) | RawInput::Number(_) | RawInput::Decimal(_) => resolved
                        .to_decimal()
                        .map_err(|_| ref_error(resolved.to_string())),
                    RawInput::Absent | RawInput::Bool(_) => {
                        Err(ref_error(resolved.to_string()))
                    }
                }
            }
        }
    }
}

///
/// TESTS
///
