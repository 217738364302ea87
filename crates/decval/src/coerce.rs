use crate::{
    error::{ErrorKind, ValidateError},
    raw::RawInput,
};
use decval_core::{DecimalValue, RoundingMode, RoundingPolicy, to_significant_digits};
use serde::{Deserialize, Serialize};

///
/// PrecisionConfig
///
/// Per-node precision settings, fixed at schema-build time and read by
/// coercion on every validation pass. Without `significant_digits` no
/// rounding happens, whatever `rounding_mode` says; without `rounding_mode`
/// the policy's default applies.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct PrecisionConfig {
    pub significant_digits: Option<u32>,
    pub rounding_mode: Option<RoundingMode>,
}

///
/// Coerced
///
/// The three-way outcome of the Coercion Stage.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Coerced {
    /// The empty sentinel passed through untouched; no rules run.
    Absent,
    /// `convert` was off: the input parsed but keeps its raw shape, and
    /// later rules are skipped for this pass.
    Raw(RawInput),
    /// The coerced (and possibly rounded) decimal every rule receives.
    Value(DecimalValue),
}

/// Convert a raw field value into its canonical decimal form.
///
/// Runs exactly once per field per validation pass, before any rule. The
/// empty sentinel bypasses coercion entirely; every present value — numeral
/// zero, `false`, the empty string — must face the parser.
pub fn coerce(
    raw: &RawInput,
    precision: &PrecisionConfig,
    policy: &RoundingPolicy,
    convert: bool,
) -> Result<Coerced, ValidateError> {
    if raw.is_absent() {
        return Ok(Coerced::Absent);
    }

    let base = || ValidateError::new(ErrorKind::Base, raw.to_string());

    let mut value = raw.to_decimal().map_err(|_| base())?;

    if !convert {
        return Ok(Coerced::Raw(raw.clone()));
    }

    if let Some(sd) = precision.significant_digits {
        let mode = precision.rounding_mode.unwrap_or(policy.default_mode());
        value = to_significant_digits(value, sd, mode).map_err(|_| base())?;
    }

    Ok(Coerced::Value(value))
}

///
/// TESTS
///
