use crate::{
    coerce::{Coerced, PrecisionConfig, coerce},
    context::Context,
    error::{SchemaError, ValidateError},
    limit::Limit,
    raw::RawInput,
    rules::Rule,
};
use decval_core::{DecimalValue, RoundingMode, RoundingPolicy};

///
/// Prefs
///
/// Global validation preferences from the host framework. `convert` decides
/// whether coercion/rounding replaces the field value or the raw input is
/// passed through.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Prefs {
    pub convert: bool,
}

impl Default for Prefs {
    fn default() -> Self {
        Self { convert: true }
    }
}

///
/// Outcome
///
/// Per-field validation result on success.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The empty sentinel, unchanged; no rules ran.
    Absent,
    /// `convert` was off; the raw input parsed and is returned untouched.
    Unconverted(RawInput),
    /// The coerced decimal after every declared rule passed.
    Value(DecimalValue),
}

///
/// DecimalSchema
///
/// A schema node for one decimal field: precision configuration, the
/// rounding policy, and the declared rules in order. Built once, validated
/// against many times.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecimalSchema {
    precision: PrecisionConfig,
    policy: RoundingPolicy,
    rules: Vec<Rule>,
}

impl DecimalSchema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build with an explicit rounding policy instead of the half-up
    /// default. Use [`RoundingPolicy::ambient`] to adopt the process-wide
    /// override.
    #[must_use]
    pub fn with_policy(policy: RoundingPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    ///
    /// CONFIGURATION
    ///

    /// Round coerced values to `significant_digits` significant digits.
    ///
    /// Pure configuration: the rounding itself happens inside coercion, so
    /// it applies before any rule runs. Fails at build time on a
    /// non-positive digit count.
    pub fn precision(
        mut self,
        significant_digits: u32,
        rounding_mode: Option<RoundingMode>,
    ) -> Result<Self, SchemaError> {
        if significant_digits == 0 {
            return Err(SchemaError::ZeroSignificantDigits);
        }

        self.precision = PrecisionConfig {
            significant_digits: Some(significant_digits),
            rounding_mode,
        };

        Ok(self)
    }

    ///
    /// PREDICATE RULES
    ///

    #[must_use]
    pub fn finite(self) -> Self {
        self.rule(Rule::Finite)
    }

    #[must_use]
    pub fn integer(self) -> Self {
        self.rule(Rule::Integer)
    }

    #[must_use]
    pub fn nan(self) -> Self {
        self.rule(Rule::Nan)
    }

    #[must_use]
    pub fn negative(self) -> Self {
        self.rule(Rule::Negative)
    }

    #[must_use]
    pub fn positive(self) -> Self {
        self.rule(Rule::Positive)
    }

    #[must_use]
    pub fn zero(self) -> Self {
        self.rule(Rule::Zero)
    }

    ///
    /// COMPARATIVE RULES
    ///

    #[must_use]
    pub fn greater(self, limit: Limit) -> Self {
        self.rule(Rule::Greater(limit))
    }

    #[must_use]
    pub fn less(self, limit: Limit) -> Self {
        self.rule(Rule::Less(limit))
    }

    #[must_use]
    pub fn max(self, limit: Limit) -> Self {
        self.rule(Rule::Max(limit))
    }

    #[must_use]
    pub fn min(self, limit: Limit) -> Self {
        self.rule(Rule::Min(limit))
    }

    /// Append any rule; declaration order is evaluation order.
    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    ///
    /// VALIDATION
    ///

    /// Validate one raw field value against this node.
    ///
    /// Coercion runs first, exactly once; rules then run in declaration
    /// order and the first failure short-circuits the rest. The absent
    /// sentinel and the `convert`-off pass-through skip rules entirely.
    pub fn validate(
        &self,
        raw: &RawInput,
        ctx: &Context,
        prefs: &Prefs,
    ) -> Result<Outcome, ValidateError> {
        let value = match coerce(raw, &self.precision, &self.policy, prefs.convert)? {
            Coerced::Absent => return Ok(Outcome::Absent),
            Coerced::Raw(raw) => return Ok(Outcome::Unconverted(raw)),
            Coerced::Value(value) => value,
        };

        for rule in &self.rules {
            rule.apply(&value, ctx)?;
        }

        Ok(Outcome::Value(value))
    }
}

///
/// TESTS
///
