//! End-to-end schema validation: raw input in, outcome or error out.

use decval::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

fn ok_value(schema: &DecimalSchema, raw: impl Into<RawInput>) -> DecimalValue {
    match schema
        .validate(&raw.into(), &Context::new(), &Prefs::default())
        .unwrap()
    {
        Outcome::Value(v) => v,
        other => panic!("expected a coerced value, got {other:?}"),
    }
}

fn fail_kind(schema: &DecimalSchema, raw: impl Into<RawInput>) -> ErrorKind {
    schema
        .validate(&raw.into(), &Context::new(), &Prefs::default())
        .unwrap_err()
        .kind()
}

// ---------------------
// coercion
// ---------------------

#[test]
fn coerces_numeric_string_without_rules() {
    let value = ok_value(&DecimalSchema::new(), "100");
    assert_eq!(value, DecimalValue::from(Decimal::from_str("100").unwrap()));
    assert_eq!(value.to_string(), "100");
}

#[test]
fn rejects_non_numeric_string() {
    assert_eq!(fail_kind(&DecimalSchema::new(), "wrong"), ErrorKind::Base);
}

#[test]
fn coerces_across_radices() {
    assert_eq!(ok_value(&DecimalSchema::new(), "0b101").to_string(), "5");
    assert_eq!(ok_value(&DecimalSchema::new(), "0o17").to_string(), "15");
    assert_eq!(ok_value(&DecimalSchema::new(), "0xff.8").to_string(), "255.5");
    assert_eq!(ok_value(&DecimalSchema::new(), "1.5e3").to_string(), "1500");
}

#[test]
fn coerces_special_words() {
    assert!(ok_value(&DecimalSchema::new(), "NaN").is_nan());
    assert!(ok_value(&DecimalSchema::new(), "-infinity").is_infinite());
    assert!(ok_value(&DecimalSchema::new(), f64::NAN).is_nan());
}

#[test]
fn base_error_message_quotes_the_input() {
    let err = DecimalSchema::new()
        .validate(&RawInput::from("wrong"), &Context::new(), &Prefs::default())
        .unwrap_err();

    assert_eq!(err.kind().code(), "decimal.base");
    assert_eq!(
        err.to_string(),
        "\"wrong\" is not a Decimal or could not be cast to a Decimal"
    );
}

// ---------------------
// precision
// ---------------------

#[test]
fn precision_round_down_formats_to_two_digits() {
    let schema = DecimalSchema::new()
        .precision(2, Some(RoundingMode::Down))
        .unwrap();

    assert_eq!(ok_value(&schema, 45.6).to_string(), "45");
}

#[test]
fn precision_pads_to_requested_digits() {
    let schema = DecimalSchema::new()
        .precision(5, Some(RoundingMode::Up))
        .unwrap();

    assert_eq!(ok_value(&schema, "45.6").to_string(), "45.600");
}

#[test]
fn precision_uses_policy_default_when_mode_unset() {
    let schema = DecimalSchema::with_policy(RoundingPolicy::new(RoundingMode::Floor))
        .precision(2, None)
        .unwrap();

    assert_eq!(ok_value(&schema, "-45.61").to_string(), "-46");
}

// ---------------------
// predicate rules
// ---------------------

#[test]
fn integer_rule_rejects_fractional_input() {
    let schema = DecimalSchema::new().integer();
    assert_eq!(fail_kind(&schema, 123.456), ErrorKind::Integer);
    assert!(ok_value(&DecimalSchema::new().integer(), "123").is_integer());
}

#[test]
fn negative_zero_is_negative_and_zero() {
    assert!(
        DecimalSchema::new()
            .negative()
            .validate(&RawInput::from("-0"), &Context::new(), &Prefs::default())
            .is_ok()
    );
    assert!(
        DecimalSchema::new()
            .zero()
            .validate(&RawInput::from("-0"), &Context::new(), &Prefs::default())
            .is_ok()
    );
    assert_eq!(
        fail_kind(&DecimalSchema::new().positive(), "-0"),
        ErrorKind::Positive
    );
}

#[test]
fn finite_rejects_sentinels() {
    let schema = DecimalSchema::new().finite();
    assert_eq!(fail_kind(&schema, "NaN"), ErrorKind::Finite);
    assert_eq!(fail_kind(&schema, "Infinity"), ErrorKind::Finite);
    assert!(ok_value(&schema, "1e20").is_finite());
}

#[test]
fn nan_rule_accepts_only_nan() {
    let schema = DecimalSchema::new().nan();
    assert!(ok_value(&schema, f64::NAN).is_nan());
    assert_eq!(fail_kind(&schema, "0"), ErrorKind::Nan);
}

// ---------------------
// comparative rules
// ---------------------

#[test]
fn literal_limits_compare() {
    let gt = DecimalSchema::new().greater(Limit::literal("3").unwrap());
    assert!(ok_value(&gt, "5").is_finite());
    assert_eq!(fail_kind(&gt, "3"), ErrorKind::Greater);

    let max = DecimalSchema::new().max(Limit::literal("5").unwrap());
    assert!(max
        .validate(&RawInput::from("5"), &Context::new(), &Prefs::default())
        .is_ok());
    assert_eq!(fail_kind(&max, "5.001"), ErrorKind::Max);
}

#[test]
fn reference_limit_failure_reports_resolved_value() {
    let schema = DecimalSchema::new().less(Limit::reference("$max"));
    let ctx = Context::new().with_value("$max", "3");

    let err = schema
        .validate(&RawInput::from("5"), &ctx, &Prefs::default())
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Less);
    assert_eq!(err.kind().code(), "decimal.less");
    assert_eq!(err.value(), "5");
    assert_eq!(err.limit(), Some("3"));
    assert_eq!(err.to_string(), "\"5\" is higher or equal to the limit \"3\"");
}

#[test]
fn reference_limit_success_when_context_satisfies() {
    let schema = DecimalSchema::new().less(Limit::reference("$max"));
    let ctx = Context::new().with_value("$max", "10");

    assert!(schema
        .validate(&RawInput::from("5"), &ctx, &Prefs::default())
        .is_ok());
}

#[test]
fn dangling_reference_is_a_ref_error() {
    let schema = DecimalSchema::new().min(Limit::reference("$floor"));
    let err = schema
        .validate(&RawInput::from("5"), &Context::new(), &Prefs::default())
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Ref);
    assert_eq!(err.limit(), Some("$floor"));
    assert_eq!(
        err.to_string(),
        "reference \"$floor\" is not a Decimal or could not be cast to a Decimal"
    );
}

#[test]
fn nan_input_fails_comparisons_not_ref() {
    let schema = DecimalSchema::new().greater(Limit::literal("0").unwrap());
    assert_eq!(fail_kind(&schema, "NaN"), ErrorKind::Greater);
}

// ---------------------
// presence and convert
// ---------------------

#[test]
fn absent_input_short_circuits_every_rule() {
    let schema = DecimalSchema::new().finite().zero().integer();
    assert_eq!(
        schema
            .validate(&RawInput::Absent, &Context::new(), &Prefs::default())
            .unwrap(),
        Outcome::Absent
    );
}

#[test]
fn convert_off_validates_parseability_only() {
    let prefs = Prefs { convert: false };
    let schema = DecimalSchema::new()
        .precision(1, Some(RoundingMode::Up))
        .unwrap()
        .zero();

    // Parses, so passes, but stays raw and unrounded with rules skipped.
    assert_eq!(
        schema
            .validate(&RawInput::from("45.6"), &Context::new(), &prefs)
            .unwrap(),
        Outcome::Unconverted(RawInput::from("45.6"))
    );

    // Unparsable input still fails even without conversion.
    assert_eq!(
        schema
            .validate(&RawInput::from("wrong"), &Context::new(), &prefs)
            .unwrap_err()
            .kind(),
        ErrorKind::Base
    );
}

// ---------------------
// rule chaining
// ---------------------

#[test]
fn chained_rules_evaluate_in_order() {
    let schema = DecimalSchema::new()
        .finite()
        .positive()
        .max(Limit::literal("100").unwrap());

    assert!(ok_value(&schema, "42.5").is_positive());
    assert_eq!(fail_kind(&schema, "-1"), ErrorKind::Positive);
    assert_eq!(fail_kind(&schema, "101"), ErrorKind::Max);
    assert_eq!(fail_kind(&schema, "Infinity"), ErrorKind::Finite);
}

#[test]
fn precision_applies_before_rules() {
    // 100.4 rounds to 100 at sd=3, so max(100) passes.
    let schema = DecimalSchema::new()
        .precision(3, Some(RoundingMode::HalfUp))
        .unwrap()
        .max(Limit::literal("100").unwrap());

    assert_eq!(ok_value(&schema, "100.4").to_string(), "100");
}
