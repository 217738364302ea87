//! Property tests over the coercion and rule pipeline.

use decval::prelude::*;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn arb_decimal() -> impl Strategy<Value = Decimal> {
    (any::<i64>(), 0u32..=20).prop_map(|(m, scale)| Decimal::new(m, scale))
}

fn arb_value() -> impl Strategy<Value = DecimalValue> {
    prop_oneof![
        arb_decimal().prop_map(DecimalValue::from),
        Just(DecimalValue::NEG_INFINITY),
        Just(DecimalValue::POS_INFINITY),
        Just(DecimalValue::Nan),
    ]
}

proptest! {
    // Coercing a number never errors for finite doubles.
    #[test]
    fn finite_doubles_coerce(f in -1e18f64..1e18f64) {
        let schema = DecimalSchema::new();
        let out = schema.validate(&RawInput::from(f), &Context::new(), &Prefs::default());
        prop_assert!(out.is_ok());
    }

    // Shape predicates are pure: asking twice gives the same answer for
    // every shape, sentinels included.
    #[test]
    fn predicates_are_idempotent(value in arb_value()) {
        for predicate in [
            DecimalValue::is_finite,
            DecimalValue::is_integer,
            DecimalValue::is_nan,
            DecimalValue::is_negative,
            DecimalValue::is_positive,
            DecimalValue::is_zero,
        ] {
            prop_assert_eq!(predicate(&value), predicate(&value));
        }
    }

    // Running the same schema over the same input twice gives the same
    // outcome, success or failure.
    #[test]
    fn validation_is_deterministic(value in arb_value()) {
        let schema = DecimalSchema::new()
            .finite()
            .max(Limit::literal(RawInput::Decimal(DecimalValue::ZERO)).unwrap());
        let raw = RawInput::Decimal(value);
        let ctx = Context::new();
        let prefs = Prefs::default();

        prop_assert_eq!(
            schema.validate(&raw, &ctx, &prefs),
            schema.validate(&raw, &ctx, &prefs)
        );
    }

    // The four comparison rules agree with the value's own ordering; NaN on
    // either side fails all of them.
    #[test]
    fn comparisons_follow_ordering(a in arb_value(), b in arb_value()) {
        let ctx = Context::new();
        let prefs = Prefs::default();
        let limit = Limit::literal(RawInput::Decimal(b)).unwrap();
        let schema = DecimalSchema::new().greater(limit);
        let outcome = schema.validate(&RawInput::Decimal(a), &ctx, &prefs);

        match a.cmp_ieee(&b) {
            Some(std::cmp::Ordering::Greater) => prop_assert!(outcome.is_ok()),
            _ => prop_assert!(outcome.is_err()),
        }
    }

    // min(x) and max(x) together accept exactly x.
    #[test]
    fn min_max_pin_value(d in arb_decimal()) {
        let value = DecimalValue::from(d);
        let schema = DecimalSchema::new()
            .min(Limit::literal(RawInput::Decimal(value)).unwrap())
            .max(Limit::literal(RawInput::Decimal(value)).unwrap());

        let outcome = schema.validate(
            &RawInput::Decimal(value),
            &Context::new(),
            &Prefs::default(),
        );
        prop_assert!(outcome.is_ok());
    }
}
