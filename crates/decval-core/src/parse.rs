//! Strict numeric-literal grammar for decimal coercion.
//!
//! Accepted shapes, with one optional leading `+`/`-`:
//! - `NaN` / `Infinity` words (case-insensitive)
//! - decimal literals `123`, `1.5`, `.5`, `1.`, with an optional
//!   case-insensitive `e` exponent (`468.75e-4`)
//! - radix literals with case-insensitive `0b`/`0o`/`0x` prefixes, an
//!   optional fractional radix point (`0xff.8`), and an optional
//!   case-insensitive `p` power-of-two exponent (`0x1.8p-5`)
//!
//! Anything else is rejected: surrounding whitespace, doubled signs or
//! radix points, empty digit runs (`""`, `"23e"`, `"e4"`, `"."`).

use crate::value::{DecimalValue, Sign};
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

///
/// ParseDecimalError
///

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseDecimalError {
    #[error("{0:?} is not a valid decimal literal")]
    Invalid(String),

    #[error("{0:?} is outside the representable decimal range")]
    OutOfRange(String),
}

/// Parse a literal into a [`DecimalValue`].
///
/// Finite results are normalized (trailing fractional zeros dropped) and
/// carry the literal's sign, so `"-0"` stays a negative zero.
pub fn parse_decimal(input: &str) -> Result<DecimalValue, ParseDecimalError> {
    let invalid = || ParseDecimalError::Invalid(input.to_string());

    let (neg, body) = split_sign(input).ok_or_else(invalid)?;

    if body.eq_ignore_ascii_case("nan") {
        return Ok(DecimalValue::Nan);
    }
    if body.eq_ignore_ascii_case("infinity") {
        let sign = if neg { Sign::Negative } else { Sign::Positive };
        return Ok(DecimalValue::Infinity(sign));
    }

    match split_radix_prefix(body) {
        Some((radix, digits)) => parse_radix(input, digits, radix, neg),
        None => parse_dec(input, body, neg),
    }
}

/// Strip at most one leading sign. `None` when nothing follows it.
fn split_sign(input: &str) -> Option<(bool, &str)> {
    let (neg, rest) = match input.as_bytes().first()? {
        b'-' => (true, &input[1..]),
        b'+' => (false, &input[1..]),
        _ => (false, input),
    };

    if rest.is_empty() { None } else { Some((neg, rest)) }
}

fn split_radix_prefix(body: &str) -> Option<(u32, &str)> {
    let bytes = body.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }

    match bytes[1] {
        b'b' | b'B' => Some((2, &body[2..])),
        b'o' | b'O' => Some((8, &body[2..])),
        b'x' | b'X' => Some((16, &body[2..])),
        _ => None,
    }
}

/// Split off a trailing exponent introduced by `marker` (case-insensitive).
///
/// The exponent must be an optional sign followed by at least one ascii
/// digit. Returns `None` on a malformed exponent.
fn split_exponent(body: &str, marker: char) -> Option<(&str, Option<&str>)> {
    let Some(pos) = body
        .char_indices()
        .find(|(_, c)| c.eq_ignore_ascii_case(&marker))
        .map(|(i, _)| i)
    else {
        return Some((body, None));
    };

    let mantissa = &body[..pos];
    let exp = &body[pos + 1..];

    let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some((mantissa, Some(exp)))
}

/// Split a mantissa on its radix point and validate every digit.
///
/// Grammar: `D+(.D*)?` or `.D+` where `D` is a digit of `radix`.
fn split_mantissa(mantissa: &str, radix: u32) -> Option<(&str, &str)> {
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, f),
        None => (mantissa, ""),
    };

    // `.5`, `5.`, and `5` are fine; a bare `.` (or empty mantissa) is not.
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let all_digits = |s: &str| s.chars().all(|c| c.to_digit(radix).is_some());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }

    Some((int_part, frac_part))
}

fn parse_dec(input: &str, body: &str, neg: bool) -> Result<DecimalValue, ParseDecimalError> {
    let invalid = || ParseDecimalError::Invalid(input.to_string());
    let out_of_range = || ParseDecimalError::OutOfRange(input.to_string());

    let (mantissa, exp) = split_exponent(body, 'e').ok_or_else(invalid)?;
    let (int_part, frac_part) = split_mantissa(mantissa, 10).ok_or_else(invalid)?;

    // Normalize the mantissa shape for the engine: `.5` -> `0.5`, `1.` -> `1`.
    let mantissa = if frac_part.is_empty() {
        int_part.to_string()
    } else if int_part.is_empty() {
        format!("0.{frac_part}")
    } else {
        format!("{int_part}.{frac_part}")
    };

    // The grammar is already validated, so any engine failure from here on
    // is a representability limit, not a syntax problem.
    let magnitude = match exp {
        Some(exp) => {
            let exp = exp.strip_prefix('+').unwrap_or(exp);
            Decimal::from_scientific(&format!("{mantissa}e{exp}")).map_err(|_| out_of_range())?
        }
        None => Decimal::from_str(&mantissa).map_err(|_| out_of_range())?,
    };

    Ok(finish(magnitude, neg))
}

fn parse_radix(
    input: &str,
    body: &str,
    radix: u32,
    neg: bool,
) -> Result<DecimalValue, ParseDecimalError> {
    let invalid = || ParseDecimalError::Invalid(input.to_string());
    let out_of_range = || ParseDecimalError::OutOfRange(input.to_string());

    let (mantissa, exp) = split_exponent(body, 'p').ok_or_else(invalid)?;
    let (int_part, frac_part) = split_mantissa(mantissa, radix).ok_or_else(invalid)?;

    let exp = match exp {
        Some(exp) => Some(exp.parse::<i64>().map_err(|_| out_of_range())?),
        None => None,
    };

    let base = Decimal::from(radix);
    let mut value = Decimal::ZERO;

    for c in int_part.chars() {
        // split_mantissa vetted every digit
        let digit = c.to_digit(radix).ok_or_else(invalid)?;
        value = value
            .checked_mul(base)
            .and_then(|v| v.checked_add(Decimal::from(digit)))
            .ok_or_else(out_of_range)?;
    }

    if !frac_part.is_empty() {
        let mut numerator = Decimal::ZERO;
        let mut denominator = Decimal::ONE;

        for c in frac_part.chars() {
            let digit = c.to_digit(radix).ok_or_else(invalid)?;
            numerator = numerator
                .checked_mul(base)
                .and_then(|v| v.checked_add(Decimal::from(digit)))
                .ok_or_else(out_of_range)?;
            denominator = denominator.checked_mul(base).ok_or_else(out_of_range)?;
        }

        let fraction = numerator.checked_div(denominator).ok_or_else(out_of_range)?;
        value = value.checked_add(fraction).ok_or_else(out_of_range)?;
    }

    // `p` scales by a power of two regardless of the mantissa radix.
    if let Some(p) = exp
        && !value.is_zero()
    {
        if p >= 0 {
            for _ in 0..p {
                value = value.checked_mul(Decimal::TWO).ok_or_else(out_of_range)?;
            }
        } else {
            for _ in 0..p.unsigned_abs() {
                value /= Decimal::TWO;
                if value.is_zero() {
                    break;
                }
            }
        }
    }

    Ok(finish(value, neg))
}

fn finish(magnitude: Decimal, neg: bool) -> DecimalValue {
    let mut d = magnitude.normalize();
    d.set_sign_negative(neg);
    DecimalValue::Finite(d)
}

///
/// TESTS
///
