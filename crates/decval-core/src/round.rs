//! Rounding modes, significant-digit reduction, and the rounding policy.
//!
//! The process-wide default rounding mode is deliberately quarantined: it is
//! read exactly once, when [`RoundingPolicy::ambient`] snapshots it, and
//! never consulted mid-algorithm. Mutating it while validations run on other
//! threads is a documented hazard, not a supported pattern.

use crate::value::DecimalValue;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU8, Ordering};
use thiserror::Error;

/// The engine's maximum fractional scale.
const MAX_SCALE: u32 = 28;

///
/// RoundingMode
///
/// Tie-breaking/truncation policy for significant-digit reduction. The
/// discriminants match the conventional engine constants (up=0 … half-floor=8)
/// so the ambient atomic can store a mode directly.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[repr(u8)]
pub enum RoundingMode {
    /// Round toward +Infinity.
    Ceiling = 2,
    /// Round toward zero.
    Down = 1,
    /// Round toward -Infinity.
    Floor = 3,
    /// Round half-way cases toward +Infinity.
    HalfCeiling = 7,
    /// Round half-way cases toward zero.
    HalfDown = 5,
    /// Round half-way cases to the even neighbor.
    HalfEven = 6,
    /// Round half-way cases toward -Infinity.
    HalfFloor = 8,
    /// Round half-way cases away from zero.
    HalfUp = 4,
    /// Round away from zero.
    Up = 0,
}

impl RoundingMode {
    const fn from_u8(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Up),
            1 => Some(Self::Down),
            2 => Some(Self::Ceiling),
            3 => Some(Self::Floor),
            4 => Some(Self::HalfUp),
            5 => Some(Self::HalfDown),
            6 => Some(Self::HalfEven),
            7 => Some(Self::HalfCeiling),
            8 => Some(Self::HalfFloor),
            _ => None,
        }
    }

    /// Map onto the engine's strategy for an operand of the given sign.
    ///
    /// The engine has no directed half-way strategies, so half-ceiling and
    /// half-floor pick between the toward/away midpoint strategies based on
    /// the operand's sign.
    const fn strategy(self, negative: bool) -> RoundingStrategy {
        match self {
            Self::Up => RoundingStrategy::AwayFromZero,
            Self::Down => RoundingStrategy::ToZero,
            Self::Ceiling => RoundingStrategy::ToPositiveInfinity,
            Self::Floor => RoundingStrategy::ToNegativeInfinity,
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfDown => RoundingStrategy::MidpointTowardZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
            Self::HalfCeiling => {
                if negative {
                    RoundingStrategy::MidpointTowardZero
                } else {
                    RoundingStrategy::MidpointAwayFromZero
                }
            }
            Self::HalfFloor => {
                if negative {
                    RoundingStrategy::MidpointAwayFromZero
                } else {
                    RoundingStrategy::MidpointTowardZero
                }
            }
        }
    }
}

impl Default for RoundingMode {
    fn default() -> Self {
        Self::HalfUp
    }
}

///
/// Ambient default
///

static AMBIENT_ROUNDING: AtomicU8 = AtomicU8::new(RoundingMode::HalfUp as u8);

/// Replace the process-wide default rounding mode.
///
/// Only affects policies built afterwards via [`RoundingPolicy::ambient`];
/// policies already constructed keep their snapshot.
pub fn set_ambient_rounding_mode(mode: RoundingMode) {
    AMBIENT_ROUNDING.store(mode as u8, Ordering::Relaxed);
}

/// Read the current process-wide default rounding mode.
#[must_use]
pub fn ambient_rounding_mode() -> RoundingMode {
    // The atomic only ever holds values written from a RoundingMode.
    RoundingMode::from_u8(AMBIENT_ROUNDING.load(Ordering::Relaxed))
        .unwrap_or(RoundingMode::HalfUp)
}

///
/// RoundingPolicy
///
/// The fallback rounding mode coercion uses when a schema node sets a
/// precision without naming a mode. Passed explicitly through every
/// coercion call.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct RoundingPolicy {
    default_mode: RoundingMode,
}

impl RoundingPolicy {
    #[must_use]
    pub const fn new(default_mode: RoundingMode) -> Self {
        Self { default_mode }
    }

    /// Snapshot the process-wide default at the configuration boundary.
    #[must_use]
    pub fn ambient() -> Self {
        Self::new(ambient_rounding_mode())
    }

    #[must_use]
    pub const fn default_mode(&self) -> RoundingMode {
        self.default_mode
    }
}

impl Default for RoundingPolicy {
    fn default() -> Self {
        Self::new(RoundingMode::HalfUp)
    }
}

///
/// RoundError
///

#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("rounding to {significant_digits} significant digits left the representable range")]
pub struct RoundError {
    pub significant_digits: u32,
}

/// Reduce a value to `significant_digits` significant digits.
///
/// NaN and the infinities pass through unchanged. When the target precision
/// exceeds the value's digit count, the result is padded with trailing
/// fractional zeros (two significant digits of `4.5` is `4.5`; five is
/// `4.5000`).
///
/// `significant_digits` must be positive; callers enforce that at
/// schema-build time.
pub fn to_significant_digits(
    value: DecimalValue,
    significant_digits: u32,
    mode: RoundingMode,
) -> Result<DecimalValue, RoundError> {
    let DecimalValue::Finite(d) = value else {
        return Ok(value);
    };

    if d.is_zero() {
        // Zero keeps its sign and gains the requested precision: sd=3 -> 0.00.
        let mut zero = Decimal::ZERO;
        zero.rescale(significant_digits.saturating_sub(1).min(MAX_SCALE));
        zero.set_sign_negative(d.is_sign_negative());
        return Ok(DecimalValue::Finite(zero));
    }

    let strategy = mode.strategy(d.is_sign_negative());

    // Exponent of the leading digit: 45.6 -> 1, 0.046875 -> -2.
    let places = i64::from(significant_digits) - 1 - leading_exponent(d);

    let rounded = if places >= 0 {
        let places = u32::try_from(places.min(i64::from(MAX_SCALE))).unwrap_or(MAX_SCALE);
        d.round_dp_with_strategy(places, strategy)
    } else {
        // Rounding left of the decimal point: shift down, round to an
        // integer, shift back with checked arithmetic.
        let shift = u32::try_from(-places).map_err(|_| RoundError { significant_digits })?;
        let factor = pow10(shift).ok_or(RoundError { significant_digits })?;

        let scaled = d
            .checked_div(factor)
            .ok_or(RoundError { significant_digits })?;
        scaled
            .round_dp_with_strategy(0, strategy)
            .checked_mul(factor)
            .ok_or(RoundError { significant_digits })?
    };

    // A midpoint carry can add a digit (0.99 -> 1.0), so the padding target
    // is recomputed from the rounded value rather than the input.
    let mut result = rounded.normalize();
    let desired = i64::from(significant_digits) - 1 - leading_exponent(result);
    if desired > i64::from(result.scale()) {
        let desired = u32::try_from(desired.min(i64::from(MAX_SCALE))).unwrap_or(MAX_SCALE);
        result.rescale(desired);
    }

    Ok(DecimalValue::Finite(result))
}

/// Base-10 exponent of the leading digit: 45.6 -> 1, 0.046875 -> -2.
fn leading_exponent(d: Decimal) -> i64 {
    i64::from(digit_count(d.mantissa())) - 1 - i64::from(d.scale())
}

/// Number of decimal digits in a mantissa (1 for zero).
fn digit_count(mantissa: i128) -> u32 {
    let mut m = mantissa.unsigned_abs();
    let mut count = 1;
    while m >= 10 {
        m /= 10;
        count += 1;
    }

    count
}

fn pow10(exp: u32) -> Option<Decimal> {
    let mut value = Decimal::ONE;
    for _ in 0..exp {
        value = value.checked_mul(Decimal::TEN)?;
    }

    Some(value)
}

///
/// TESTS
///
