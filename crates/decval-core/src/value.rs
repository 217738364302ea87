use crate::parse::{ParseDecimalError, parse_decimal};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};

///
/// Sign
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Sign {
    Negative,
    Positive,
}

impl Sign {
    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }

    #[must_use]
    pub const fn of_f64(f: f64) -> Self {
        if f.is_sign_negative() {
            Self::Negative
        } else {
            Self::Positive
        }
    }
}

///
/// DecimalValue
///
/// Canonical coerced decimal: a finite value or one of the NaN / ±Infinity
/// sentinels. Immutable once produced; rounding and comparison build new
/// values.
///
/// Equality is structural (NaN == NaN). Ordered comparisons go through
/// [`DecimalValue::cmp_ieee`], which returns `None` whenever NaN is involved.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecimalValue {
    Finite(Decimal),
    Infinity(Sign),
    Nan,
}

impl DecimalValue {
    pub const NEG_INFINITY: Self = Self::Infinity(Sign::Negative);
    pub const POS_INFINITY: Self = Self::Infinity(Sign::Positive);
    pub const ZERO: Self = Self::Finite(Decimal::ZERO);

    /// Build from a native float. NaN and the infinities map onto the
    /// corresponding sentinels; the sign of a float zero is preserved.
    ///
    /// Returns `None` when the magnitude exceeds the engine's range.
    #[must_use]
    pub fn from_f64(f: f64) -> Option<Self> {
        if f.is_nan() {
            return Some(Self::Nan);
        }
        if f.is_infinite() {
            return Some(Self::Infinity(Sign::of_f64(f)));
        }
        if f == 0.0 {
            let mut zero = Decimal::ZERO;
            zero.set_sign_negative(f.is_sign_negative());
            return Some(Self::Finite(zero));
        }

        Decimal::from_f64(f).map(|d| {
            let mut d = d.normalize();
            d.set_sign_negative(f.is_sign_negative());
            Self::Finite(d)
        })
    }

    ///
    /// SHAPE PREDICATES
    ///

    /// Not NaN and not ±Infinity.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    #[must_use]
    pub const fn is_nan(&self) -> bool {
        matches!(self, Self::Nan)
    }

    #[must_use]
    pub const fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinity(_))
    }

    /// True for finite values without a fractional component.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        match self {
            Self::Finite(d) => d.fract().is_zero(),
            Self::Infinity(_) | Self::Nan => false,
        }
    }

    /// Numerically zero, either sign.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        match self {
            Self::Finite(d) => d.is_zero(),
            Self::Infinity(_) | Self::Nan => false,
        }
    }

    /// Sign bit set. Negative zero counts as negative; NaN is neither
    /// negative nor positive.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        match self {
            Self::Finite(d) => d.is_sign_negative(),
            Self::Infinity(sign) => sign.is_negative(),
            Self::Nan => false,
        }
    }

    /// Sign bit unset. Positive zero and +Infinity count as positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        match self {
            Self::Finite(d) => !d.is_sign_negative(),
            Self::Infinity(sign) => !sign.is_negative(),
            Self::Nan => false,
        }
    }

    ///
    /// COMPARISON
    ///

    /// IEEE-style ordering: `None` whenever either operand is NaN, the
    /// infinities above/below every finite value, and -0 == +0.
    #[must_use]
    pub fn cmp_ieee(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Nan, _) | (_, Self::Nan) => None,
            (Self::Infinity(a), Self::Infinity(b)) => Some(match (a, b) {
                (Sign::Negative, Sign::Positive) => Ordering::Less,
                (Sign::Positive, Sign::Negative) => Ordering::Greater,
                _ => Ordering::Equal,
            }),
            (Self::Infinity(Sign::Positive), Self::Finite(_)) => Some(Ordering::Greater),
            (Self::Infinity(Sign::Negative), Self::Finite(_)) => Some(Ordering::Less),
            (Self::Finite(_), Self::Infinity(Sign::Positive)) => Some(Ordering::Less),
            (Self::Finite(_), Self::Infinity(Sign::Negative)) => Some(Ordering::Greater),
            (Self::Finite(a), Self::Finite(b)) => Some(a.cmp(b)),
        }
    }

    #[must_use]
    pub fn gt(&self, other: &Self) -> bool {
        self.cmp_ieee(other) == Some(Ordering::Greater)
    }

    #[must_use]
    pub fn lt(&self, other: &Self) -> bool {
        self.cmp_ieee(other) == Some(Ordering::Less)
    }

    #[must_use]
    pub fn gte(&self, other: &Self) -> bool {
        matches!(
            self.cmp_ieee(other),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }

    #[must_use]
    pub fn lte(&self, other: &Self) -> bool {
        matches!(self.cmp_ieee(other), Some(Ordering::Less | Ordering::Equal))
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(d) => write!(f, "{d}"),
            Self::Infinity(Sign::Positive) => write!(f, "Infinity"),
            Self::Infinity(Sign::Negative) => write!(f, "-Infinity"),
            Self::Nan => write!(f, "NaN"),
        }
    }
}

impl FromStr for DecimalValue {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s)
    }
}

impl From<Decimal> for DecimalValue {
    fn from(d: Decimal) -> Self {
        Self::Finite(d)
    }
}

impl From<i64> for DecimalValue {
    fn from(n: i64) -> Self {
        Self::Finite(Decimal::from(n))
    }
}

// Serde: always the canonical string form ("NaN", "-Infinity", "45.600", …).
// The sentinels have no numeric representation, so string is the only shape
// that round-trips all values.
impl Serialize for DecimalValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DecimalValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_decimal(&s).map_err(serde::de::Error::custom)
    }
}

///
/// TESTS
///
