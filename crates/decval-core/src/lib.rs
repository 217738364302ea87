//! Core decimal domain for decval: the `DecimalValue` type, the strict
//! numeric-literal grammar, and significant-digit rounding.
//!
//! This crate owns everything that is a property of the decimal values
//! themselves. Schema rules, coercion, and limit resolution live in the
//! `decval` crate one level up.

pub mod parse;
pub mod round;
pub mod value;

pub use parse::{ParseDecimalError, parse_decimal};
pub use round::{
    RoundError, RoundingMode, RoundingPolicy, ambient_rounding_mode, set_ambient_rounding_mode,
    to_significant_digits,
};
pub use value::{DecimalValue, Sign};

///
/// Prelude
///
/// Domain vocabulary only; helpers stay behind their modules.
///

pub mod prelude {
    pub use crate::{
        parse::parse_decimal,
        round::{RoundingMode, RoundingPolicy},
        value::{DecimalValue, Sign},
    };
}
