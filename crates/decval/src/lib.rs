//! Decimal schema validation: coercion of raw field values into
//! arbitrary-precision decimals, significant-digit rounding, and a closed
//! catalog of shape and limit rules with deferred references.
//!
//! [`DecimalSchema`] is the entry point: build a node with its precision
//! settings and rules, then run [`DecimalSchema::validate`] against each raw
//! field value inside its [`Context`].

pub mod coerce;
pub mod context;
pub mod error;
pub mod limit;
pub mod raw;
pub mod rules;
pub mod schema;

pub use coerce::{Coerced, PrecisionConfig, coerce};
pub use context::{Context, RefPath};
pub use error::{ErrorKind, SchemaError, ValidateError};
pub use limit::Limit;
pub use raw::RawInput;
pub use rules::Rule;
pub use schema::{DecimalSchema, Outcome, Prefs};

pub use decval_core::{DecimalValue, RoundingMode, RoundingPolicy};

///
/// Prelude
///
/// The schema-building vocabulary in one import.
///

pub mod prelude {
    pub use crate::{
        context::Context,
        error::{ErrorKind, SchemaError, ValidateError},
        limit::Limit,
        raw::RawInput,
        schema::{DecimalSchema, Outcome, Prefs},
    };
    pub use decval_core::prelude::*;
}
