//! Quantity scaling module
//!
//! Servings scaling, metric/US display conversion and number formatting.

pub mod converter;
pub mod format;
pub mod parse;
pub mod units;

pub use converter::{render, to_metric, to_us_customary};
pub use format::{format_quantity, to_fixed_1, trim_trailing_zeros};
pub use parse::{parse_float_prefix, parse_int_prefix, quantity_or_zero};
pub use units::{is_non_scalable, matching_families, UnitSystem, UsUnitFamily, NON_SCALABLE_UNITS};
