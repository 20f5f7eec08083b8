//! Tools module
//!
//! Serializable operations behind the command-line front end.

pub mod scaler;
pub mod status;
pub mod units;
