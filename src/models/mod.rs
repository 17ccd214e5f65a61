//! Core data models for Ration
//!
//! This module contains the value types the trackers operate on: logged
//! records, fixed-point amounts and the supported currencies.

pub mod amount;
pub mod currency;
pub mod record;

pub use amount::{Amount, AmountParseError};
pub use currency::Currency;
pub use record::{parse_date, Record, DATE_FORMAT};
