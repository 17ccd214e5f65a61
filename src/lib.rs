//! Ration - daily calorie and cash limit tracking
//!
//! This library tracks consumption events (money spent or calories eaten)
//! against a daily limit and reports what is left for today, plus totals
//! over a trailing seven-day window.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: In-memory settings (limits and report currency)
//! - `error`: Custom error types
//! - `clock`: Injectable source of "today"
//! - `models`: Records, amounts and currencies
//! - `services`: The shared tracker and the calorie/cash reporters
//!
//! # Example
//!
//! ```rust
//! use ration::models::Record;
//! use ration::services::CashTracker;
//!
//! let mut cash = CashTracker::new(1000);
//! cash.add_record(Record::new(500, "groceries"));
//! assert_eq!(
//!     cash.today_cash_remained("usd").unwrap(),
//!     "На сегодня осталось 6.86 USD"
//! );
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use clock::{Clock, FixedClock, LocalClock};
pub use error::{TrackerError, TrackerResult};
pub use models::{Amount, Currency, Record};
pub use services::{CaloriesTracker, CashTracker, Tracker};
