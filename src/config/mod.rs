//! Configuration module for Ration
//!
//! Holds the user's preferences (daily limits and report currency) as an
//! in-memory value that callers build or deserialize themselves.

pub mod settings;

pub use settings::Settings;
