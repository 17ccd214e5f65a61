//! Custom error types for Ration
//!
//! This module defines the error hierarchy for the tracker using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::amount::AmountParseError;

/// The main error type for Ration operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// A record date did not match `DD.MM.YYYY` or is not a real calendar date
    #[error("Invalid date '{input}': {reason}")]
    DateParse { input: String, reason: String },

    /// Currency code outside the supported table
    #[error("Ошибка: Валюта \"{0}\" не поддерживается")]
    UnsupportedCurrency(String),

    /// Amount string could not be parsed
    #[error("Invalid amount: {0}")]
    AmountParse(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl TrackerError {
    /// Create a date parse error for the given input
    pub fn date_parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DateParse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a date parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::DateParse { .. })
    }

    /// Check if this is an unsupported currency error
    pub fn is_unsupported_currency(&self) -> bool {
        matches!(self, Self::UnsupportedCurrency(_))
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<AmountParseError> for TrackerError {
    fn from(err: AmountParseError) -> Self {
        Self::AmountParse(err.to_string())
    }
}

/// Result type alias for Ration operations
pub type TrackerResult<T> = Result<T, TrackerError>;
