//! Record model
//!
//! A single logged event: how much was spent or eaten, a free-text comment,
//! and the calendar date it counts towards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use crate::clock::{Clock, LocalClock};
use crate::error::{TrackerError, TrackerResult};

/// strftime pattern for record dates (`DD.MM.YYYY`)
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// One logged consumption event
///
/// Fields are private so a record cannot change after it is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    amount: Amount,
    comment: String,
    date: NaiveDate,
}

impl Record {
    /// Create a record dated today (process-local date)
    ///
    /// The sign of `amount` is discarded.
    pub fn new(amount: impl Into<Amount>, comment: impl Into<String>) -> Self {
        Self::on(amount, comment, LocalClock.today())
    }

    /// Create a record from a `DD.MM.YYYY` date string
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::DateParse`] if the string is not in the exact
    /// format or names a date that does not exist (e.g. `31.02.2024`).
    pub fn with_date(
        amount: impl Into<Amount>,
        comment: impl Into<String>,
        date: &str,
    ) -> TrackerResult<Self> {
        let date = parse_date(date)?;
        Ok(Self::on(amount, comment, date))
    }

    /// Create a record for an explicit calendar date
    pub fn on(amount: impl Into<Amount>, comment: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount: amount.into().abs(),
            comment: comment.into(),
            date,
        }
    }

    /// The recorded quantity (never negative)
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Free-text annotation
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Calendar date the record counts towards
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format(DATE_FORMAT),
            self.amount,
            self.comment
        )
    }
}

/// Parse a `DD.MM.YYYY` date
///
/// Two-digit day, two-digit month and four-digit year are required;
/// chrono on its own would also accept `1.2.2024`.
pub fn parse_date(input: &str) -> TrackerResult<NaiveDate> {
    let bytes = input.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        });

    if !shape_ok {
        return Err(TrackerError::date_parse(input, "expected DD.MM.YYYY"));
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|e| TrackerError::date_parse(input, e.to_string()))
}
