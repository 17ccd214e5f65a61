//! Cash reporting
//!
//! Wraps a [`Tracker`] whose limit is a daily spending budget in rubles and
//! reports what is left (or owed) in any supported currency.

use std::ops::{Deref, DerefMut};

use tracing::debug;

use super::tracker::Tracker;
use crate::clock::{Clock, LocalClock};
use crate::error::TrackerResult;
use crate::models::{Amount, Currency};

/// Message when today's spending matches the limit exactly
pub const NO_MONEY: &str = "Денег нет, держись";

/// Cash tracker with multi-currency remaining/debt messaging
#[derive(Debug, Clone)]
pub struct CashTracker<C: Clock = LocalClock> {
    tracker: Tracker<C>,
}

impl CashTracker<LocalClock> {
    /// Create a cash tracker with a daily limit in rubles
    pub fn new(limit: impl Into<Amount>) -> Self {
        Self::from_tracker(Tracker::new(limit))
    }
}

impl<C: Clock> CashTracker<C> {
    /// Create a cash tracker with an explicit date source
    pub fn with_clock(limit: impl Into<Amount>, clock: C) -> Self {
        Self::from_tracker(Tracker::with_clock(limit, clock))
    }

    /// Wrap an existing tracker
    pub fn from_tracker(tracker: Tracker<C>) -> Self {
        Self { tracker }
    }

    /// Unwrap into the underlying tracker
    pub fn into_inner(self) -> Tracker<C> {
        self.tracker
    }

    /// Report today's remaining cash in the currency named by `code`
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::UnsupportedCurrency`](crate::TrackerError::UnsupportedCurrency)
    /// if `code` is not `rub`, `usd` or `eur`.
    pub fn today_cash_remained(&self, code: &str) -> TrackerResult<String> {
        let currency = Currency::from_code(code)?;
        Ok(self.today_cash_remained_in(currency))
    }

    /// Report today's remaining cash in `currency`
    ///
    /// Only an exact zero difference in rubles reports "no money"; the sign
    /// of the ruble difference picks between "remaining" and "debt", even
    /// when the converted value rounds to zero.
    pub fn today_cash_remained_in(&self, currency: Currency) -> String {
        let cash = self.tracker.difference();
        debug!(%cash, %currency, "cash remained");

        if cash.is_zero() {
            return NO_MONEY.to_string();
        }

        let converted = cash.convert(currency.rate());
        if cash.is_positive() {
            format!(
                "На сегодня осталось {} {}",
                converted.to_decimal_string(),
                currency.name()
            )
        } else {
            format!(
                "{}: твой долг - {} {}",
                NO_MONEY,
                converted.abs().to_decimal_string(),
                currency.name()
            )
        }
    }
}

impl<C: Clock> Deref for CashTracker<C> {
    type Target = Tracker<C>;

    fn deref(&self) -> &Self::Target {
        &self.tracker
    }
}

impl<C: Clock> DerefMut for CashTracker<C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.tracker
    }
}
