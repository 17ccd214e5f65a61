//! Source of the current calendar date
//!
//! Trackers never read the wall clock directly; they ask a [`Clock`]. The
//! default [`LocalClock`] uses the process-local date, while [`FixedClock`]
//! pins "today" so date-window queries can be replayed deterministically.

use chrono::NaiveDate;

/// Provides the calendar date that counts as "today"
pub trait Clock {
    /// The current calendar date (no time-of-day component)
    fn today(&self) -> NaiveDate;
}

/// Process-local calendar date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A clock frozen on a single date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// Create a clock that always reports `date`
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Move the frozen date
    pub fn set(&mut self, date: NaiveDate) {
        self.0 = date;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
