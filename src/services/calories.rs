//! Calorie reporting
//!
//! Wraps a [`Tracker`] whose limit is a daily calorie budget.

use std::ops::{Deref, DerefMut};

use tracing::debug;

use super::tracker::Tracker;
use crate::clock::{Clock, LocalClock};
use crate::models::Amount;

/// Message once the daily calorie budget is used up
pub const STOP_EATING: &str = "Хватит есть!";

/// Calorie tracker with remaining-budget messaging
#[derive(Debug, Clone)]
pub struct CaloriesTracker<C: Clock = LocalClock> {
    tracker: Tracker<C>,
}

impl CaloriesTracker<LocalClock> {
    /// Create a calorie tracker with a daily limit in kCal
    pub fn new(limit: impl Into<Amount>) -> Self {
        Self::from_tracker(Tracker::new(limit))
    }
}

impl<C: Clock> CaloriesTracker<C> {
    /// Create a calorie tracker with an explicit date source
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

    /// Tell how many calories can still be eaten today
    pub fn calories_remained(&self) -> String {
        let calories = self.tracker.difference();
        debug!(%calories, "calories remained");

        if calories <= Amount::zero() {
            return STOP_EATING.to_string();
        }
        format!(
            "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более {} кКал",
            calories
        )
    }
}

impl<C: Clock> Deref for CaloriesTracker<C> {
    type Target = Tracker<C>;

    fn deref(&self) -> &Self::Target {
        &self.tracker
    }
}

impl<C: Clock> DerefMut for CaloriesTracker<C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::Record;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn tracker(limit: i64) -> CaloriesTracker<FixedClock> {
        CaloriesTracker::with_clock(limit, FixedClock::new(today()))
    }

    #[test]
    fn test_nothing_eaten() {
        let t = tracker(2000);
        assert_eq!(
            t.calories_remained(),
            "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более 2000 кКал"
        );
    }

    #[test]
    fn test_over_limit() {
        let mut t = tracker(2000);
        t.add_record(Record::on(2500, "cake", today()));
        assert_eq!(t.calories_remained(), STOP_EATING);
    }

    #[test]
    fn test_exactly_at_limit() {
        let mut t = tracker(2000);
        t.add_record(Record::on(1200, "lunch", today()));
        t.add_record(Record::on(800, "dinner", today()));
        assert_eq!(t.calories_remained(), STOP_EATING);
    }

    #[test]
    fn test_partial_and_fractional() {
        let mut t = tracker(2000);
        t.add_record(Record::on(Amount::parse("1499.5").unwrap(), "lunch", today()));
        assert_eq!(
            t.calories_remained(),
            "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более 500.5 кКал"
        );
    }

    #[test]
    fn test_yesterday_does_not_count() {
        let mut t = tracker(2000);
        t.add_record(Record::on(5000, "feast", today().pred_opt().unwrap()));
        assert!(t.calories_remained().ends_with("2000 кКал"));
        assert_eq!(t.week_stats(), Amount::from_units(5000));
    }
}
