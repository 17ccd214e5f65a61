//! Tracker service
//!
//! Owns a daily limit and the append-only log of records, and answers the
//! date-windowed questions every report is built from: how much was logged
//! today, over the trailing week, and how far today is from the limit.

use chrono::{Duration, NaiveDate};
use tracing::{debug, trace};

use crate::clock::{Clock, LocalClock};
use crate::models::{Amount, Record};

/// Length of the trailing window used by [`Tracker::week_stats`]
pub const WEEK_DAYS: i64 = 7;

/// Daily-limit tracker over an append-only record log
#[derive(Debug, Clone)]
pub struct Tracker<C: Clock = LocalClock> {
    limit: Amount,
    records: Vec<Record>,
    clock: C,
}

impl Tracker<LocalClock> {
    /// Create a tracker that uses the process-local date as "today"
    pub fn new(limit: impl Into<Amount>) -> Self {
        Self::with_clock(limit, LocalClock)
    }
}

impl<C: Clock> Tracker<C> {
    /// Create a tracker with an explicit date source
    pub fn with_clock(limit: impl Into<Amount>, clock: C) -> Self {
        Self {
            limit: limit.into(),
            records: Vec::new(),
            clock,
        }
    }

    /// The daily limit
    pub fn limit(&self) -> Amount {
        self.limit
    }

    /// All records in the order they were added
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of logged records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if nothing has been logged yet
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The date source
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Mutable access to the date source (e.g. to advance a fixed clock)
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Append a record to the log
    pub fn add_record(&mut self, record: Record) {
        debug!(
            amount = %record.amount(),
            date = %record.date(),
            comment = record.comment(),
            "record added"
        );
        self.records.push(record);
    }

    /// Total logged for the current date
    pub fn today_stats(&self) -> Amount {
        self.stats_for(self.clock.today())
    }

    /// Total logged for a specific date
    pub fn stats_for(&self, date: NaiveDate) -> Amount {
        let total = self
            .records
            .iter()
            .filter(|r| r.date() == date)
            .map(Record::amount)
            .sum();
        trace!(%date, %total, "day stats");
        total
    }

    /// Total over the trailing week `(today - 7 days, today]`
    pub fn week_stats(&self) -> Amount {
        self.week_stats_ending(self.clock.today())
    }

    /// Total over `(end - 7 days, end]`
    ///
    /// A record dated exactly seven days before `end` falls outside.
    pub fn week_stats_ending(&self, end: NaiveDate) -> Amount {
        let start = end - Duration::days(WEEK_DAYS);
        let total = self
            .records
            .iter()
            .filter(|r| start < r.date() && r.date() <= end)
            .map(Record::amount)
            .sum();
        trace!(%start, %end, %total, "week stats");
        total
    }

    /// `limit - today_stats()`; negative when over the limit
    pub fn difference(&self) -> Amount {
        self.limit - self.today_stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn days_ago(n: i64) -> NaiveDate {
        today() - Duration::days(n)
    }

    fn tracker(limit: i64) -> Tracker<FixedClock> {
        Tracker::with_clock(limit, FixedClock::new(today()))
    }

    #[test]
    fn test_empty_tracker() {
        let t = tracker(2000);
        assert!(t.is_empty());
        assert_eq!(t.today_stats(), Amount::zero());
        assert_eq!(t.week_stats(), Amount::zero());
        assert_eq!(t.difference(), Amount::from_units(2000));
    }

    #[test]
    fn test_records_keep_insertion_order() {
        let mut t = tracker(100);
        t.add_record(Record::on(3, "c", days_ago(1)));
        t.add_record(Record::on(1, "a", today()));
        t.add_record(Record::on(1, "a", today()));

        let comments: Vec<_> = t.records().iter().map(Record::comment).collect();
        assert_eq!(comments, ["c", "a", "a"]);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_today_stats_ignores_other_days() {
        let mut t = tracker(1000);
        t.add_record(Record::on(145, "coffee", today()));
        t.add_record(Record::on(300, "lunch", today()));
        assert_eq!(t.today_stats(), Amount::from_units(445));

        t.add_record(Record::on(999, "yesterday", days_ago(1)));
        t.add_record(Record::on(999, "tomorrow", today().succ_opt().unwrap()));
        assert_eq!(t.today_stats(), Amount::from_units(445));
    }

    #[test]
    fn test_week_window_boundaries() {
        let mut t = tracker(1000);
        t.add_record(Record::on(1, "today", today()));
        t.add_record(Record::on(10, "six days ago", days_ago(6)));
        t.add_record(Record::on(100, "seven days ago", days_ago(WEEK_DAYS)));
        t.add_record(Record::on(1000, "tomorrow", today().succ_opt().unwrap()));

        assert_eq!(t.week_stats(), Amount::from_units(11));
    }

    #[test]
    fn test_difference() {
        let mut t = tracker(2000);
        t.add_record(Record::on(2500, "feast", today()));
        assert_eq!(t.difference(), Amount::from_units(-500));
        assert_eq!(t.difference(), t.limit() - t.today_stats());
    }

    #[test]
    fn test_queries_follow_the_clock() {
        let mut t = tracker(500);
        t.add_record(Record::on(200, "dinner", today()));
        assert_eq!(t.today_stats(), Amount::from_units(200));

        t.clock_mut().set(today().succ_opt().unwrap());
        assert_eq!(t.today_stats(), Amount::zero());
        assert_eq!(t.week_stats(), Amount::from_units(200));
        assert_eq!(t.difference(), Amount::from_units(500));
    }

    #[test]
    fn test_reads_are_idempotent() {
        let mut t = tracker(1000);
        t.add_record(Record::on(120, "tea", today()));
        t.add_record(Record::on(80, "bun", days_ago(3)));

        assert_eq!(t.today_stats(), t.today_stats());
        assert_eq!(t.week_stats(), t.week_stats());
        assert_eq!(t.difference(), t.difference());
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_explicit_dates() {
        let mut t = tracker(1000);
        t.add_record(Record::on(5, "old", days_ago(20)));
        assert_eq!(t.stats_for(days_ago(20)), Amount::from_units(5));
        assert_eq!(t.week_stats_ending(days_ago(14)), Amount::from_units(5));
        assert_eq!(t.week_stats_ending(days_ago(13)), Amount::zero());
    }

    #[test]
    fn test_local_clock_tracker() {
        let mut t = Tracker::new(300);
        t.add_record(Record::new(100, "now"));
        assert_eq!(t.today_stats(), Amount::from_units(100));
        assert_eq!(t.difference(), Amount::from_units(200));
    }
}
