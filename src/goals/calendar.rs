//! Calendar arithmetic for cadence periods.
//!
//! Periods follow calendar boundaries (start of day, week, month, year)
//! rather than fixed-length windows. The week-start convention lives behind
//! [`PeriodCalendar`] so callers and tests can pin it.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::types::Cadence;

/// Canonical start of a cadence period.
///
/// One-time goals collapse all history into a single sentinel key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PeriodKey(NaiveDate);

impl PeriodKey {
    /// Sentinel key for one-time goals (1970-01-01).
    pub fn one_time() -> Self {
        Self(NaiveDate::default())
    }

    /// First day of the period.
    pub fn start_date(&self) -> NaiveDate {
        self.0
    }

    /// Midnight at the start of the period.
    pub fn start_datetime(&self) -> NaiveDateTime {
        self.0.and_time(NaiveTime::MIN)
    }
}

impl std::fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Calendar used to bucket dates into cadence periods.
pub trait PeriodCalendar: Send + Sync {
    /// First day of the week.
    fn week_start(&self) -> Weekday;

    /// First day of the week containing `date`.
    fn start_of_week(&self, date: NaiveDate) -> NaiveDate {
        let offset = (7 + date.weekday().num_days_from_monday()
            - self.week_start().num_days_from_monday())
            % 7;
        date.checked_sub_days(Days::new(u64::from(offset)))
            .unwrap_or(date)
    }

    /// First day of the month containing `date`.
    fn start_of_month(&self, date: NaiveDate) -> NaiveDate {
        date.with_day(1).unwrap_or(date)
    }

    /// First day of the year containing `date`.
    fn start_of_year(&self, date: NaiveDate) -> NaiveDate {
        date.with_ordinal(1).unwrap_or(date)
    }

    /// Period key for a date under a cadence. Idempotent on period starts.
    fn period_key(&self, date: NaiveDate, cadence: Cadence) -> PeriodKey {
        match cadence {
            Cadence::OneTime => PeriodKey::one_time(),
            Cadence::Daily => PeriodKey(date),
            Cadence::Weekly => PeriodKey(self.start_of_week(date)),
            Cadence::Monthly => PeriodKey(self.start_of_month(date)),
            Cadence::Yearly => PeriodKey(self.start_of_year(date)),
        }
    }

    /// Key of the period right after `key`, or `None` for one-time goals.
    fn next_period(&self, key: PeriodKey, cadence: Cadence) -> Option<PeriodKey> {
        let start = key.start_date();
        let next = match cadence {
            Cadence::OneTime => return None,
            Cadence::Daily => start.checked_add_days(Days::new(1)),
            Cadence::Weekly => start.checked_add_days(Days::new(7)),
            Cadence::Monthly => start.checked_add_months(Months::new(1)),
            Cadence::Yearly => start.checked_add_months(Months::new(12)),
        };
        next.map(PeriodKey)
    }
}

/// The user's local Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalCalendar {
    week_start: Weekday,
}

impl LocalCalendar {
    /// Create a calendar whose weeks start on `week_start`.
    pub fn new(week_start: Weekday) -> Self {
        Self { week_start }
    }
}

impl Default for LocalCalendar {
    fn default() -> Self {
        Self::new(Weekday::Mon)
    }
}

impl PeriodCalendar for LocalCalendar {
    fn week_start(&self) -> Weekday {
        self.week_start
    }
}
