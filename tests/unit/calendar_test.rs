//! Unit tests for period bucketing on the local calendar.

use chrono::{NaiveDate, Weekday};
use ironstreak::goals::calendar::{LocalCalendar, PeriodCalendar, PeriodKey};
use ironstreak::goals::Cadence;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_week_start_variants() {
    // 2026-10-18 is a Sunday
    let sunday = date(2026, 10, 18);

    let monday_weeks = LocalCalendar::default();
    assert_eq!(monday_weeks.start_of_week(sunday), date(2026, 10, 12));

    let sunday_weeks = LocalCalendar::new(Weekday::Sun);
    assert_eq!(sunday_weeks.start_of_week(sunday), date(2026, 10, 18));

    let saturday_weeks = LocalCalendar::new(Weekday::Sat);
    assert_eq!(saturday_weeks.start_of_week(sunday), date(2026, 10, 17));
}

#[test]
fn test_period_keys_per_cadence() {
    let calendar = LocalCalendar::default();
    let day = date(2026, 10, 14);

    assert_eq!(calendar.period_key(day, Cadence::Daily).start_date(), day);
    assert_eq!(
        calendar.period_key(day, Cadence::Weekly).start_date(),
        date(2026, 10, 12)
    );
    assert_eq!(
        calendar.period_key(day, Cadence::Monthly).start_date(),
        date(2026, 10, 1)
    );
    assert_eq!(
        calendar.period_key(day, Cadence::Yearly).start_date(),
        date(2026, 1, 1)
    );
    assert_eq!(calendar.period_key(day, Cadence::OneTime), PeriodKey::one_time());
}

#[test]
fn test_same_period_same_key() {
    let calendar = LocalCalendar::default();
    let monday = calendar.period_key(date(2026, 10, 12), Cadence::Weekly);
    let sunday = calendar.period_key(date(2026, 10, 18), Cadence::Weekly);
    let next_monday = calendar.period_key(date(2026, 10, 19), Cadence::Weekly);

    assert_eq!(monday, sunday);
    assert!(sunday < next_monday);
}

#[test]
fn test_next_period_crosses_boundaries() {
    let calendar = LocalCalendar::default();

    let new_years_eve = calendar.period_key(date(2026, 12, 31), Cadence::Daily);
    let next = calendar.next_period(new_years_eve, Cadence::Daily).unwrap();
    assert_eq!(next.start_date(), date(2027, 1, 1));

    let december = calendar.period_key(date(2026, 12, 15), Cadence::Monthly);
    let next = calendar.next_period(december, Cadence::Monthly).unwrap();
    assert_eq!(next.start_date(), date(2027, 1, 1));

    let week = calendar.period_key(date(2026, 12, 30), Cadence::Weekly);
    let next = calendar.next_period(week, Cadence::Weekly).unwrap();
    assert_eq!(next.start_date(), date(2027, 1, 4));

    let year = calendar.period_key(date(2026, 6, 1), Cadence::Yearly);
    let next = calendar.next_period(year, Cadence::Yearly).unwrap();
    assert_eq!(next.start_date(), date(2027, 1, 1));

    assert!(calendar
        .next_period(PeriodKey::one_time(), Cadence::OneTime)
        .is_none());
}

#[test]
fn test_leap_day_month() {
    let calendar = LocalCalendar::default();
    let key = calendar.period_key(date(2028, 2, 29), Cadence::Monthly);
    assert_eq!(key.start_date(), date(2028, 2, 1));
    let next = calendar.next_period(key, Cadence::Monthly).unwrap();
    assert_eq!(next.start_date(), date(2028, 3, 1));
}
