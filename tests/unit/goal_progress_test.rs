//! Unit tests for goal summaries.
//!
//! Covers aggregation per goal kind, status evaluation and display strings.

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use ironstreak::goals::calendar::LocalCalendar;
use ironstreak::goals::{Cadence, Direction, Goal, GoalKind, GoalProgressService, GoalStatus};
use ironstreak::models::{
    ActivitySnapshot, CardioSession, Exercise, ExerciseKind, StrengthSet, TrackableItem,
    TrackableKind, TrackableLog, WeightEntry,
};

fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, m, d).unwrap()
}

fn at(m: u32, d: u32, h: u32) -> NaiveDateTime {
    date(m, d).and_hms_opt(h, 0, 0).unwrap()
}

#[test]
fn test_daily_reps_achieved() {
    let pushup = Exercise::new("Push-up", ExerciseKind::Strength);
    let mut snapshot = ActivitySnapshot::new();
    snapshot.strength_sets = vec![
        StrengthSet::new(pushup.id, date(10, 18), 20).logged_at(at(10, 18, 7)),
        StrengthSet::new(pushup.id, date(10, 18), 35).logged_at(at(10, 18, 18)),
    ];
    let goal = Goal::new("Pushups", GoalKind::StrengthMaxReps, Direction::AtLeast, 50.0, "reps")
        .with_cadence(Cadence::Daily)
        .with_exercise(pushup.id);
    snapshot.exercises.push(pushup);

    let service = GoalProgressService::new(&snapshot);
    let summary = service.summary_at(&goal, at(10, 18, 20));

    assert_eq!(summary.status, GoalStatus::Achieved);
    assert_eq!(summary.period_label, "Today");
    assert_eq!(summary.current_description, "55 reps");
    assert_eq!(summary.target_description, "Target ≥ 50 reps • Today");
    assert_eq!(summary.detail_description.as_deref(), Some("Updated Oct 18"));
    assert_eq!(summary.progress_fraction, Some(1.0));
}

#[test]
fn test_weekly_distance_in_progress() {
    let run = Exercise::new("Run", ExerciseKind::Cardio);
    let mut snapshot = ActivitySnapshot::new();
    snapshot.cardio_sessions = vec![
        CardioSession::new(run.id, date(10, 13), 600)
            .with_distance_km(1.2)
            .logged_at(at(10, 13, 7)),
        CardioSession::new(run.id, date(10, 15), 900)
            .with_distance_km(2.0)
            .logged_at(at(10, 15, 7)),
        // Previous week, not counted
        CardioSession::new(run.id, date(10, 9), 900)
            .with_distance_km(9.0)
            .logged_at(at(10, 9, 7)),
        // Time only, no distance
        CardioSession::new(run.id, date(10, 16), 1200).logged_at(at(10, 16, 7)),
    ];
    let goal = Goal::new("Run 5k a week", GoalKind::CardioDistance, Direction::AtLeast, 5.0, "km")
        .with_cadence(Cadence::Weekly)
        .with_exercise(run.id);
    snapshot.exercises.push(run);

    let service = GoalProgressService::new(&snapshot);
    let summary = service.summary_at(&goal, at(10, 18, 12));

    assert_eq!(summary.status, GoalStatus::Tracking);
    assert_eq!(summary.period_label, "This Week");
    assert_eq!(summary.current_description, "3.2 KM");
    assert_eq!(summary.target_description, "Target ≥ 5 KM • This Week");
    assert_eq!(summary.detail_description.as_deref(), Some("Updated Oct 15"));
    let progress = summary.progress_fraction.unwrap();
    assert!((progress - 0.64).abs() < 1e-9);
}

#[test]
fn test_distance_in_miles() {
    let run = Exercise::new("Run", ExerciseKind::Cardio);
    let mut snapshot = ActivitySnapshot::new();
    snapshot.cardio_sessions = vec![CardioSession::new(run.id, date(10, 18), 1800)
        .with_distance_km(8.1)
        .logged_at(at(10, 18, 7))];
    let goal = Goal::new("Run 5 mi", GoalKind::CardioDistance, Direction::AtLeast, 5.0, "mi")
        .with_cadence(Cadence::Daily)
        .with_exercise(run.id);

    let service = GoalProgressService::new(&snapshot);
    let summary = service.summary_at(&goal, at(10, 18, 12));

    assert_eq!(summary.current_description, "5.03 MI");
    assert_eq!(summary.status, GoalStatus::Achieved);
}

#[test]
fn test_monthly_duration() {
    let row = Exercise::new("Row", ExerciseKind::Cardio);
    let mut snapshot = ActivitySnapshot::new();
    snapshot.cardio_sessions = vec![
        CardioSession::new(row.id, date(10, 2), 1800).logged_at(at(10, 2, 7)),
        CardioSession::new(row.id, date(10, 11), 2730).logged_at(at(10, 11, 7)),
    ];
    let goal = Goal::new("Row 2h a month", GoalKind::CardioDuration, Direction::AtLeast, 120.0, "min")
        .with_cadence(Cadence::Monthly)
        .with_exercise(row.id);

    let service = GoalProgressService::new(&snapshot);
    let summary = service.summary_at(&goal, at(10, 18, 12));

    // 30 min + 45.5 min
    assert_eq!(summary.current_description, "1:15:30");
    assert_eq!(summary.target_description, "Target ≥ 2:00:00 • This Month");
    assert_eq!(summary.status, GoalStatus::Tracking);
}

#[test]
fn test_one_time_max_weight_over_all_history() {
    let bench = Exercise::new("Bench Press", ExerciseKind::Strength);
    let mut snapshot = ActivitySnapshot::new();
    snapshot.strength_sets = vec![
        StrengthSet::new(bench.id, date(3, 1), 5)
            .with_weight(205.0)
            .logged_at(at(3, 1, 18)),
        StrengthSet::new(bench.id, date(9, 20), 1)
            .with_weight(225.0)
            .logged_at(at(9, 20, 18)),
        StrengthSet::new(bench.id, date(10, 17), 3)
            .with_weight(215.0)
            .logged_at(at(10, 17, 18)),
        // Bodyweight set, ignored
        StrengthSet::new(bench.id, date(10, 18), 12).logged_at(at(10, 18, 18)),
    ];
    let goal = Goal::new("Bench 225", GoalKind::StrengthMaxWeight, Direction::AtLeast, 225.0, "lb")
        .with_exercise(bench.id);

    let service = GoalProgressService::new(&snapshot);
    let summary = service.summary_at(&goal, at(10, 18, 20));

    assert_eq!(summary.status, GoalStatus::Achieved);
    assert_eq!(summary.period_label, "Overall");
    assert_eq!(summary.current_description, "225 LB");
    assert_eq!(summary.target_description, "Target ≥ 225 LB");
    // Latest contributing event, not the event of the max
    assert_eq!(summary.detail_description.as_deref(), Some("Updated Oct 17"));
    assert!(service.streak_info_at(&goal, at(10, 18, 20)).is_none());
}

#[test]
fn test_weight_target_uses_latest_entry() {
    let mut snapshot = ActivitySnapshot::new();
    snapshot.weight_entries = vec![
        WeightEntry::new(at(10, 15, 7), 81.0),
        WeightEntry::new(at(10, 13, 7), 86.0),
    ];
    let goal = Goal::new("Cut to 180", GoalKind::WeightTarget, Direction::AtMost, 180.0, "lb")
        .with_cadence(Cadence::Weekly);

    let service = GoalProgressService::new(&snapshot);
    let summary = service.summary_at(&goal, at(10, 18, 12));

    // 81 kg is about 178.6 lb
    assert_eq!(summary.current_description, "178.6 LB");
    assert_eq!(summary.status, GoalStatus::Achieved);
    assert_eq!(summary.target_description, "Target ≤ 180 LB • This Week");
}

#[test]
fn test_weight_target_above_limit() {
    let mut snapshot = ActivitySnapshot::new();
    snapshot.weight_entries = vec![WeightEntry::new(at(10, 18, 7), 100.0)];
    let goal = Goal::new("Cut to 90", GoalKind::WeightTarget, Direction::AtMost, 90.0, "kg")
        .with_cadence(Cadence::Daily);

    let service = GoalProgressService::new(&snapshot);
    let summary = service.summary_at(&goal, at(10, 18, 12));

    assert_eq!(summary.status, GoalStatus::Tracking);
    assert_eq!(summary.current_description, "100 KG");
    let progress = summary.progress_fraction.unwrap();
    assert!((progress - 0.9).abs() < 1e-9);
}

#[test]
fn test_custom_trackable_sum() {
    let water = TrackableItem::new("Water", TrackableKind::Custom);
    let mut snapshot = ActivitySnapshot::new();
    snapshot.trackable_logs = vec![
        TrackableLog::new(water.id, at(10, 18, 8)).with_quantity(3.0),
        TrackableLog::new(water.id, at(10, 18, 12)).with_quantity(2.5),
        TrackableLog::new(water.id, at(10, 18, 14)),
    ];
    let goal = Goal::new("Hydrate", GoalKind::Custom, Direction::AtLeast, 8.0, "glasses")
        .with_cadence(Cadence::Daily)
        .with_trackable(water.id);
    snapshot.trackables.push(water);

    let service = GoalProgressService::new(&snapshot);
    let summary = service.summary_at(&goal, at(10, 18, 20));

    assert_eq!(summary.current_description, "5.5 glasses");
    assert_eq!(summary.status, GoalStatus::Tracking);
    assert_eq!(summary.detail_description.as_deref(), Some("Updated Oct 18"));
    assert_eq!(service.context_label(&goal).as_deref(), Some("Water"));
}

#[test]
fn test_no_entries() {
    let snapshot = ActivitySnapshot::new();
    let goal = Goal::new("Squat", GoalKind::StrengthMaxReps, Direction::AtLeast, 100.0, "reps")
        .with_cadence(Cadence::Weekly)
        .with_exercise(uuid::Uuid::new_v4());

    let service = GoalProgressService::new(&snapshot);
    let summary = service.summary_at(&goal, at(10, 18, 20));

    assert_eq!(summary.status, GoalStatus::Missing);
    assert_eq!(summary.current_description, "No entries yet");
    assert!(summary.progress_fraction.is_none());
    assert!(summary.detail_description.is_none());
}

#[test]
fn test_deleted_exercise_reads_as_missing() {
    let deleted = uuid::Uuid::new_v4();
    let mut snapshot = ActivitySnapshot::new();
    snapshot.exercises.push(Exercise::new("Row", ExerciseKind::Cardio));
    let goal = Goal::new("Deadlift", GoalKind::StrengthMaxReps, Direction::AtLeast, 20.0, "reps")
        .with_cadence(Cadence::Daily)
        .with_exercise(deleted);

    let service = GoalProgressService::new(&snapshot);
    let summary = service.summary_at(&goal, at(10, 18, 20));
    let streak = service.streak_info_at(&goal, at(10, 18, 20)).unwrap();

    assert_eq!(summary.status, GoalStatus::Missing);
    assert!(service.context_label(&goal).is_none());
    assert_eq!(streak.current_streak, 0);
    assert_eq!(streak.best_streak, 0);
    assert!(streak.last_met_date.is_none());
}

#[test]
fn test_goal_without_reference() {
    let pushup = Exercise::new("Push-up", ExerciseKind::Strength);
    let mut snapshot = ActivitySnapshot::new();
    snapshot.strength_sets = vec![StrengthSet::new(pushup.id, date(10, 18), 50)];
    snapshot.exercises.push(pushup);

    let goal = Goal::new("Pushups", GoalKind::StrengthMaxReps, Direction::AtLeast, 50.0, "reps")
        .with_cadence(Cadence::Daily);

    let service = GoalProgressService::new(&snapshot);
    assert_eq!(service.summary_at(&goal, at(10, 18, 20)).status, GoalStatus::Missing);
}

#[test]
fn test_week_start_changes_bucket() {
    let pushup = Exercise::new("Push-up", ExerciseKind::Strength);
    let mut snapshot = ActivitySnapshot::new();
    // Saturday and Sunday
    snapshot.strength_sets = vec![
        StrengthSet::new(pushup.id, date(10, 17), 60).logged_at(at(10, 17, 9)),
        StrengthSet::new(pushup.id, date(10, 18), 50).logged_at(at(10, 18, 9)),
    ];
    let goal = Goal::new("Pushups", GoalKind::StrengthMaxReps, Direction::AtLeast, 100.0, "reps")
        .with_cadence(Cadence::Weekly)
        .with_exercise(pushup.id);

    let monday_weeks = GoalProgressService::new(&snapshot);
    let summary = monday_weeks.summary_at(&goal, at(10, 18, 20));
    assert_eq!(summary.current_description, "110 reps");
    assert_eq!(summary.status, GoalStatus::Achieved);

    let sunday_weeks = GoalProgressService::with_calendar(&snapshot, LocalCalendar::new(Weekday::Sun));
    let summary = sunday_weeks.summary_at(&goal, at(10, 18, 20));
    assert_eq!(summary.current_description, "50 reps");
    assert_eq!(summary.status, GoalStatus::Tracking);
}

#[test]
fn test_order_independence() {
    let pushup = Exercise::new("Push-up", ExerciseKind::Strength);
    let sets = vec![
        StrengthSet::new(pushup.id, date(10, 16), 60).logged_at(at(10, 16, 8)),
        StrengthSet::new(pushup.id, date(10, 17), 20).logged_at(at(10, 17, 8)),
        StrengthSet::new(pushup.id, date(10, 17), 35).logged_at(at(10, 17, 19)),
        StrengthSet::new(pushup.id, date(10, 18), 55).logged_at(at(10, 18, 7)),
    ];
    let goal = Goal::new("Pushups", GoalKind::StrengthMaxReps, Direction::AtLeast, 50.0, "reps")
        .with_cadence(Cadence::Daily)
        .with_exercise(pushup.id);

    let mut forward = ActivitySnapshot::new();
    forward.exercises.push(pushup.clone());
    forward.strength_sets = sets.clone();

    let mut reversed = ActivitySnapshot::new();
    reversed.exercises.push(pushup);
    reversed.strength_sets = sets.into_iter().rev().collect();

    let reference = at(10, 18, 20);
    let a = GoalProgressService::new(&forward);
    let b = GoalProgressService::new(&reversed);

    assert_eq!(a.summary_at(&goal, reference), b.summary_at(&goal, reference));
    assert_eq!(a.streak_info_at(&goal, reference), b.streak_info_at(&goal, reference));
}

#[test]
fn test_shared_timestamp_order_independence() {
    let sugar = TrackableItem::new("Sugar", TrackableKind::Custom);
    let logs = vec![
        TrackableLog::new(sugar.id, at(10, 18, 8)).with_quantity(0.1),
        TrackableLog::new(sugar.id, at(10, 18, 8)).with_quantity(0.2),
        TrackableLog::new(sugar.id, at(10, 18, 8)).with_quantity(0.3),
    ];
    let goal = Goal::new("Limit sugar", GoalKind::Custom, Direction::AtMost, 0.6, "oz")
        .with_cadence(Cadence::Daily)
        .with_trackable(sugar.id);

    let mut forward = ActivitySnapshot::new();
    forward.trackables.push(sugar.clone());
    forward.trackable_logs = logs.clone();

    let mut reversed = ActivitySnapshot::new();
    reversed.trackables.push(sugar);
    reversed.trackable_logs = logs.into_iter().rev().collect();

    let reference = at(10, 18, 20);
    let a = GoalProgressService::new(&forward).summary_at(&goal, reference);
    let b = GoalProgressService::new(&reversed).summary_at(&goal, reference);

    assert_eq!(a.status, b.status);
    assert_eq!(a.progress_fraction, b.progress_fraction);
    assert_eq!(a, b);
}
