//! Display formatting for goal values, targets and dates.
//!
//! Numbers are locale-agnostic: `.` as decimal separator, no grouping, and a
//! fixed maximum number of fraction digits per goal kind.

use chrono::NaiveDateTime;

use super::types::{Cadence, Direction, Goal, GoalKind};
use crate::models::{DistanceUnit, DurationUnit, WeightUnit};

/// Shown when a period has no data.
pub const NO_ENTRIES: &str = "No entries yet";

/// Format a number with at most `max_fraction_digits` digits after the point.
///
/// Trailing zeros are dropped, so `5.0` renders as `5` and `3.20` as `3.2`.
pub fn format_decimal(value: f64, max_fraction_digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let mut text = format!("{value:.max_fraction_digits$}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

/// Format seconds as `m:ss`, or `h:mm:ss` from one hour up.
pub fn format_duration(seconds: i64) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}

/// Label for a goal's weight unit; unknown units are upper-cased as-is.
pub fn weight_unit_label(raw: &str) -> String {
    WeightUnit::parse(raw)
        .map(|unit| unit.label().to_string())
        .unwrap_or_else(|| raw.to_uppercase())
}

/// Label for a goal's distance unit; unknown units are upper-cased as-is.
pub fn distance_unit_label(raw: &str) -> String {
    DistanceUnit::parse(raw)
        .map(|unit| unit.label().to_string())
        .unwrap_or_else(|| raw.to_uppercase())
}

fn with_unit(value: String, unit_label: &str) -> String {
    if unit_label.is_empty() {
        value
    } else {
        format!("{value} {unit_label}")
    }
}

/// Format an aggregate value the way the goal's kind is displayed.
pub fn formatted_value(goal: &Goal, value: f64) -> String {
    match goal.kind {
        GoalKind::StrengthMaxReps => format!("{} reps", value.trunc() as i64),
        GoalKind::StrengthMaxWeight | GoalKind::WeightTarget => {
            with_unit(format_decimal(value, 1), &weight_unit_label(&goal.unit))
        }
        GoalKind::CardioDistance => {
            with_unit(format_decimal(value, 2), &distance_unit_label(&goal.unit))
        }
        GoalKind::CardioDuration => DurationUnit::Minutes.formatted(value),
        GoalKind::Custom => with_unit(format_decimal(value, 1), &goal.unit),
    }
}

/// Formatted target value and the unit label shown next to it.
pub fn formatted_target(goal: &Goal) -> (String, String) {
    let target = goal.target_value;
    match goal.kind {
        GoalKind::StrengthMaxReps => (format_decimal(target, 0), "reps".to_string()),
        GoalKind::StrengthMaxWeight | GoalKind::WeightTarget => {
            (format_decimal(target, 1), weight_unit_label(&goal.unit))
        }
        GoalKind::CardioDistance => (format_decimal(target, 2), distance_unit_label(&goal.unit)),
        GoalKind::CardioDuration => (DurationUnit::Minutes.formatted(target), String::new()),
        GoalKind::Custom => (format_decimal(target, 1), goal.unit.clone()),
    }
}

/// Describe the target, e.g. `Target ≥ 50 reps • Today`.
pub fn target_description(
    formatted_target: &str,
    unit_label: &str,
    direction: Direction,
    cadence: Cadence,
) -> String {
    let target_text = with_unit(formatted_target.to_string(), unit_label);
    if cadence.is_recurring() {
        format!(
            "Target {} {} • {}",
            direction.comparator(),
            target_text,
            cadence.period_label()
        )
    } else {
        format!("Target {} {}", direction.comparator(), target_text)
    }
}

/// Target description for a goal under a given cadence.
pub fn goal_target_description(goal: &Goal, cadence: Cadence) -> String {
    let (value, unit_label) = formatted_target(goal);
    target_description(&value, &unit_label, goal.direction, cadence)
}

/// Short event date, e.g. `Oct 18`.
pub fn format_event_date(at: NaiveDateTime) -> String {
    at.format("%b %-d").to_string()
}

/// Event date with year, e.g. `Oct 18, 2026`.
pub fn format_long_date(at: NaiveDateTime) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// Detail line for the latest contributing event.
pub fn updated_detail(at: NaiveDateTime) -> String {
    format!("Updated {}", format_event_date(at))
}

/// Streak length with its unit, e.g. `3 days`.
pub fn streak_label(cadence: Cadence, count: u32) -> String {
    format!("{} {}", count, cadence.streak_unit(count))
}
