//! Goal status evaluation and streak computation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::aggregator::PeriodAggregates;
use super::calendar::{PeriodCalendar, PeriodKey};
use super::types::{Cadence, Direction, GoalStatus};

/// Status of one period and how close it is to done.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub status: GoalStatus,
    /// Fraction in [0, 1]; exactly 1 when achieved, `None` without data
    pub progress: Option<f64>,
}

/// Compare a period's aggregate against the target.
pub fn evaluate(direction: Direction, target: f64, current: Option<f64>) -> Evaluation {
    let Some(current) = current else {
        return Evaluation {
            status: GoalStatus::Missing,
            progress: None,
        };
    };

    let achieved = Evaluation {
        status: GoalStatus::Achieved,
        progress: Some(1.0),
    };

    match direction {
        Direction::AtLeast => {
            if current >= target {
                return achieved;
            }
            let denominator = if target != 0.0 { target } else { 1.0 };
            Evaluation {
                status: GoalStatus::Tracking,
                progress: Some((current / denominator).clamp(0.0, 1.0)),
            }
        }
        Direction::AtMost => {
            if current <= target {
                return achieved;
            }
            if current <= 0.0 {
                return Evaluation {
                    status: GoalStatus::Tracking,
                    progress: Some(0.0),
                };
            }
            Evaluation {
                status: GoalStatus::Tracking,
                progress: Some((target / current).clamp(0.0, 1.0)),
            }
        }
    }
}

/// Result of walking a goal's period history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakRun {
    /// Consecutive met periods ending at the current period
    pub current: u32,
    /// Longest run of consecutive met periods
    pub best: u32,
    /// Latest event (or period start) of any met period
    pub last_met: Option<NaiveDateTime>,
}

/// Walk every period from the earliest aggregate through `through`.
///
/// Periods without an aggregate still consume a step and break the run.
/// The walk is bounded by elapsed calendar time, not record count.
pub fn compute_streaks<C: PeriodCalendar + ?Sized>(
    direction: Direction,
    target: f64,
    cadence: Cadence,
    aggregates: &PeriodAggregates,
    through: PeriodKey,
    calendar: &C,
) -> StreakRun {
    let Some(&earliest) = aggregates.keys().next() else {
        return StreakRun::default();
    };

    let mut streaks = StreakRun::default();
    let mut run = 0u32;
    let mut steps = 0usize;
    let mut cursor = Some(earliest);

    while let Some(period) = cursor.filter(|period| *period <= through) {
        let aggregate = aggregates.get(&period);
        let status = evaluate(direction, target, aggregate.map(|a| a.value)).status;

        if status.is_achieved() {
            run += 1;
            let met_at = aggregate
                .and_then(|a| a.last_event_at)
                .unwrap_or_else(|| period.start_datetime());
            streaks.last_met = Some(streaks.last_met.map_or(met_at, |seen| seen.max(met_at)));
        } else {
            run = 0;
        }

        if period == through {
            streaks.current = run;
        }
        streaks.best = streaks.best.max(run);
        steps += 1;
        cursor = calendar.next_period(period, cadence);
    }

    tracing::trace!(
        "Streak walk from {} through {} took {} steps: current {}, best {}",
        earliest,
        through,
        steps,
        streaks.current,
        streaks.best
    );

    streaks
}
