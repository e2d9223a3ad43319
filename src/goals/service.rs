//! Goal progress and streak service.
//!
//! Reads a materialized [`ActivitySnapshot`] and answers, per goal:
//! - the status and progress of the relevant period (or of all history for
//!   one-time goals)
//! - the current and best streak of met periods
//!
//! Every call is a pure function of the snapshot, the goal and the reference
//! time; nothing is cached between calls.

use std::collections::HashMap;

use chrono::{Local, NaiveDateTime};
use rayon::prelude::*;
use uuid::Uuid;

use super::aggregator::{aggregate, PeriodAggregates};
use super::calendar::{LocalCalendar, PeriodCalendar, PeriodKey};
use super::evaluator::{compute_streaks, evaluate, StreakRun};
use super::format::{formatted_value, goal_target_description, updated_detail, NO_ENTRIES};
use super::report::GoalReport;
use super::types::{Cadence, Goal, GoalKind, GoalProgressSummary, GoalStatus, GoalStreakInfo};
use crate::models::{ActivitySnapshot, Exercise, TrackableItem};

/// Computes goal summaries and streaks over one snapshot.
pub struct GoalProgressService<'a, C: PeriodCalendar = LocalCalendar> {
    snapshot: &'a ActivitySnapshot,
    exercises_by_id: HashMap<Uuid, &'a Exercise>,
    trackables_by_id: HashMap<Uuid, &'a TrackableItem>,
    calendar: C,
}

impl<'a> GoalProgressService<'a> {
    /// Create a service using the default local calendar (weeks start Monday).
    pub fn new(snapshot: &'a ActivitySnapshot) -> Self {
        Self::with_calendar(snapshot, LocalCalendar::default())
    }
}

impl<'a, C: PeriodCalendar> GoalProgressService<'a, C> {
    /// Create a service with an explicit calendar.
    pub fn with_calendar(snapshot: &'a ActivitySnapshot, calendar: C) -> Self {
        let exercises_by_id = snapshot
            .exercises
            .iter()
            .map(|exercise| (exercise.id, exercise))
            .collect();
        let trackables_by_id = snapshot
            .trackables
            .iter()
            .map(|item| (item.id, item))
            .collect();

        Self {
            snapshot,
            exercises_by_id,
            trackables_by_id,
            calendar,
        }
    }

    /// Calendar used for period bucketing.
    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Summary of the goal as of now.
    pub fn summary(&self, goal: &Goal) -> GoalProgressSummary {
        self.summary_at(goal, now())
    }

    /// Summary of the goal as of `reference`.
    ///
    /// One-time goals are judged over all history; recurring goals over the
    /// period containing `reference`.
    pub fn summary_at(&self, goal: &Goal, reference: NaiveDateTime) -> GoalProgressSummary {
        let cadence = goal.cadence;
        let aggregates = self.aggregates(goal);
        let period = self.calendar.period_key(reference.date(), cadence);
        let target_description = goal_target_description(goal, cadence);

        let Some(aggregate) = aggregates.get(&period) else {
            return GoalProgressSummary {
                status: GoalStatus::Missing,
                period_label: cadence.period_label().to_string(),
                current_description: NO_ENTRIES.to_string(),
                target_description,
                detail_description: None,
                progress_fraction: None,
            };
        };

        let evaluation = evaluate(goal.direction, goal.target_value, Some(aggregate.value));

        GoalProgressSummary {
            status: evaluation.status,
            period_label: cadence.period_label().to_string(),
            current_description: formatted_value(goal, aggregate.value),
            target_description,
            detail_description: aggregate.last_event_at.map(updated_detail),
            progress_fraction: evaluation.progress,
        }
    }

    /// Streak info as of now; `None` for one-time goals.
    pub fn streak_info(&self, goal: &Goal) -> Option<GoalStreakInfo> {
        self.streak_info_at(goal, now())
    }

    /// Streak info as of `reference`; `None` for one-time goals.
    pub fn streak_info_at(&self, goal: &Goal, reference: NaiveDateTime) -> Option<GoalStreakInfo> {
        let cadence = goal.cadence;
        if !cadence.is_recurring() {
            return None;
        }

        let aggregates = self.aggregates(goal);
        let current_period = self.calendar.period_key(reference.date(), cadence);
        let current = aggregates.get(&current_period);
        let evaluation = evaluate(goal.direction, goal.target_value, current.map(|a| a.value));
        let streaks = self.streaks(goal, cadence, &aggregates, current_period);

        Some(GoalStreakInfo {
            period_label: cadence.period_label().to_string(),
            current_description: current
                .map(|aggregate| formatted_value(goal, aggregate.value))
                .unwrap_or_else(|| NO_ENTRIES.to_string()),
            target_description: goal_target_description(goal, cadence),
            progress_fraction: evaluation.progress,
            status: evaluation.status,
            current_streak: streaks.current,
            best_streak: streaks.best,
            last_met_date: streaks.last_met,
        })
    }

    /// Name of the exercise or tracked item the goal measures.
    pub fn context_label(&self, goal: &Goal) -> Option<String> {
        match goal.kind {
            GoalKind::StrengthMaxReps
            | GoalKind::StrengthMaxWeight
            | GoalKind::CardioDistance
            | GoalKind::CardioDuration => goal
                .exercise_id
                .and_then(|id| self.exercises_by_id.get(&id))
                .map(|exercise| exercise.name.clone()),
            GoalKind::Custom => goal
                .trackable_id
                .and_then(|id| self.trackables_by_id.get(&id))
                .map(|item| item.name.clone()),
            GoalKind::WeightTarget => None,
        }
    }

    /// Full report for one goal as of `reference`.
    pub fn report_for(&self, goal: &Goal, reference: NaiveDateTime) -> GoalReport {
        GoalReport {
            goal_id: goal.id,
            title: goal.title.clone(),
            kind_label: goal.kind.display_name().to_string(),
            cadence: goal.cadence,
            context_label: self.context_label(goal),
            summary: self.summary_at(goal, reference),
            streak: self.streak_info_at(goal, reference),
        }
    }

    /// Reports for many goals, evaluated in parallel, in input order.
    pub fn report_at(&self, goals: &[Goal], reference: NaiveDateTime) -> Vec<GoalReport> {
        let reports: Vec<GoalReport> = goals
            .par_iter()
            .map(|goal| self.report_for(goal, reference))
            .collect();

        tracing::debug!(
            "Built {} goal reports over {} records",
            reports.len(),
            self.snapshot.record_count()
        );

        reports
    }

    /// Reports for many goals as of now.
    pub fn report(&self, goals: &[Goal]) -> Vec<GoalReport> {
        self.report_at(goals, now())
    }

    fn aggregates(&self, goal: &Goal) -> PeriodAggregates {
        aggregate(goal, self.snapshot, &self.calendar)
    }

    fn streaks(
        &self,
        goal: &Goal,
        cadence: Cadence,
        aggregates: &PeriodAggregates,
        through: PeriodKey,
    ) -> StreakRun {
        compute_streaks(
            goal.direction,
            goal.target_value,
            cadence,
            aggregates,
            through,
            &self.calendar,
        )
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
