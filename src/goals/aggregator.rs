//! Folding activity records into per-period aggregates.
//!
//! Each goal kind maps to an [`AggregationPlan`]: which record collection is
//! read and how values inside one period are combined. Records are first
//! turned into uniform [`Contribution`]s, then folded into a map keyed by
//! [`PeriodKey`].

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::calendar::{PeriodCalendar, PeriodKey};
use super::types::{Cadence, Goal, GoalKind};
use crate::models::{ActivitySnapshot, DistanceUnit, DurationUnit, WeightUnit};

/// How values within one period are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationPolicy {
    /// Add every value
    Sum,
    /// Keep the largest value
    Max,
    /// Keep the value with the latest event timestamp
    Latest,
}

/// Record collection a goal kind reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordSource {
    StrengthSets,
    CardioSessions,
    WeightEntries,
    TrackableLogs,
}

/// Source and policy for one goal kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationPlan {
    pub source: RecordSource,
    pub policy: AggregationPolicy,
}

/// Dispatch table from goal kind to aggregation plan.
pub fn plan_for(kind: GoalKind) -> AggregationPlan {
    let (source, policy) = match kind {
        GoalKind::StrengthMaxReps => (RecordSource::StrengthSets, AggregationPolicy::Sum),
        GoalKind::StrengthMaxWeight => (RecordSource::StrengthSets, AggregationPolicy::Max),
        GoalKind::CardioDistance => (RecordSource::CardioSessions, AggregationPolicy::Sum),
        GoalKind::CardioDuration => (RecordSource::CardioSessions, AggregationPolicy::Sum),
        GoalKind::WeightTarget => (RecordSource::WeightEntries, AggregationPolicy::Latest),
        GoalKind::Custom => (RecordSource::TrackableLogs, AggregationPolicy::Sum),
    };
    AggregationPlan { source, policy }
}

/// One record's contribution to a goal, already in the goal's unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution {
    /// Calendar day used for bucketing
    pub date: NaiveDate,
    /// Measured value
    pub value: f64,
    /// Event timestamp used for recency and tie-breaks
    pub event_at: NaiveDateTime,
}

/// Folded value of one period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateValue {
    pub value: f64,
    pub last_event_at: Option<NaiveDateTime>,
}

impl AggregateValue {
    fn from_contribution(contribution: &Contribution) -> Self {
        Self {
            value: contribution.value,
            last_event_at: Some(contribution.event_at),
        }
    }

    fn absorb(&mut self, contribution: &Contribution, policy: AggregationPolicy) {
        let event_at = contribution.event_at;
        match policy {
            AggregationPolicy::Sum => {
                self.value += contribution.value;
                self.last_event_at = Some(self.last_event_at.map_or(event_at, |seen| seen.max(event_at)));
            }
            AggregationPolicy::Max => {
                if contribution.value > self.value {
                    self.value = contribution.value;
                }
                // Recency tracks every record in the bucket, not only the maximum
                self.last_event_at = Some(self.last_event_at.map_or(event_at, |seen| seen.max(event_at)));
            }
            AggregationPolicy::Latest => match self.last_event_at {
                Some(seen) if event_at <= seen => {}
                _ => {
                    self.value = contribution.value;
                    self.last_event_at = Some(event_at);
                }
            },
        }
    }
}

/// Per-period aggregates, ordered by period start.
pub type PeriodAggregates = BTreeMap<PeriodKey, AggregateValue>;

/// Select and convert the records that count toward `goal`.
///
/// Goals missing the reference their kind needs yield nothing.
pub fn contributions(goal: &Goal, snapshot: &ActivitySnapshot) -> Vec<Contribution> {
    match goal.kind {
        GoalKind::StrengthMaxReps => {
            let Some(exercise_id) = goal.exercise_id else {
                return missing_reference(goal);
            };
            snapshot
                .strength_sets
                .iter()
                .filter(|set| set.exercise_id == exercise_id)
                .map(|set| Contribution {
                    date: set.date,
                    value: f64::from(set.reps),
                    event_at: set.created_at,
                })
                .collect()
        }
        GoalKind::StrengthMaxWeight => {
            let Some(exercise_id) = goal.exercise_id else {
                return missing_reference(goal);
            };
            snapshot
                .strength_sets
                .iter()
                .filter(|set| set.exercise_id == exercise_id)
                .filter_map(|set| {
                    set.weight.map(|weight| Contribution {
                        date: set.date,
                        value: weight,
                        event_at: set.created_at,
                    })
                })
                .collect()
        }
        GoalKind::CardioDistance => {
            let Some(exercise_id) = goal.exercise_id else {
                return missing_reference(goal);
            };
            let unit = DistanceUnit::parse(&goal.unit).unwrap_or_default();
            snapshot
                .cardio_sessions
                .iter()
                .filter(|session| session.exercise_id == exercise_id)
                .filter_map(|session| {
                    session.distance_km.map(|km| Contribution {
                        date: session.date,
                        value: unit.from_kilometers(km),
                        event_at: session.created_at,
                    })
                })
                .collect()
        }
        GoalKind::CardioDuration => {
            let Some(exercise_id) = goal.exercise_id else {
                return missing_reference(goal);
            };
            snapshot
                .cardio_sessions
                .iter()
                .filter(|session| session.exercise_id == exercise_id)
                .map(|session| Contribution {
                    date: session.date,
                    value: DurationUnit::Minutes.convert(session.duration_sec),
                    event_at: session.created_at,
                })
                .collect()
        }
        GoalKind::WeightTarget => {
            let unit = WeightUnit::parse(&goal.unit).unwrap_or_default();
            snapshot
                .weight_entries
                .iter()
                .map(|entry| Contribution {
                    date: entry.at.date(),
                    value: unit.from_kilograms(entry.kg),
                    event_at: entry.at,
                })
                .collect()
        }
        GoalKind::Custom => {
            let Some(trackable_id) = goal.trackable_id else {
                return missing_reference(goal);
            };
            snapshot
                .trackable_logs
                .iter()
                .filter(|log| log.trackable_id == trackable_id)
                .filter_map(|log| {
                    log.quantity.map(|quantity| Contribution {
                        date: log.logged_at.date(),
                        value: quantity,
                        event_at: log.logged_at,
                    })
                })
                .collect()
        }
    }
}

fn missing_reference(goal: &Goal) -> Vec<Contribution> {
    tracing::debug!(
        "Goal {} ({}) has no reference for its kind; nothing to aggregate",
        goal.id,
        goal.kind
    );
    Vec::new()
}

/// Fold contributions into per-period aggregates.
///
/// Contributions are sorted by event timestamp before folding, so the result
/// does not depend on input order. For sums and maxima, records sharing a
/// timestamp are further ordered by value; for [`AggregationPolicy::Latest`]
/// they keep their input order and the first seen wins.
pub fn fold_contributions<C: PeriodCalendar + ?Sized>(
    mut contributions: Vec<Contribution>,
    policy: AggregationPolicy,
    cadence: Cadence,
    calendar: &C,
) -> PeriodAggregates {
    match policy {
        AggregationPolicy::Latest => contributions.sort_by_key(|contribution| contribution.event_at),
        // Equal timestamps ordered by value so float sums are reproducible
        AggregationPolicy::Sum | AggregationPolicy::Max => contributions.sort_by(|a, b| {
            a.event_at
                .cmp(&b.event_at)
                .then_with(|| a.value.total_cmp(&b.value))
        }),
    }

    contributions
        .iter()
        .fold(PeriodAggregates::new(), |mut periods, contribution| {
            let key = calendar.period_key(contribution.date, cadence);
            periods
                .entry(key)
                .and_modify(|aggregate| aggregate.absorb(contribution, policy))
                .or_insert_with(|| AggregateValue::from_contribution(contribution));
            periods
        })
}

/// Aggregate a goal's records per period of its cadence.
pub fn aggregate<C: PeriodCalendar + ?Sized>(
    goal: &Goal,
    snapshot: &ActivitySnapshot,
    calendar: &C,
) -> PeriodAggregates {
    let plan = plan_for(goal.kind);
    let contributions = contributions(goal, snapshot);
    let count = contributions.len();
    let periods = fold_contributions(contributions, plan.policy, goal.cadence, calendar);

    tracing::debug!(
        "Aggregated {} {:?} records into {} {} periods for goal {}",
        count,
        plan.source,
        periods.len(),
        goal.cadence,
        goal.id
    );

    periods
}
