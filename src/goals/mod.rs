//! Goal progress and streak engine.
//!
//! Turns raw activity records into per-goal progress:
//! - Aggregation of records into calendar periods, per goal kind
//! - Evaluation of the current period against the target
//! - Consecutive-period streaks for recurring goals
//! - Display strings for goal cards

pub mod aggregator;
pub mod calendar;
pub mod draft;
pub mod evaluator;
pub mod format;
pub mod report;
pub mod service;
pub mod types;

// Re-exports for convenience
pub use aggregator::{aggregate, AggregateValue, AggregationPolicy, PeriodAggregates};
pub use calendar::{LocalCalendar, PeriodCalendar, PeriodKey};
pub use draft::{GoalDraft, GoalError};
pub use evaluator::{compute_streaks, evaluate, Evaluation, StreakRun};
pub use report::GoalReport;
pub use service::GoalProgressService;
pub use types::{
    Cadence, Direction, Goal, GoalKind, GoalProgressSummary, GoalStatus, GoalStreakInfo,
};
