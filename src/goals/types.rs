//! Goal type definitions.

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A goal set by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: Uuid,
    /// Display title
    pub title: String,
    /// What is measured
    pub kind: GoalKind,
    /// How often the target resets
    #[serde(default)]
    pub cadence: Cadence,
    /// Whether the target is a floor or a ceiling
    pub direction: Direction,
    /// Exercise measured by strength and cardio goals
    #[serde(default)]
    pub exercise_id: Option<Uuid>,
    /// Tracked item measured by custom goals
    #[serde(default)]
    pub trackable_id: Option<Uuid>,
    /// Threshold, in `unit`
    pub target_value: f64,
    /// Display unit the target is expressed in
    #[serde(default)]
    pub unit: String,
    /// Advisory deadline
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    /// Free-form note
    #[serde(default)]
    pub note: Option<String>,
    /// When the goal was created
    pub created_at: NaiveDateTime,
}

impl Goal {
    /// Create a new one-time goal.
    pub fn new(
        title: impl Into<String>,
        kind: GoalKind,
        direction: Direction,
        target_value: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            kind,
            cadence: Cadence::OneTime,
            direction,
            exercise_id: None,
            trackable_id: None,
            target_value,
            unit: unit.into(),
            deadline: None,
            note: None,
            created_at: Local::now().naive_local(),
        }
    }

    /// Set the recurrence cadence.
    pub fn with_cadence(mut self, cadence: Cadence) -> Self {
        self.cadence = cadence;
        self
    }

    /// Point the goal at an exercise.
    pub fn with_exercise(mut self, exercise_id: Uuid) -> Self {
        self.exercise_id = Some(exercise_id);
        self
    }

    /// Point the goal at a tracked item.
    pub fn with_trackable(mut self, trackable_id: Uuid) -> Self {
        self.trackable_id = Some(trackable_id);
        self
    }

    /// Set an advisory deadline.
    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Whether the target resets every period (and therefore has streaks).
    pub fn is_recurring(&self) -> bool {
        self.cadence.is_recurring()
    }
}

/// What a goal measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    /// Body weight, latest weigh-in per period
    WeightTarget,
    /// Total reps for an exercise
    StrengthMaxReps,
    /// Heaviest set for an exercise
    StrengthMaxWeight,
    /// Total distance for a cardio exercise
    CardioDistance,
    /// Total time for a cardio exercise, in minutes
    CardioDuration,
    /// Total quantity logged for a tracked item
    Custom,
}

impl GoalKind {
    pub const ALL: [GoalKind; 6] = [
        GoalKind::WeightTarget,
        GoalKind::StrengthMaxReps,
        GoalKind::StrengthMaxWeight,
        GoalKind::CardioDistance,
        GoalKind::CardioDuration,
        GoalKind::Custom,
    ];

    /// Get display name for the goal kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            GoalKind::WeightTarget => "Weight Target",
            GoalKind::StrengthMaxReps => "Total Reps",
            GoalKind::StrengthMaxWeight => "Heaviest Set",
            GoalKind::CardioDistance => "Distance",
            GoalKind::CardioDuration => "Duration",
            GoalKind::Custom => "Custom",
        }
    }

    /// Whether the goal must reference an exercise.
    pub fn requires_exercise(&self) -> bool {
        matches!(
            self,
            GoalKind::StrengthMaxReps
                | GoalKind::StrengthMaxWeight
                | GoalKind::CardioDistance
                | GoalKind::CardioDuration
        )
    }

    /// Whether the goal must reference a tracked item.
    pub fn requires_trackable(&self) -> bool {
        matches!(self, GoalKind::Custom)
    }
}

impl std::fmt::Display for GoalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How often a goal's target resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cadence {
    /// Reach the target once, over all history
    #[default]
    OneTime,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Cadence {
    pub const ALL: [Cadence; 5] = [
        Cadence::OneTime,
        Cadence::Daily,
        Cadence::Weekly,
        Cadence::Monthly,
        Cadence::Yearly,
    ];

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Cadence::OneTime => "One-Time",
            Cadence::Daily => "Daily",
            Cadence::Weekly => "Weekly",
            Cadence::Monthly => "Monthly",
            Cadence::Yearly => "Yearly",
        }
    }

    /// Label for the period a summary describes.
    pub fn period_label(&self) -> &'static str {
        match self {
            Cadence::OneTime => "Overall",
            Cadence::Daily => "Today",
            Cadence::Weekly => "This Week",
            Cadence::Monthly => "This Month",
            Cadence::Yearly => "This Year",
        }
    }

    /// Unit word for a streak of `count` periods.
    pub fn streak_unit(&self, count: u32) -> String {
        let base = match self {
            Cadence::OneTime => "completion",
            Cadence::Daily => "day",
            Cadence::Weekly => "week",
            Cadence::Monthly => "month",
            Cadence::Yearly => "year",
        };
        if count == 1 {
            base.to_string()
        } else {
            format!("{base}s")
        }
    }

    /// Whether periods repeat.
    pub fn is_recurring(&self) -> bool {
        !matches!(self, Cadence::OneTime)
    }
}

impl std::fmt::Display for Cadence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Comparison between the aggregate and the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    AtLeast,
    AtMost,
}

impl Direction {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Direction::AtLeast => "At Least",
            Direction::AtMost => "At Most",
        }
    }

    /// Comparison symbol used in target descriptions.
    pub fn comparator(&self) -> &'static str {
        match self {
            Direction::AtLeast => "≥",
            Direction::AtMost => "≤",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Status of a goal for one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// No data for the period
    Missing,
    /// Data exists but the target is not met
    Tracking,
    /// Target met
    Achieved,
}

impl GoalStatus {
    /// Whether the target was met.
    pub fn is_achieved(&self) -> bool {
        matches!(self, GoalStatus::Achieved)
    }

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            GoalStatus::Missing => "Needs data",
            GoalStatus::Tracking => "In Progress",
            GoalStatus::Achieved => "Achieved",
        }
    }
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Progress of a goal for its relevant period, pre-formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgressSummary {
    pub status: GoalStatus,
    pub period_label: String,
    pub current_description: String,
    pub target_description: String,
    pub detail_description: Option<String>,
    pub progress_fraction: Option<f64>,
}

/// Streak state of a recurring goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalStreakInfo {
    pub period_label: String,
    pub current_description: String,
    pub target_description: String,
    pub progress_fraction: Option<f64>,
    pub status: GoalStatus,
    /// Consecutive periods met, ending at the current period
    pub current_streak: u32,
    /// Longest run of consecutive periods ever met
    pub best_streak: u32,
    /// Latest event that counted toward a met period
    pub last_met_date: Option<NaiveDateTime>,
}
