//! Goal drafts and validation.
//!
//! A draft holds what the user typed into the goal editor. Building it
//! validates the input against the catalog and resolves units and references
//! per goal kind.

use chrono::NaiveDate;
use uuid::Uuid;

use super::format::format_decimal;
use super::types::{Cadence, Direction, Goal, GoalKind};
use crate::models::{ActivitySnapshot, DistanceUnit, WeightUnit};
use crate::storage::config::UnitPreferences;

/// Editable goal fields, as entered.
#[derive(Debug, Clone)]
pub struct GoalDraft {
    pub title: String,
    pub kind: GoalKind,
    pub cadence: Cadence,
    pub direction: Direction,
    pub exercise_id: Option<Uuid>,
    pub trackable_id: Option<Uuid>,
    /// Target as typed; a comma is accepted as decimal separator
    pub target_text: String,
    pub unit_text: String,
    pub deadline: Option<NaiveDate>,
    pub note: String,
}

impl GoalDraft {
    /// Start a draft of `kind` with that kind's defaults applied.
    pub fn new(kind: GoalKind, units: &UnitPreferences) -> Self {
        let mut draft = Self {
            title: String::new(),
            kind,
            cadence: Cadence::OneTime,
            direction: Direction::AtLeast,
            exercise_id: None,
            trackable_id: None,
            target_text: String::new(),
            unit_text: "reps".to_string(),
            deadline: None,
            note: String::new(),
        };
        draft.apply_defaults(units);
        draft
    }

    /// Load an existing goal for editing.
    pub fn from_goal(goal: &Goal) -> Self {
        let digits = if goal.kind == GoalKind::StrengthMaxReps { 0 } else { 2 };
        Self {
            title: goal.title.clone(),
            kind: goal.kind,
            cadence: goal.cadence,
            direction: goal.direction,
            exercise_id: goal.exercise_id,
            trackable_id: goal.trackable_id,
            target_text: format_decimal(goal.target_value, digits),
            unit_text: goal.unit.clone(),
            deadline: goal.deadline,
            note: goal.note.clone().unwrap_or_default(),
        }
    }

    /// Reset unit and direction to the defaults of the current kind.
    ///
    /// Units the user already picked are kept when they fit the kind.
    pub fn apply_defaults(&mut self, units: &UnitPreferences) {
        match self.kind {
            GoalKind::StrengthMaxReps => {
                self.unit_text = "reps".to_string();
                self.direction = Direction::AtLeast;
            }
            GoalKind::StrengthMaxWeight => {
                if WeightUnit::parse(&self.unit_text).is_none() {
                    self.unit_text = units.weight.as_str().to_string();
                }
                self.direction = Direction::AtLeast;
            }
            GoalKind::CardioDistance => {
                if DistanceUnit::parse(&self.unit_text).is_none() {
                    self.unit_text = units.distance.as_str().to_string();
                }
                self.direction = Direction::AtLeast;
            }
            GoalKind::CardioDuration => {
                self.unit_text = "min".to_string();
                self.direction = Direction::AtLeast;
            }
            GoalKind::WeightTarget => {
                if WeightUnit::parse(&self.unit_text).is_none() {
                    self.unit_text = units.weight.as_str().to_string();
                }
                self.direction = Direction::AtMost;
            }
            GoalKind::Custom => {}
        }
    }

    /// Change the kind and re-apply its defaults.
    pub fn set_kind(&mut self, kind: GoalKind, units: &UnitPreferences) {
        self.kind = kind;
        self.apply_defaults(units);
    }

    /// Parse the target text. Negative or non-numeric targets are rejected.
    pub fn parse_target(&self) -> Option<f64> {
        let normalized = self.target_text.trim().replace(',', ".");
        normalized
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value >= 0.0)
    }

    /// Unit stored on the goal for the current kind.
    pub fn resolved_unit(&self) -> String {
        match self.kind {
            GoalKind::StrengthMaxReps => "reps".to_string(),
            GoalKind::CardioDuration => "min".to_string(),
            GoalKind::WeightTarget | GoalKind::StrengthMaxWeight | GoalKind::CardioDistance => {
                self.unit_text.clone()
            }
            GoalKind::Custom => self.unit_text.trim().to_string(),
        }
    }

    /// Validate the draft and produce a new goal.
    pub fn build(&self, catalog: &ActivitySnapshot) -> Result<Goal, GoalError> {
        let mut goal = Goal::new(String::new(), self.kind, self.direction, 0.0, String::new());
        self.apply_to(&mut goal, catalog)?;
        tracing::info!("Created goal {}", goal.title);
        Ok(goal)
    }

    /// Validate the draft and write it into an existing goal.
    ///
    /// The goal is left untouched when validation fails.
    pub fn apply_to(&self, goal: &mut Goal, catalog: &ActivitySnapshot) -> Result<(), GoalError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(GoalError::MissingTitle);
        }

        let target = self
            .parse_target()
            .ok_or_else(|| GoalError::InvalidTarget(self.target_text.clone()))?;

        let (exercise_id, trackable_id) = self.resolve_references(catalog)?;
        let note = self.note.trim();

        goal.title = title.to_string();
        goal.kind = self.kind;
        goal.cadence = self.cadence;
        goal.direction = self.direction;
        goal.exercise_id = exercise_id;
        goal.trackable_id = trackable_id;
        goal.target_value = target;
        goal.unit = self.resolved_unit();
        goal.deadline = self.deadline;
        goal.note = if note.is_empty() { None } else { Some(note.to_string()) };
        Ok(())
    }

    fn resolve_references(
        &self,
        catalog: &ActivitySnapshot,
    ) -> Result<(Option<Uuid>, Option<Uuid>), GoalError> {
        if self.kind.requires_exercise() {
            let exercise = self
                .exercise_id
                .and_then(|id| catalog.exercise(id))
                .ok_or(GoalError::ExerciseRequired)?;
            return Ok((Some(exercise.id), exercise.trackable_id));
        }

        if self.kind.requires_trackable() {
            let item = self
                .trackable_id
                .and_then(|id| catalog.trackable(id))
                .ok_or(GoalError::TrackableRequired)?;
            return Ok((None, Some(item.id)));
        }

        Ok((None, None))
    }
}

/// Goal validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GoalError {
    #[error("Please provide a title.")]
    MissingTitle,

    #[error("Enter a valid target number (got {0:?}).")]
    InvalidTarget(String),

    #[error("Select an exercise to track.")]
    ExerciseRequired,

    #[error("Select an item to track.")]
    TrackableRequired,
}
