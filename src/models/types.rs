//! Activity record and catalog type definitions.

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

fn default_true() -> bool {
    true
}

/// Kind of exercise in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    /// Sets of reps, optionally loaded
    Strength,
    /// Timed sessions, optionally with distance
    Cardio,
}

/// An exercise that strength sets or cardio sessions are logged against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Strength or cardio
    pub kind: ExerciseKind,
    /// Whether the exercise is still offered for logging
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Catalog item this exercise was created from
    #[serde(default)]
    pub trackable_id: Option<Uuid>,
}

impl Exercise {
    /// Create a new active exercise.
    pub fn new(name: impl Into<String>, kind: ExerciseKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            is_active: true,
            trackable_id: None,
        }
    }

    /// Link the exercise to a catalog item.
    pub fn with_trackable(mut self, trackable_id: Uuid) -> Self {
        self.trackable_id = Some(trackable_id);
        self
    }
}

/// Kind of tracked item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackableKind {
    StrengthExercise,
    CardioExercise,
    Weight,
    Meal,
    Custom,
}

impl TrackableKind {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            TrackableKind::StrengthExercise => "Strength Exercise",
            TrackableKind::CardioExercise => "Cardio Exercise",
            TrackableKind::Weight => "Weight",
            TrackableKind::Meal => "Meal",
            TrackableKind::Custom => "Custom",
        }
    }
}

/// A generic item the user tracks (water, sleep, a supplement...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackableItem {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// What sort of thing is tracked
    pub kind: TrackableKind,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl TrackableItem {
    /// Create a new tracked item.
    pub fn new(name: impl Into<String>, kind: TrackableKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            notes: None,
        }
    }
}

/// A single strength set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthSet {
    /// Unique identifier
    pub id: Uuid,
    /// Exercise the set belongs to
    pub exercise_id: Uuid,
    /// Training day the set is grouped under
    pub date: NaiveDate,
    /// Repetitions performed
    pub reps: u32,
    /// Load in the user's weight unit, if any
    #[serde(default)]
    pub weight: Option<f64>,
    /// Optional note
    #[serde(default)]
    pub note: Option<String>,
    /// When the set was logged
    pub created_at: NaiveDateTime,
}

impl StrengthSet {
    /// Create a set logged now.
    pub fn new(exercise_id: Uuid, date: NaiveDate, reps: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            exercise_id,
            date,
            reps,
            weight: None,
            note: None,
            created_at: now_local(),
        }
    }

    /// Set the load lifted.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Attach a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Override the logging timestamp.
    pub fn logged_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = created_at;
        self
    }
}

/// A cardio session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardioSession {
    /// Unique identifier
    pub id: Uuid,
    /// Exercise the session belongs to
    pub exercise_id: Uuid,
    /// Training day the session is grouped under
    pub date: NaiveDate,
    /// Session length in seconds
    pub duration_sec: u32,
    /// Distance covered, stored in kilometers
    #[serde(default)]
    pub distance_km: Option<f64>,
    /// Optional note
    #[serde(default)]
    pub note: Option<String>,
    /// When the session was logged
    pub created_at: NaiveDateTime,
}

impl CardioSession {
    /// Create a session logged now.
    pub fn new(exercise_id: Uuid, date: NaiveDate, duration_sec: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            exercise_id,
            date,
            duration_sec,
            distance_km: None,
            note: None,
            created_at: now_local(),
        }
    }

    /// Set the distance in kilometers.
    pub fn with_distance_km(mut self, distance_km: f64) -> Self {
        self.distance_km = Some(distance_km);
        self
    }

    /// Attach a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Override the logging timestamp.
    pub fn logged_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = created_at;
        self
    }
}

/// A body-weight measurement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Unique identifier
    pub id: Uuid,
    /// Time of the weigh-in
    pub at: NaiveDateTime,
    /// Weight in kilograms
    pub kg: f64,
    /// Catalog item the entry was logged through
    #[serde(default)]
    pub trackable_id: Option<Uuid>,
}

impl WeightEntry {
    /// Create a weigh-in.
    pub fn new(at: NaiveDateTime, kg: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            at,
            kg,
            trackable_id: None,
        }
    }
}

/// A free-form log against a tracked item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackableLog {
    /// Unique identifier
    pub id: Uuid,
    /// Item the log belongs to
    pub trackable_id: Uuid,
    /// When the entry was logged
    pub logged_at: NaiveDateTime,
    /// Logged amount, if the entry carries one
    #[serde(default)]
    pub quantity: Option<f64>,
    /// Unit the quantity was entered in
    #[serde(default)]
    pub unit: Option<String>,
    /// Optional note
    #[serde(default)]
    pub note: Option<String>,
}

impl TrackableLog {
    /// Create a log without a quantity.
    pub fn new(trackable_id: Uuid, logged_at: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            trackable_id,
            logged_at,
            quantity: None,
            unit: None,
            note: None,
        }
    }

    /// Set the logged quantity.
    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Set the unit the quantity was entered in.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

/// Everything the goal engine reads, fully materialized by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivitySnapshot {
    pub exercises: Vec<Exercise>,
    pub trackables: Vec<TrackableItem>,
    pub strength_sets: Vec<StrengthSet>,
    pub cardio_sessions: Vec<CardioSession>,
    pub weight_entries: Vec<WeightEntry>,
    pub trackable_logs: Vec<TrackableLog>,
}

impl ActivitySnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an exercise by id.
    pub fn exercise(&self, id: Uuid) -> Option<&Exercise> {
        self.exercises.iter().find(|exercise| exercise.id == id)
    }

    /// Look up a tracked item by id.
    pub fn trackable(&self, id: Uuid) -> Option<&TrackableItem> {
        self.trackables.iter().find(|item| item.id == id)
    }

    /// Total number of activity records (catalog entries excluded).
    pub fn record_count(&self) -> usize {
        self.strength_sets.len()
            + self.cardio_sessions.len()
            + self.weight_entries.len()
            + self.trackable_logs.len()
    }
}
