//! Activity records and catalog entries.
//!
//! Snapshots of what the storage layer owns:
//! - Exercises and tracked items (the catalog goals point at)
//! - Strength sets and cardio sessions
//! - Body-weight entries and free-form trackable logs

pub mod types;
pub mod units;

// Re-exports for convenience
pub use types::{
    ActivitySnapshot, CardioSession, Exercise, ExerciseKind, StrengthSet, TrackableItem,
    TrackableKind, TrackableLog, WeightEntry,
};
pub use units::{DistanceUnit, DurationUnit, WeightUnit};
