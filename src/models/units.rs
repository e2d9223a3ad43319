//! Display units and conversions from canonical storage units.
//!
//! Distance is stored in kilometers and weight in kilograms; goals carry the
//! unit the user picked and values are converted at aggregation time.

use serde::{Deserialize, Serialize};

/// Kilometers per mile.
pub const KM_PER_MILE: f64 = 1.60934;

/// Kilograms per pound.
pub const KG_PER_POUND: f64 = 0.45359237;

/// Distance display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Miles
    #[default]
    Mi,
    /// Kilometers
    Km,
}

impl DistanceUnit {
    pub const ALL: [DistanceUnit; 2] = [DistanceUnit::Mi, DistanceUnit::Km];

    /// Parse a raw unit string ("mi" / "km").
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "mi" => Some(DistanceUnit::Mi),
            "km" => Some(DistanceUnit::Km),
            _ => None,
        }
    }

    /// Raw identifier stored on goals.
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::Mi => "mi",
            DistanceUnit::Km => "km",
        }
    }

    /// Upper-case label for display.
    pub fn label(&self) -> &'static str {
        match self {
            DistanceUnit::Mi => "MI",
            DistanceUnit::Km => "KM",
        }
    }

    /// Convert a distance in kilometers to this unit.
    pub fn from_kilometers(&self, km: f64) -> f64 {
        match self {
            DistanceUnit::Mi => km / KM_PER_MILE,
            DistanceUnit::Km => km,
        }
    }

    /// Convert a distance in this unit to kilometers.
    pub fn to_kilometers(&self, value: f64) -> f64 {
        match self {
            DistanceUnit::Mi => value * KM_PER_MILE,
            DistanceUnit::Km => value,
        }
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Weight display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Pounds
    #[default]
    Lb,
    /// Kilograms
    Kg,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 2] = [WeightUnit::Lb, WeightUnit::Kg];

    /// Parse a raw unit string ("lb" / "kg").
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "lb" => Some(WeightUnit::Lb),
            "kg" => Some(WeightUnit::Kg),
            _ => None,
        }
    }

    /// Raw identifier stored on goals.
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Lb => "lb",
            WeightUnit::Kg => "kg",
        }
    }

    /// Upper-case label for display.
    pub fn label(&self) -> &'static str {
        match self {
            WeightUnit::Lb => "LB",
            WeightUnit::Kg => "KG",
        }
    }

    /// Convert a weight in kilograms to this unit.
    pub fn from_kilograms(&self, kg: f64) -> f64 {
        match self {
            WeightUnit::Lb => kg / KG_PER_POUND,
            WeightUnit::Kg => kg,
        }
    }

    /// Convert a weight in this unit to kilograms.
    pub fn to_kilograms(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Lb => value * KG_PER_POUND,
            WeightUnit::Kg => value,
        }
    }
}

impl std::fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Unit for entering durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationUnit {
    #[serde(rename = "min")]
    Minutes,
    #[serde(rename = "hr")]
    Hours,
}

impl DurationUnit {
    /// Short label ("min" / "hr").
    pub fn display_label(&self) -> &'static str {
        match self {
            DurationUnit::Minutes => "min",
            DurationUnit::Hours => "hr",
        }
    }

    /// Convert whole seconds into this unit.
    pub fn convert(&self, seconds: u32) -> f64 {
        match self {
            DurationUnit::Minutes => f64::from(seconds) / 60.0,
            DurationUnit::Hours => f64::from(seconds) / 3600.0,
        }
    }

    /// Convert a value in this unit into seconds.
    pub fn seconds(&self, value: f64) -> f64 {
        match self {
            DurationUnit::Minutes => value * 60.0,
            DurationUnit::Hours => value * 3600.0,
        }
    }

    /// Format a value in this unit as a clock duration.
    pub fn formatted(&self, value: f64) -> String {
        crate::goals::format::format_duration(self.seconds(value) as i64)
    }
}
