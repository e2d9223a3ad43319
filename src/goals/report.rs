//! Per-goal report combining summary, streak and catalog context.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::format::{format_long_date, streak_label};
use super::types::{Cadence, GoalProgressSummary, GoalStreakInfo};

/// Everything a goal card shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalReport {
    pub goal_id: Uuid,
    pub title: String,
    pub kind_label: String,
    pub cadence: Cadence,
    /// Exercise or tracked item name, if the goal points at one that exists
    pub context_label: Option<String>,
    pub summary: GoalProgressSummary,
    /// Absent for one-time goals
    pub streak: Option<GoalStreakInfo>,
}

impl GoalReport {
    /// Subtitle line, e.g. `Total Reps • Daily • Push-ups`.
    pub fn subtitle(&self) -> String {
        let mut parts = vec![self.kind_label.clone(), self.cadence.display_name().to_string()];
        if let Some(context) = &self.context_label {
            parts.push(context.clone());
        }
        parts.join(" • ")
    }

    /// Progress as a whole percentage.
    pub fn progress_percent(&self) -> Option<u32> {
        self.summary
            .progress_fraction
            .map(|fraction| (fraction * 100.0).round() as u32)
    }

    /// Current streak, e.g. `3 days`.
    pub fn current_streak_label(&self) -> Option<String> {
        self.streak
            .as_ref()
            .map(|streak| streak_label(self.cadence, streak.current_streak))
    }

    /// Best streak, e.g. `Best 5 days`; hidden until one period was met.
    pub fn best_streak_label(&self) -> Option<String> {
        self.streak
            .as_ref()
            .filter(|streak| streak.best_streak > 0)
            .map(|streak| format!("Best {}", streak_label(self.cadence, streak.best_streak)))
    }

    /// When the goal was last met, e.g. `Last achieved Oct 18, 2026`.
    pub fn last_met_label(&self) -> Option<String> {
        self.streak
            .as_ref()
            .and_then(|streak| streak.last_met_date)
            .map(|at| format!("Last achieved {}", format_long_date(at)))
    }
}
