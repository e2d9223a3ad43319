//! IronStreak - Goal progress and streak engine
//!
//! Computes progress and streaks for personal fitness goals from logged
//! strength sets, cardio sessions, body-weight entries and custom trackables.
//! Goals are bucketed into daily, weekly, monthly or yearly periods on a
//! local calendar and evaluated against an at-least or at-most target.

pub mod goals;
pub mod models;
pub mod storage;

// Re-export commonly used types
pub use goals::service::GoalProgressService;
pub use goals::types::{Goal, GoalProgressSummary, GoalStreakInfo};
pub use models::types::ActivitySnapshot;
pub use storage::config::AppConfig;
