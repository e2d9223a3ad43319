//! Unit test modules.

mod calendar_test;
mod goal_progress_test;
