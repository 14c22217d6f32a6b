//! Application layer - Use cases and orchestration

pub mod goals;
pub mod habits;
pub mod insights;
pub mod journal;

pub use insights::{GoalCompletionSummary, MonthlyCount};
