//! Core domain types and operations

pub mod date_ref;
pub mod goal;
pub mod habit;
pub mod journal;
pub mod quote;
pub mod session;

pub use date_ref::DateRef;
pub use goal::{Category, Goal};
pub use habit::{Habit, StreakUpdate};
pub use journal::JournalEntry;
pub use quote::Quote;
pub use session::{Session, DEFAULT_HABITS};
