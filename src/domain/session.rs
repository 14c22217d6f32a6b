//! In-memory session store
//!
//! One `Session` holds everything the tracker knows for the lifetime of a
//! single interactive run: journal entries, goals, habits, and the quote
//! cursor. Nothing is persisted; the session is discarded on exit.

use crate::domain::goal::{Category, Goal};
use crate::domain::habit::{Habit, StreakUpdate};
use crate::domain::journal::JournalEntry;
use crate::domain::quote;
use crate::error::{MindtrackError, Result};
use chrono::NaiveDate;

/// Habit names seeded into every session that has no custom configuration
pub const DEFAULT_HABITS: [&str; 3] = [
    "Daily Learning",
    "Positive Affirmations",
    "Challenge Comfort Zone",
];

/// All tracker state for one interactive session.
///
/// Collections are private; every mutation goes through the operation
/// methods, which validate input and report what changed.
#[derive(Debug, Clone)]
pub struct Session {
    journal: Vec<JournalEntry>,
    goals: Vec<Goal>,
    habits: Vec<Habit>,
    quote_cursor: usize,
}

impl Session {
    /// Create a session with empty journal and goals and the default habits
    pub fn new() -> Self {
        Self {
            journal: Vec::new(),
            goals: Vec::new(),
            habits: DEFAULT_HABITS.iter().map(|name| Habit::new(*name)).collect(),
            quote_cursor: 0,
        }
    }

    /// Create a session seeded with custom habit names
    pub fn with_habits(names: &[String]) -> Self {
        Self {
            journal: Vec::new(),
            goals: Vec::new(),
            habits: names.iter().map(|name| Habit::new(name.clone())).collect(),
            quote_cursor: 0,
        }
    }

    /// Add a journal entry for the given date.
    ///
    /// Rejects whitespace-only text and leaves the store untouched in that
    /// case. The text is stored exactly as given.
    pub fn add_journal_entry(&mut self, date: NaiveDate, text: &str) -> Result<&JournalEntry> {
        if text.trim().is_empty() {
            return Err(MindtrackError::Validation(
                "Journal entry text cannot be empty".to_string(),
            ));
        }

        self.journal.push(JournalEntry::new(date, text));
        let index = self.journal.len() - 1;
        Ok(&self.journal[index])
    }

    /// Add a goal created today with the given target date and category.
    ///
    /// Rejects a whitespace-only description. The target date is taken as
    /// given; progress handles targets at or before creation.
    pub fn add_goal(
        &mut self,
        description: &str,
        target_date: NaiveDate,
        category: Category,
        today: NaiveDate,
    ) -> Result<&Goal> {
        if description.trim().is_empty() {
            return Err(MindtrackError::Validation(
                "Goal description cannot be empty".to_string(),
            ));
        }

        self.goals
            .push(Goal::new(description, category, today, target_date));
        let index = self.goals.len() - 1;
        Ok(&self.goals[index])
    }

    /// Mark the goal at `index` (0-based) as completed.
    ///
    /// Completing an already-completed goal succeeds with no effect. The
    /// out-of-range error reports the 1-based position users see in lists.
    pub fn complete_goal(&mut self, index: usize) -> Result<&Goal> {
        let goal = self
            .goals
            .get_mut(index)
            .ok_or(MindtrackError::GoalOutOfRange(index + 1))?;
        goal.complete();
        Ok(&*goal)
    }

    /// Record a completion of the habit at `index` (0-based) for `today`.
    ///
    /// Returns the habit together with what happened to its streak. The
    /// out-of-range error reports the 1-based position users see in lists.
    pub fn complete_habit(
        &mut self,
        index: usize,
        today: NaiveDate,
    ) -> Result<(&Habit, StreakUpdate)> {
        let habit = self
            .habits
            .get_mut(index)
            .ok_or(MindtrackError::HabitOutOfRange(index + 1))?;
        let update = habit.record_completion(today);
        Ok((&*habit, update))
    }

    /// Advance the quote cursor one step through a deck of `deck_len` quotes
    /// and return its new value
    pub fn next_quote(&mut self, deck_len: usize) -> usize {
        self.quote_cursor = quote::advance(self.quote_cursor, deck_len);
        self.quote_cursor
    }

    pub fn journal(&self) -> &[JournalEntry] {
        &self.journal
    }

    /// Journal entries ordered newest first; entries sharing a date keep
    /// their insertion order
    pub fn journal_newest_first(&self) -> Vec<&JournalEntry> {
        let mut entries: Vec<&JournalEntry> = self.journal.iter().collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn quote_cursor(&self) -> usize {
        self.quote_cursor
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
