//! Habit type and daily streak tracking

use chrono::NaiveDate;

/// Outcome of recording a habit completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakUpdate {
    /// Streak grew by one, to the carried value: first completion ever, or
    /// the day after the last one
    Extended(u32),
    /// A gap of more than one day restarted the streak at 1
    Reset,
    /// Habit was already completed on this date; nothing changed
    AlreadyDone,
    /// Completion date precedes the last recorded completion; nothing changed
    Backdated,
}

/// A daily habit with its current streak
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Habit {
    pub name: String,
    pub streak: u32,
    pub last_completed: Option<NaiveDate>,
}

impl Habit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            streak: 0,
            last_completed: None,
        }
    }

    /// Record a completion for `today` and update the streak.
    ///
    /// Completing on consecutive days extends the streak; a gap of more than
    /// one day restarts it at 1. Completing twice on the same day, or with a
    /// date earlier than the last completion, leaves the habit untouched.
    pub fn record_completion(&mut self, today: NaiveDate) -> StreakUpdate {
        match self.last_completed {
            Some(last) if last == today => StreakUpdate::AlreadyDone,
            Some(last) if today < last => StreakUpdate::Backdated,
            Some(last) if (today - last).num_days() == 1 => {
                self.streak += 1;
                self.last_completed = Some(today);
                StreakUpdate::Extended(self.streak)
            }
            Some(_) => {
                self.streak = 1;
                self.last_completed = Some(today);
                StreakUpdate::Reset
            }
            None => {
                self.streak += 1;
                self.last_completed = Some(today);
                StreakUpdate::Extended(self.streak)
            }
        }
    }
}
