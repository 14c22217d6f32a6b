//! Goal type, categories, and time-based progress

use crate::error::{MindtrackError, Result};
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

/// Life area a goal belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Learning,
    Career,
    Personal,
    Health,
    Relationships,
}

impl FromStr for Category {
    type Err = MindtrackError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "learning" => Ok(Category::Learning),
            "career" => Ok(Category::Career),
            "personal" => Ok(Category::Personal),
            "health" => Ok(Category::Health),
            "relationships" => Ok(Category::Relationships),
            _ => Err(MindtrackError::Validation(format!(
                "Unknown category: '{}'. Valid categories are: learning, career, personal, health, relationships",
                s
            ))),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Learning => "Learning",
            Category::Career => "Career",
            Category::Personal => "Personal",
            Category::Health => "Health",
            Category::Relationships => "Relationships",
        };
        write!(f, "{}", name)
    }
}

/// A goal with a target date and completion state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub description: String,
    pub category: Category,
    /// Date the goal was added; progress is measured from here
    pub created: NaiveDate,
    pub target_date: NaiveDate,
    pub completed: bool,
}

impl Goal {
    pub fn new(
        description: impl Into<String>,
        category: Category,
        created: NaiveDate,
        target_date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            category,
            created,
            target_date,
            completed: false,
        }
    }

    /// Mark the goal as completed. Completing an already-completed goal
    /// is a no-op.
    pub fn complete(&mut self) {
        self.completed = true;
    }

    /// Percentage of the goal's time window that has elapsed as of `today`.
    ///
    /// Progress is purely time-based: 0 before any time has passed, 100 once
    /// the target date is reached, linear in between. A goal whose target
    /// date is its creation date jumps straight from 0 to 100.
    pub fn progress_percent(&self, today: NaiveDate) -> u8 {
        let total = (self.target_date - self.created).num_days();
        let elapsed = (today - self.created).num_days();

        if elapsed <= 0 {
            return 0;
        }
        if elapsed >= total {
            return 100;
        }
        ((elapsed * 100) / total).min(100) as u8
    }
}
