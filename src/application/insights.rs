//! Insights use case - derived reports over the session

use crate::domain::Session;
use chrono::Datelike;
use std::collections::BTreeMap;

/// Journal entry count for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyCount {
    pub year: i32,
    pub month: u32,
    pub count: usize,
}

/// Completed vs pending goal totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GoalCompletionSummary {
    pub completed: usize,
    pub pending: usize,
}

/// Count journal entries per calendar month, earliest month first
pub fn journal_activity(session: &Session) -> Vec<MonthlyCount> {
    let mut counts: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for entry in session.journal() {
        *counts
            .entry((entry.date.year(), entry.date.month()))
            .or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|((year, month), count)| MonthlyCount { year, month, count })
        .collect()
}

/// Tally completed and pending goals
pub fn goal_completion(session: &Session) -> GoalCompletionSummary {
    let completed = session.goals().iter().filter(|g| g.completed).count();
    GoalCompletionSummary {
        completed,
        pending: session.goals().len() - completed,
    }
}
