//! Output formatting utilities
//!
//! Every renderer returns a `String`; the shell decides where it goes.
//! Dates are displayed as "January 17, 2025" throughout.

use crate::application::insights;
use crate::domain::{Goal, Habit, JournalEntry, Quote, Session, StreakUpdate};
use chrono::NaiveDate;

const PROGRESS_BAR_WIDTH: usize = 20;

/// Session banner printed once at startup
pub fn banner(today: NaiveDate) -> String {
    format!(
        "Growth Mindset Tracker\n\
         Transform your thinking, unlock your potential\n\n\
         Session date: {}. State lives in memory only; nothing is saved on exit.\n\
         Type 'help' to list commands, 'quit' to leave.",
        today.format("%B %d, %Y")
    )
}

/// Farewell line printed when the session ends
pub fn goodbye() -> String {
    "Session ended. Nothing was saved. Keep growing!".to_string()
}

/// Format a quote with its attribution
pub fn format_quote(quote: &Quote) -> String {
    format!("\"{}\"\n  - {}", quote.text, quote.author)
}

/// Format journal entries for display, assumed already ordered
pub fn format_journal(entries: &[&JournalEntry]) -> String {
    if entries.is_empty() {
        return "No journal entries yet".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}\n{}\n---\n",
            entry.date.format("%B %d, %Y"),
            entry.text
        ));
    }
    output
}

/// Format the goal list with positions and progress.
///
/// Pending goals only by default; positions always count the full list so
/// they stay valid for 'goal done'.
pub fn format_goals(goals: &[Goal], today: NaiveDate, include_completed: bool) -> String {
    if goals.is_empty() {
        return "No goals yet".to_string();
    }

    let mut output = String::new();
    for (idx, goal) in goals.iter().enumerate() {
        if goal.completed && !include_completed {
            continue;
        }

        output.push_str(&format!("{}. {}", idx + 1, goal.description));
        if goal.completed {
            output.push_str("  (completed)");
        }
        output.push('\n');
        output.push_str(&format!(
            "   Category: {} | Target: {}\n",
            goal.category,
            goal.target_date.format("%B %d, %Y")
        ));
        if !goal.completed {
            output.push_str(&format!(
                "   {}\n",
                progress_bar(goal.progress_percent(today))
            ));
        }
    }

    if output.is_empty() {
        return "No pending goals".to_string();
    }
    output
}

/// Format the habit list with positions and streaks
pub fn format_habits(habits: &[Habit]) -> String {
    if habits.is_empty() {
        return "No habits configured".to_string();
    }

    let widest = habits.iter().map(|h| h.name.len()).max().unwrap_or(0);

    let mut output = String::new();
    for (idx, habit) in habits.iter().enumerate() {
        output.push_str(&format!(
            "{}. {:width$}  Streak: {}\n",
            idx + 1,
            habit.name,
            format_days(habit.streak),
            width = widest
        ));
    }
    output
}

/// Format the outcome of a habit completion
pub fn format_streak_update(habit: &Habit, update: StreakUpdate) -> String {
    match update {
        StreakUpdate::Extended(streak) => {
            format!("{}: streak is now {}", habit.name, format_days(streak))
        }
        StreakUpdate::Reset => format!(
            "{}: missed a day or more, streak reset to 1 day",
            habit.name
        ),
        StreakUpdate::AlreadyDone => format!("{}: already completed today", habit.name),
        StreakUpdate::Backdated => format!(
            "{}: completion date is before the last recorded one, streak unchanged",
            habit.name
        ),
    }
}

/// Format the insights report: journal activity per month and goal
/// completion counts
pub fn format_insights(session: &Session) -> String {
    if session.journal().is_empty() && session.goals().is_empty() {
        return "Start journaling and setting goals to see insights here.".to_string();
    }

    let mut output = String::new();

    let activity = insights::journal_activity(session);
    if !activity.is_empty() {
        output.push_str("Journal Entries Per Month\n");
        for monthly in &activity {
            output.push_str(&format!(
                "  {}-{:02}  {}  {}\n",
                monthly.year,
                monthly.month,
                "#".repeat(monthly.count),
                monthly.count
            ));
        }
    }

    if !session.goals().is_empty() {
        if !output.is_empty() {
            output.push('\n');
        }
        let summary = insights::goal_completion(session);
        output.push_str(&format!(
            "Goals Completion Status\n  Completed: {}\n  Pending: {}\n",
            summary.completed, summary.pending
        ));
    }

    output
}

/// The static growth-resources section
pub fn resources_text() -> &'static str {
    "Recommended Books\n\
     \x20 - Mindset: The New Psychology of Success by Carol Dweck\n\
     \x20 - Grit: The Power of Passion and Perseverance by Angela Duckworth\n\
     \x20 - Atomic Habits by James Clear\n\
     \x20 - The Growth Mindset Coach by Annie Brock and Heather Hundley\n\
     \n\
     TED Talks\n\
     \x20 - The power of believing that you can improve, by Carol Dweck\n\
     \x20   https://www.ted.com/talks/carol_dweck_the_power_of_believing_that_you_can_improve\n\
     \x20 - Grit: The power of passion and perseverance, by Angela Duckworth\n\
     \x20   https://www.ted.com/talks/angela_lee_duckworth_grit_the_power_of_passion_and_perseverance\n\
     \x20 - The puzzle of motivation, by Dan Pink\n\
     \x20   https://www.ted.com/talks/dan_pink_the_puzzle_of_motivation\n\
     \n\
     Daily Practices\n\
     \x20 1. Embrace challenges: seek out one difficult task each day\n\
     \x20 2. Learn from criticism: ask for feedback and reflect on it\n\
     \x20 3. Celebrate effort: recognize the process, not just outcomes\n\
     \x20 4. Inspire others: share your growth journey with someone"
}

/// All sections in one view
pub fn format_dashboard(session: &Session, today: NaiveDate) -> String {
    format!(
        "Your Growth Mindset Dashboard\n\n\
         Mindset Journal\n{}\n\
         Growth Goals\n{}\n\
         Daily Growth Habits\n{}",
        format_journal(&session.journal_newest_first()),
        format_goals(session.goals(), today, false),
        format_habits(session.habits())
    )
}

fn progress_bar(percent: u8) -> String {
    let filled = (percent as usize * PROGRESS_BAR_WIDTH) / 100;
    format!(
        "[{}{}] {}%",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled),
        percent
    )
}

fn format_days(count: u32) -> String {
    if count == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", count)
    }
}
