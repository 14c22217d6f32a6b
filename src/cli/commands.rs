//! CLI command definitions
//!
//! Two grammars live here: the startup arguments of the binary itself, and
//! the per-line shell grammar. Shell lines are whitespace-split and parsed
//! with a `multicall` parser, so the first word of a line is the command.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mindtrack")]
#[command(about = "Terminal growth mindset tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (default: ./mindtrack.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Session date as YYYY-MM-DD (default: the current local date)
    #[arg(long, value_name = "DATE")]
    pub today: Option<String>,
}

/// One line of shell input
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// Show the current quote
    Quote {
        #[command(subcommand)]
        action: Option<QuoteAction>,
    },

    /// Mindset journal
    Journal {
        #[command(subcommand)]
        action: JournalAction,
    },

    /// Growth goals
    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },

    /// Daily growth habits
    Habit {
        #[command(subcommand)]
        action: HabitAction,
    },

    /// Journal activity and goal completion summary
    Insights,

    /// Recommended books, talks, and daily practices
    Resources,

    /// Journal, goals, and habits in one view
    Dashboard,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug)]
pub enum QuoteAction {
    /// Advance to the next quote
    Next,
}

#[derive(Subcommand, Debug)]
pub enum JournalAction {
    /// Add a journal entry
    Add {
        /// Date reference for the entry (e.g., yesterday, 2025-01-17)
        #[arg(long, value_name = "WHEN")]
        on: Option<String>,

        /// Entry text
        #[arg(value_name = "TEXT")]
        text: Vec<String>,
    },

    /// List entries, newest first
    List,
}

#[derive(Subcommand, Debug)]
pub enum GoalAction {
    /// Add a goal
    Add {
        /// Target date reference (e.g., 2025-06-01, in-30-days)
        #[arg(long, value_name = "WHEN")]
        target: String,

        /// Category: learning, career, personal, health, relationships
        #[arg(long, value_name = "NAME", default_value = "learning")]
        category: String,

        /// Goal description
        #[arg(value_name = "TEXT")]
        text: Vec<String>,
    },

    /// List goals with their progress
    List {
        /// Include completed goals
        #[arg(short, long)]
        all: bool,
    },

    /// Mark a goal as completed
    Done {
        /// Position from 'goal list'
        #[arg(value_name = "POSITION")]
        position: usize,
    },
}

#[derive(Subcommand, Debug)]
pub enum HabitAction {
    /// List habits and their streaks
    List,

    /// Mark a habit done for today
    Done {
        /// Position from 'habit list'
        #[arg(value_name = "POSITION")]
        position: usize,
    },
}
