//! Error types for mindtrack

use thiserror::Error;

/// Main error type for the mindtrack application
#[derive(Debug, Error)]
pub enum MindtrackError {
    #[error("Invalid date reference: {0}")]
    InvalidDateRef(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No goal at position {0}")]
    GoalOutOfRange(usize),

    #[error("No habit at position {0}")]
    HabitOutOfRange(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl MindtrackError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MindtrackError::Config(_) | MindtrackError::TomlDeserialize(_) => 2,
            MindtrackError::InvalidDateRef(_) => 3,
            MindtrackError::GoalOutOfRange(_) | MindtrackError::HabitOutOfRange(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MindtrackError::InvalidDateRef(ref_str) => {
                format!(
                    "Invalid date reference: '{}'\n\n\
                    Valid date references:\n\
                    • today, yesterday, tomorrow\n\
                    • in-N-days (e.g., in-10-days)\n\
                    • N-days-ago (e.g., 3-days-ago)\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2025-01-17)\n\n\
                    Examples:\n\
                    journal add --on yesterday Kept at it despite the setback\n\
                    goal add --target in-30-days Finish the borrow checker chapter",
                    ref_str
                )
            }
            MindtrackError::GoalOutOfRange(position) => {
                format!(
                    "No goal at position {}\n\n\
                    Suggestions:\n\
                    • Run 'goal list --all' to see goal positions\n\
                    • Positions are the numbers shown in the list, starting at 1\n\
                    • Completed goals keep their position",
                    position
                )
            }
            MindtrackError::HabitOutOfRange(position) => {
                format!(
                    "No habit at position {}\n\n\
                    Suggestions:\n\
                    • Run 'habit list' to see habit positions\n\
                    • Positions are the numbers shown in the list, starting at 1",
                    position
                )
            }
            MindtrackError::Validation(msg) => {
                if msg.contains("Unknown category") {
                    format!(
                        "{}\n\n\
                        Valid categories: learning, career, personal, health, relationships\n\
                        Example: goal add --target 2025-06-01 --category health Run a 10k",
                        msg
                    )
                } else if msg.contains("empty") {
                    format!(
                        "{}\n\n\
                        Suggestions:\n\
                        • Write the text after the command, no quotes needed\n\
                        • Example: journal add Tried a harder problem set today",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            MindtrackError::Config(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Pass --config with a path to a readable TOML file\n\
                    • Without --config, ./mindtrack.toml is used when present\n\
                    • Valid keys: habits (list of names), [[quotes]] with text and author",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MindtrackError
pub type Result<T> = std::result::Result<T, MindtrackError>;
