//! Configuration loading
//!
//! An optional TOML file customizes the seeded habit names and the quote
//! deck. The file is only ever read; session data is never written anywhere.

use crate::domain::{quote, Quote, DEFAULT_HABITS};
use crate::error::{MindtrackError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Config file picked up from the working directory when no --config is given
pub const CONFIG_FILE_NAME: &str = "mindtrack.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    habits: Option<Vec<String>>,
    quotes: Option<Vec<Quote>>,
}

impl Config {
    /// Resolve the startup configuration: an explicit path must load, a
    /// `mindtrack.toml` in the working directory loads if present, and
    /// otherwise the compiled-in defaults apply.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        let local = Path::new(CONFIG_FILE_NAME);
        if local.exists() {
            return Self::load_from_path(local);
        }

        Ok(Config::default())
    }

    /// Load and validate a config file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MindtrackError::Config(format!("Config file not found: {}", path.display()))
            } else {
                MindtrackError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let Some(habits) = &self.habits {
            if habits.is_empty() {
                return Err(MindtrackError::Config(
                    "habits must list at least one name".to_string(),
                ));
            }
            if habits.iter().any(|name| name.trim().is_empty()) {
                return Err(MindtrackError::Config(
                    "habit names cannot be blank".to_string(),
                ));
            }
        }

        if let Some(quotes) = &self.quotes {
            if quotes.is_empty() {
                return Err(MindtrackError::Config(
                    "quotes must list at least one entry".to_string(),
                ));
            }
            if quotes
                .iter()
                .any(|q| q.text.trim().is_empty() || q.author.trim().is_empty())
            {
                return Err(MindtrackError::Config(
                    "quote text and author cannot be blank".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Habit names to seed the session with
    pub fn habit_names(&self) -> Vec<String> {
        match &self.habits {
            Some(names) => names.clone(),
            None => DEFAULT_HABITS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The quote deck for this session; never empty
    pub fn quote_deck(&self) -> Vec<Quote> {
        match &self.quotes {
            Some(quotes) => quotes.clone(),
            None => quote::builtin_quotes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config_uses_builtins() {
        let config = Config::default();

        assert_eq!(
            config.habit_names(),
            vec![
                "Daily Learning".to_string(),
                "Positive Affirmations".to_string(),
                "Challenge Comfort Zone".to_string()
            ]
        );
        assert_eq!(config.quote_deck().len(), 8);
    }

    #[test]
    fn test_load_custom_habits() {
        let file = config_file(r#"habits = ["Meditate", "Read"]"#);

        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(
            config.habit_names(),
            vec!["Meditate".to_string(), "Read".to_string()]
        );
        // Quotes stay at the built-in deck
        assert_eq!(config.quote_deck().len(), 8);
    }

    #[test]
    fn test_load_custom_quotes() {
        let file = config_file(
            r#"
[[quotes]]
text = "Do the thing."
author = "Somebody"
"#,
        );

        let config = Config::load_from_path(file.path()).unwrap();
        let deck = config.quote_deck();
        assert_eq!(deck.len(), 1);
        assert_eq!(deck[0].text, "Do the thing.");
        assert_eq!(deck[0].author, "Somebody");
    }

    #[test]
    fn test_empty_file_means_defaults() {
        let file = config_file("");

        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.habit_names().len(), 3);
        assert_eq!(config.quote_deck().len(), 8);
    }

    #[test]
    fn test_empty_habits_list_rejected() {
        let file = config_file("habits = []");

        let result = Config::load_from_path(file.path());
        assert!(matches!(result.unwrap_err(), MindtrackError::Config(_)));
    }

    #[test]
    fn test_blank_habit_name_rejected() {
        let file = config_file(r#"habits = ["Meditate", "  "]"#);

        let result = Config::load_from_path(file.path());
        assert!(matches!(result.unwrap_err(), MindtrackError::Config(_)));
    }

    #[test]
    fn test_empty_quote_deck_rejected() {
        let file = config_file("quotes = []");

        let result = Config::load_from_path(file.path());
        assert!(matches!(result.unwrap_err(), MindtrackError::Config(_)));
    }

    #[test]
    fn test_blank_quote_author_rejected() {
        let file = config_file(
            r#"
[[quotes]]
text = "Do the thing."
author = ""
"#,
        );

        let result = Config::load_from_path(file.path());
        assert!(matches!(result.unwrap_err(), MindtrackError::Config(_)));
    }

    #[test]
    fn test_missing_explicit_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/mindtrack.toml"));

        match result.unwrap_err() {
            MindtrackError::Config(msg) => assert!(msg.contains("not found")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_file() {
        let file = config_file("habits = not valid toml");

        let result = Config::load_from_path(file.path());
        assert!(matches!(
            result.unwrap_err(),
            MindtrackError::TomlDeserialize(_)
        ));
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let file = config_file(r#"habits = ["Only One"]"#);

        let config = Config::resolve(Some(file.path())).unwrap();
        assert_eq!(config.habit_names(), vec!["Only One".to_string()]);
    }
}
