//! Journal entry type

use chrono::NaiveDate;

/// A single dated journal entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub date: NaiveDate,
    pub text: String,
}

impl JournalEntry {
    pub fn new(date: NaiveDate, text: impl Into<String>) -> Self {
        Self {
            date,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_keeps_text_untrimmed() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let entry = JournalEntry::new(date, "  learned about borrow checking  ");
        assert_eq!(entry.text, "  learned about borrow checking  ");
        assert_eq!(entry.date, date);
    }
}
