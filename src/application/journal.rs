//! Journal use cases

use crate::domain::{DateRef, JournalEntry, Session};
use crate::error::Result;
use chrono::NaiveDate;

/// Add a journal entry, resolving an optional date reference against today.
///
/// With no reference the entry is dated today.
pub fn add_entry(
    session: &mut Session,
    when: Option<&str>,
    text: &str,
    today: NaiveDate,
) -> Result<JournalEntry> {
    // 1. Resolve the entry date
    let date = match when {
        Some(raw) => DateRef::parse(raw)?.resolve(today),
        None => today,
    };

    // 2. Record the entry
    let entry = session.add_journal_entry(date, text)?;
    Ok(entry.clone())
}
