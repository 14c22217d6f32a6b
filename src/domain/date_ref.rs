//! Date reference parsing and resolution
//!
//! Date references are what the shell accepts wherever a date is expected:
//! named days, relative day offsets, or specific ISO dates.

use crate::error::{MindtrackError, Result};
use chrono::{Duration, NaiveDate};

/// A date reference that can be resolved against a base date
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateRef {
    /// Current day
    Today,
    /// Previous day
    Yesterday,
    /// Next day
    Tomorrow,
    /// N days after the base date ("in 3 days")
    InDays(i64),
    /// N days before the base date ("3 days ago")
    DaysAgo(i64),
    /// Specific date
    Specific(NaiveDate),
}

impl DateRef {
    /// Parse a date reference string.
    ///
    /// Relative references accept spaces, hyphens, or underscores between
    /// words ("in 3 days", "in-3-days"), so they survive whitespace-split
    /// shell input as a single token.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(DateRef::Today),
            "yesterday" => Ok(DateRef::Yesterday),
            "tomorrow" => Ok(DateRef::Tomorrow),
            _ => {
                let words: Vec<&str> = normalized
                    .split([' ', '-', '_'])
                    .filter(|w| !w.is_empty())
                    .collect();

                match words.as_slice() {
                    ["in", n, "day" | "days"] => Self::parse_day_count(input, n).map(DateRef::InDays),
                    [n, "day" | "days", "ago"] => {
                        Self::parse_day_count(input, n).map(DateRef::DaysAgo)
                    }
                    _ => {
                        // Try parsing as YYYY-MM-DD
                        NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                            .map(DateRef::Specific)
                            .map_err(|_| MindtrackError::InvalidDateRef(input.to_string()))
                    }
                }
            }
        }
    }

    /// Parse the numeric part of a relative reference. Bounded so that
    /// resolving the offset can never leave the representable date range.
    fn parse_day_count(input: &str, n: &str) -> Result<i64> {
        n.parse::<u16>()
            .map(i64::from)
            .map_err(|_| MindtrackError::InvalidDateRef(input.to_string()))
    }

    /// Resolve this date reference to an actual date
    pub fn resolve(&self, base_date: NaiveDate) -> NaiveDate {
        match self {
            DateRef::Today => base_date,
            DateRef::Yesterday => base_date - Duration::days(1),
            DateRef::Tomorrow => base_date + Duration::days(1),
            DateRef::InDays(n) => base_date + Duration::days(*n),
            DateRef::DaysAgo(n) => base_date - Duration::days(*n),
            DateRef::Specific(date) => *date,
        }
    }
}
