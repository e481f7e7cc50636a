//! Date and time standardization.
//!
//! Both functions are total: a value either matches the schedule's source
//! format and is rewritten, or it is returned untouched. The rewritten forms
//! (`YYYY-MM-DD`, `HH:MM`) never match the source formats again, so applying
//! either function twice gives the same result as applying it once.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};

/// Day, abbreviated month, two-digit year, e.g. `20-Mar-25`.
const SOURCE_DATE_FORMAT: &str = "%d-%b-%y";
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// 12-hour clock with meridiem marker, e.g. `9:05 AM`.
const SOURCE_TIME_FORMAT: &str = "%I:%M %p";
const CLOCK_24H_FORMAT: &str = "%H:%M";

/// Result of a standardization attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Standardized {
    /// The input matched the source format and was rewritten.
    Parsed(String),
    /// The input did not match; this is the original value.
    Unchanged(String),
}

impl Standardized {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Parsed(value) | Self::Unchanged(value) => value,
        }
    }

    pub fn into_value(self) -> String {
        match self {
            Self::Parsed(value) | Self::Unchanged(value) => value,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }
}

impl fmt::Display for Standardized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rewrite `20-Mar-25` style dates to ISO `2025-03-20`.
///
/// Two-digit years 70..=99 map to the 1900s, everything else to the 2000s.
pub fn standardize_date(value: &str) -> Standardized {
    match NaiveDate::parse_from_str(value.trim(), SOURCE_DATE_FORMAT) {
        Ok(date) => Standardized::Parsed(date.format(ISO_DATE_FORMAT).to_string()),
        Err(_) => Standardized::Unchanged(value.to_string()),
    }
}

/// Rewrite `12:00 PM` style times to 24-hour `12:00`.
///
/// The meridiem marker must be separated from the clock by whitespace;
/// `9:05AM` is left as is.
pub fn standardize_time(value: &str) -> Standardized {
    let trimmed = value.trim();
    // chrono lets a format space match zero characters.
    if !trimmed.contains(char::is_whitespace) {
        return Standardized::Unchanged(value.to_string());
    }
    match NaiveTime::parse_from_str(trimmed, SOURCE_TIME_FORMAT) {
        Ok(time) => Standardized::Parsed(time.format(CLOCK_24H_FORMAT).to_string()),
        Err(_) => Standardized::Unchanged(value.to_string()),
    }
}
