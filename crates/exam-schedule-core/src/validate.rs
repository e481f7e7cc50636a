//! Acceptance rule for extracted records.

use std::fmt;

use crate::header::CanonicalHeader;
use crate::record::Record;

const REQUIRED: [CanonicalHeader; 3] = [
    CanonicalHeader::Course,
    CanonicalHeader::Section,
    CanonicalHeader::FinalDate,
];

/// Why a candidate record was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Labels of required fields that were absent or empty.
    MissingFields(Vec<String>),
    /// The course cell holds the literal header label `Course`.
    HeaderLabel,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::MissingFields(labels) => write!(f, "missing {}", labels.join(", ")),
            Rejection::HeaderLabel => write!(f, "course is the literal header label"),
        }
    }
}

/// Accept a record iff `Course`, `Section` and `Final Date` are non-empty and
/// `Course` is not the header label itself.
pub fn validate(record: &Record) -> Result<(), Rejection> {
    let missing: Vec<String> = REQUIRED
        .iter()
        .filter(|header| record.get(header).is_none_or(str::is_empty))
        .map(|header| header.label().to_string())
        .collect();

    if !missing.is_empty() {
        return Err(Rejection::MissingFields(missing));
    }
    if record.course() == Some("Course") {
        return Err(Rejection::HeaderLabel);
    }
    Ok(())
}
