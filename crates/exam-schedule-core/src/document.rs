//! Record aggregation and the emitted output document.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use crate::extract::SkipReason;
use crate::record::Record;
use crate::validate::{Rejection, validate};

/// Descriptions of every field a record may carry, in output order.
pub fn fields_description() -> IndexMap<String, String> {
    [
        ("Course", "Course code"),
        ("Section", "Class section number"),
        ("Final Date", "Examination date (YYYY-MM-DD)"),
        ("Start Time", "Exam start time (24-hour format)"),
        ("End Time", "Exam end time (24-hour format)"),
        ("Room.", "Examination room"),
        ("Dept.", "Department offering the course"),
        ("Page Number", "Page number from which the entry was extracted"),
        ("Line Number", "Line number from which the entry was extracted"),
        ("RowText", "Full concatenated text of the row as it appears in the PDF"),
        ("BoundingBox", "Coordinates of the row in the PDF (x0, y0, x1, y1)"),
    ]
    .into_iter()
    .map(|(field, description)| (field.to_string(), description.to_string()))
    .collect()
}

/// Document-level information written next to the records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    /// Path of the source PDF as given by the caller.
    pub source: String,
    /// RFC 3339 UTC timestamp of the run.
    pub generated_at: String,
    pub total_entries: usize,
    pub fields_description: IndexMap<String, String>,
}

/// The emitted output document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub metadata: Metadata,
    pub exams: Vec<Record>,
}

/// Counters describing what happened during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    pub pages: usize,
    pub pages_without_tables: usize,
    pub tables: usize,
    pub rows: usize,
    pub header_rows: usize,
    pub blank_rows: usize,
    pub repeated_headers: usize,
    pub rejected: usize,
    pub accepted: usize,
    pub synthetic_boxes: usize,
    pub unlocated_lines: usize,
}

impl ExtractionStats {
    pub fn skipped(&self) -> usize {
        self.header_rows + self.blank_rows + self.repeated_headers
    }
}

impl fmt::Display for ExtractionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pages ({} without tables), {} tables, {} rows: {} accepted, {} rejected, \
             {} skipped ({} header, {} blank, {} repeated header); \
             {} synthetic boxes, {} unlocated lines",
            self.pages,
            self.pages_without_tables,
            self.tables,
            self.rows,
            self.accepted,
            self.rejected,
            self.skipped(),
            self.header_rows,
            self.blank_rows,
            self.repeated_headers,
            self.synthetic_boxes,
            self.unlocated_lines,
        )
    }
}

/// Collects accepted records in encounter order.
///
/// Owned by a single run and passed to each page step; nothing is sorted or
/// deduplicated.
#[derive(Debug, Default)]
pub struct Aggregator {
    records: Vec<Record>,
    stats: ExtractionStats,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `record` and append it if accepted. A rejection is counted
    /// and handed back so the caller can report it with row context.
    pub fn offer(&mut self, record: Record) -> Result<(), Rejection> {
        match validate(&record) {
            Ok(()) => {
                log::debug!(
                    "added entry: Course={}, Section={}, Page={}",
                    record.course().unwrap_or_default(),
                    record.section().unwrap_or_default(),
                    record.page_number.unwrap_or_default(),
                );
                self.stats.accepted += 1;
                self.records.push(record);
                Ok(())
            }
            Err(rejection) => {
                self.stats.rejected += 1;
                Err(rejection)
            }
        }
    }

    pub fn note_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::HeaderRow => self.stats.header_rows += 1,
            SkipReason::BlankRow => self.stats.blank_rows += 1,
            SkipReason::HeaderRepeat => self.stats.repeated_headers += 1,
        }
    }

    pub fn stats(&self) -> &ExtractionStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut ExtractionStats {
        &mut self.stats
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Assemble the output document.
    pub fn into_document(self, source: impl Into<String>, generated_at: DateTime<Utc>) -> Document {
        Document {
            metadata: Metadata {
                source: source.into(),
                generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Micros, true),
                total_entries: self.records.len(),
                fields_description: fields_description(),
            },
            exams: self.records,
        }
    }
}
