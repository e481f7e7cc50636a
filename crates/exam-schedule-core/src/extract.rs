//! Row-level extraction: skip rules, positional field mapping, row text.

use std::fmt;

use crate::header::{CanonicalHeader, HeaderRow};
use crate::page::RawCell;
use crate::record::Record;
use crate::standardize::{standardize_date, standardize_time};
use crate::text::clean_cell;

/// Words whose presence anywhere in a row marks it as a repeated header.
///
/// This is deliberately broad: a data row whose room is "Date Lab" is
/// dropped too. Existing schedules depend on the current behavior.
pub const HEADER_KEYWORDS: [&str; 6] = ["course", "section", "date", "time", "room", "dept"];

/// Why a row never became a record candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Row 0 of every table, regardless of content.
    HeaderRow,
    /// Every cell absent or whitespace.
    BlankRow,
    /// A header keyword appeared in the row.
    HeaderRepeat,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::HeaderRow => write!(f, "table header row"),
            SkipReason::BlankRow => write!(f, "blank row"),
            SkipReason::HeaderRepeat => write!(f, "repeated header"),
        }
    }
}

/// Result of extracting one table row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Skipped(SkipReason),
    /// A record built from the row, not yet validated or positioned.
    Candidate(Record),
}

/// Maps table rows onto the document's canonical columns.
#[derive(Debug, Clone)]
pub struct TableRowExtractor<'a> {
    headers: &'a HeaderRow,
}

impl<'a> TableRowExtractor<'a> {
    pub fn new(headers: &'a HeaderRow) -> Self {
        Self { headers }
    }

    /// Extract the row at `row_index` of its table.
    ///
    /// Field values are standardized; position and page information is left
    /// for the caller to fill in.
    pub fn extract(&self, row_index: usize, row: &[RawCell]) -> RowOutcome {
        if row_index == 0 {
            return RowOutcome::Skipped(SkipReason::HeaderRow);
        }
        if is_blank_row(row) {
            return RowOutcome::Skipped(SkipReason::BlankRow);
        }
        if looks_like_header(row) {
            return RowOutcome::Skipped(SkipReason::HeaderRepeat);
        }

        let mut record = self.map_fields(row);
        record.row_text = Some(row_text(row));
        standardize_fields(&mut record);
        RowOutcome::Candidate(record)
    }

    /// Copy cell `i` into `record[headers[i]]` when both are non-blank.
    /// Cells beyond the header's length are ignored, and so are columns whose
    /// header collides with a positional output key.
    fn map_fields(&self, row: &[RawCell]) -> Record {
        let mut record = Record::new();
        for (header, cell) in self.headers.columns().iter().zip(row) {
            if header.is_blank() {
                continue;
            }
            if let Some(value) = clean_cell(cell) {
                if !record.insert(header, value) {
                    log::debug!("column '{header}' shadows a positional key; value dropped");
                }
            }
        }
        record
    }
}

fn is_blank_row(row: &[RawCell]) -> bool {
    row.iter()
        .all(|cell| cell.as_deref().is_none_or(|text| text.trim().is_empty()))
}

fn looks_like_header(row: &[RawCell]) -> bool {
    let joined = row
        .iter()
        .filter_map(|cell| cell.as_deref())
        .filter(|text| !text.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ");
    HEADER_KEYWORDS.iter().any(|keyword| joined.contains(keyword))
}

/// All non-blank cleaned cells joined by single spaces, in column order.
fn row_text(row: &[RawCell]) -> String {
    row.iter().filter_map(clean_cell).collect::<Vec<_>>().join(" ")
}

fn standardize_fields(record: &mut Record) {
    if let Some(value) = record.get_mut(&CanonicalHeader::FinalDate) {
        *value = standardize_date(value).into_value();
    }
    for header in [CanonicalHeader::StartTime, CanonicalHeader::EndTime] {
        if let Some(value) = record.get_mut(&header) {
            *value = standardize_time(value).into_value();
        }
    }
}
