//! Canonical column vocabulary and header-row normalization.

use std::fmt;

use crate::page::RawCell;
use crate::text::clean_text;

/// A normalized column name used as a record key.
///
/// Labels keep the exact spelling the schedule front end reads, including the
/// trailing periods on `Room.`, `Dept.` and `SL.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CanonicalHeader {
    Course,
    Section,
    FinalDate,
    StartTime,
    EndTime,
    Room,
    Dept,
    SerialNumber,
    /// A header that matched no vocabulary term; holds the cleaned raw text.
    Other(String),
    /// An empty header cell. Its column is never copied into records.
    Blank,
}

impl CanonicalHeader {
    /// Classify one raw header cell.
    ///
    /// Case-insensitive substring match, first rule wins:
    /// `course`, `section`/`sec`, `date`, `start`/`from`, `end`/`to`,
    /// `room`, `dept`, `sl`/`serial`/`#`.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let cleaned = raw.map(clean_text).unwrap_or_default();
        if cleaned.is_empty() {
            return Self::Blank;
        }

        let lower = cleaned.to_lowercase();
        let has = |needles: &[&str]| needles.iter().any(|needle| lower.contains(needle));

        if has(&["course"]) {
            Self::Course
        } else if has(&["section", "sec"]) {
            Self::Section
        } else if has(&["date"]) {
            Self::FinalDate
        } else if has(&["start", "from"]) {
            Self::StartTime
        } else if has(&["end", "to"]) {
            Self::EndTime
        } else if has(&["room"]) {
            Self::Room
        } else if has(&["dept"]) {
            Self::Dept
        } else if has(&["sl", "serial", "#"]) {
            Self::SerialNumber
        } else {
            Self::Other(cleaned)
        }
    }

    /// The key this column uses in output records.
    pub fn label(&self) -> &str {
        match self {
            Self::Course => "Course",
            Self::Section => "Section",
            Self::FinalDate => "Final Date",
            Self::StartTime => "Start Time",
            Self::EndTime => "End Time",
            Self::Room => "Room.",
            Self::Dept => "Dept.",
            Self::SerialNumber => "SL.",
            Self::Other(raw) => raw,
            Self::Blank => "",
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

impl fmt::Display for CanonicalHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The ordered canonical column list for a whole document.
///
/// Derived once and never modified; column `i` of every data row is keyed by
/// `columns[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRow {
    columns: Vec<CanonicalHeader>,
}

impl HeaderRow {
    /// Normalize a raw header row, one canonical token per cell.
    pub fn from_raw_row(row: &[RawCell]) -> Self {
        Self {
            columns: row
                .iter()
                .map(|cell| CanonicalHeader::from_raw(cell.as_deref()))
                .collect(),
        }
    }

    /// Default columns used when the first page has no usable table.
    pub fn fallback() -> Self {
        Self {
            columns: vec![
                CanonicalHeader::Course,
                CanonicalHeader::Section,
                CanonicalHeader::FinalDate,
                CanonicalHeader::StartTime,
                CanonicalHeader::EndTime,
                CanonicalHeader::Room,
                CanonicalHeader::Dept,
            ],
        }
    }

    /// Derive the document header from the first table row of the first
    /// page, falling back to [`HeaderRow::fallback`] when there is none.
    pub fn derive(first_row: Option<&[RawCell]>) -> Self {
        match first_row {
            Some(row) => {
                let header = Self::from_raw_row(row);
                log::info!("extracted global headers: {header}");
                header
            }
            None => {
                log::warn!("could not extract headers from first page, using default columns");
                Self::fallback()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CanonicalHeader> {
        self.columns.get(index)
    }

    pub fn columns(&self) -> &[CanonicalHeader] {
        &self.columns
    }

    /// Index of the first column carrying `header`.
    pub fn position_of(&self, header: &CanonicalHeader) -> Option<usize> {
        self.columns.iter().position(|column| column == header)
    }
}

impl fmt::Display for HeaderRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.columns.iter().map(CanonicalHeader::label).collect();
        write!(f, "[{}]", labels.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(cells: &[Option<&str>]) -> Vec<RawCell> {
        cells.iter().map(|c| c.map(str::to_string)).collect()
    }

    #[test]
    fn vocabulary_terms() {
        assert_eq!(CanonicalHeader::from_raw(Some("Course Code")), CanonicalHeader::Course);
        assert_eq!(CanonicalHeader::from_raw(Some("Section")), CanonicalHeader::Section);
        assert_eq!(CanonicalHeader::from_raw(Some("Sec")), CanonicalHeader::Section);
        assert_eq!(CanonicalHeader::from_raw(Some("Exam Date")), CanonicalHeader::FinalDate);
        assert_eq!(CanonicalHeader::from_raw(Some("Start")), CanonicalHeader::StartTime);
        assert_eq!(CanonicalHeader::from_raw(Some("From")), CanonicalHeader::StartTime);
        assert_eq!(CanonicalHeader::from_raw(Some("End")), CanonicalHeader::EndTime);
        assert_eq!(CanonicalHeader::from_raw(Some("To")), CanonicalHeader::EndTime);
        assert_eq!(CanonicalHeader::from_raw(Some("Room")), CanonicalHeader::Room);
        assert_eq!(CanonicalHeader::from_raw(Some("Dept")), CanonicalHeader::Dept);
        assert_eq!(CanonicalHeader::from_raw(Some("SL")), CanonicalHeader::SerialNumber);
        assert_eq!(CanonicalHeader::from_raw(Some("Serial")), CanonicalHeader::SerialNumber);
        assert_eq!(CanonicalHeader::from_raw(Some("#")), CanonicalHeader::SerialNumber);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(CanonicalHeader::from_raw(Some("COURSE")), CanonicalHeader::Course);
        assert_eq!(CanonicalHeader::from_raw(Some("rOoM")), CanonicalHeader::Room);
    }

    #[test]
    fn first_rule_wins() {
        // "Course Section" contains both; course is checked first.
        assert_eq!(CanonicalHeader::from_raw(Some("Course Section")), CanonicalHeader::Course);
        // "Start Date" hits the date rule before the start rule.
        assert_eq!(CanonicalHeader::from_raw(Some("Start Date")), CanonicalHeader::FinalDate);
        // "Stop" contains "to" and is classified as an end time.
        assert_eq!(CanonicalHeader::from_raw(Some("Stop")), CanonicalHeader::EndTime);
    }

    #[test]
    fn unmatched_header_passes_through_cleaned() {
        assert_eq!(
            CanonicalHeader::from_raw(Some("  Exam\nRemarks ")),
            CanonicalHeader::Other("Exam Remarks".to_string())
        );
    }

    #[test]
    fn blank_header_cells() {
        assert_eq!(CanonicalHeader::from_raw(None), CanonicalHeader::Blank);
        assert_eq!(CanonicalHeader::from_raw(Some("")), CanonicalHeader::Blank);
        assert_eq!(CanonicalHeader::from_raw(Some(" \n ")), CanonicalHeader::Blank);
    }

    #[test]
    fn labels_keep_trailing_periods() {
        assert_eq!(CanonicalHeader::Room.label(), "Room.");
        assert_eq!(CanonicalHeader::Dept.label(), "Dept.");
        assert_eq!(CanonicalHeader::SerialNumber.label(), "SL.");
        assert_eq!(CanonicalHeader::FinalDate.label(), "Final Date");
        assert_eq!(CanonicalHeader::Blank.label(), "");
    }

    #[test]
    fn header_row_preserves_length() {
        let row = raw(&[Some("SL"), None, Some("Course"), Some(""), Some("Misc")]);
        let header = HeaderRow::from_raw_row(&row);
        assert_eq!(header.len(), row.len());
        assert_eq!(
            header.columns(),
            &[
                CanonicalHeader::SerialNumber,
                CanonicalHeader::Blank,
                CanonicalHeader::Course,
                CanonicalHeader::Blank,
                CanonicalHeader::Other("Misc".to_string()),
            ]
        );
    }

    #[test]
    fn derive_uses_first_row() {
        let row = raw(&[Some("SL"), Some("Course"), Some("Sec"), Some("Date")]);
        let header = HeaderRow::derive(Some(row.as_slice()));
        assert_eq!(header.len(), 4);
        assert_eq!(header.get(1), Some(&CanonicalHeader::Course));
    }

    #[test]
    fn derive_falls_back_without_row() {
        let header = HeaderRow::derive(None);
        assert_eq!(header, HeaderRow::fallback());
        assert_eq!(header.len(), 7);
        assert_eq!(header.get(0), Some(&CanonicalHeader::Course));
        assert_eq!(header.get(6), Some(&CanonicalHeader::Dept));
        assert_eq!(header.position_of(&CanonicalHeader::SerialNumber), None);
    }

    #[test]
    fn position_of_serial_column() {
        let header = HeaderRow::from_raw_row(&raw(&[Some("Course"), Some("Serial #")]));
        assert_eq!(header.position_of(&CanonicalHeader::SerialNumber), Some(1));
    }

    #[test]
    fn display_lists_labels() {
        let header = HeaderRow::from_raw_row(&raw(&[Some("Course"), Some("Room")]));
        assert_eq!(header.to_string(), "[Course, Room.]");
    }
}
