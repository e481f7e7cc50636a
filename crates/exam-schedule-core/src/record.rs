//! Extracted exam records.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::geometry::BoundingBox;
use crate::header::CanonicalHeader;

/// Line on which a record was found in the page's plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineNumber {
    /// 1-based line index.
    Found(usize),
    /// No text line contained the record; serialized as `-1`.
    NotFound,
}

impl LineNumber {
    /// Numeric form used in the output document.
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Found(line) => line as i64,
            Self::NotFound => -1,
        }
    }
}

impl Serialize for LineNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_i64())
    }
}

/// Output keys filled from position data rather than from table cells.
pub const RESERVED_KEYS: [&str; 4] = ["RowText", "BoundingBox", "Page Number", "Line Number"];

/// One exam-schedule row after extraction and normalization.
///
/// Field values are keyed by canonical label and keep column order. The
/// positional extras follow them in the serialized form, and no field may
/// use one of their keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    #[serde(flatten)]
    fields: IndexMap<String, String>,
    #[serde(rename = "RowText", skip_serializing_if = "Option::is_none")]
    pub row_text: Option<String>,
    #[serde(rename = "BoundingBox", skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    #[serde(rename = "Page Number", skip_serializing_if = "Option::is_none")]
    pub page_number: Option<usize>,
    #[serde(rename = "Line Number", skip_serializing_if = "Option::is_none")]
    pub line_number: Option<LineNumber>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value of a column. A later column with the same header
    /// overwrites the value but keeps the first position.
    ///
    /// Returns `false` and stores nothing when the header's label is one of
    /// [`RESERVED_KEYS`]; the positional extra always owns that key.
    pub fn insert(&mut self, header: &CanonicalHeader, value: impl Into<String>) -> bool {
        let label = header.label();
        if RESERVED_KEYS.contains(&label) {
            return false;
        }
        self.fields.insert(label.to_string(), value.into());
        true
    }

    pub fn get(&self, header: &CanonicalHeader) -> Option<&str> {
        self.fields.get(header.label()).map(String::as_str)
    }

    /// Mutable access to a populated field.
    pub fn get_mut(&mut self, header: &CanonicalHeader) -> Option<&mut String> {
        self.fields.get_mut(header.label())
    }

    /// Populated fields in column order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn course(&self) -> Option<&str> {
        self.get(&CanonicalHeader::Course)
    }

    pub fn section(&self) -> Option<&str> {
        self.get(&CanonicalHeader::Section)
    }
}
