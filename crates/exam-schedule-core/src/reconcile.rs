//! Position reconciliation: where on the page did a table row come from?
//!
//! Table cells do not carry positions, so each row is matched back to the
//! page's positioned words by exact (whitespace-normalized) text. Matching
//! degrades in steps and never fails the row:
//!
//! 1. **Anchor**: the serial-number cell (or the first cell when no serial
//!    column exists) is looked up among the words; the first exact match
//!    gives the row's vertical extent.
//! 2. **Cell scan**: otherwise each non-blank cell is tried in order and the
//!    first unconsumed exact match wins.
//! 3. **Synthetic**: otherwise the [`RowBoxPolicy`] places the row from its
//!    ordinal alone.
//!
//! The horizontal extent always comes from the policy. Repeated identical
//! cell text (two rows with the same room, say) can match the wrong word;
//! no geometric alignment is attempted.
//!
//! The line number is independent of the box: the first line of the page's
//! plain text containing both the course and the section.

use thiserror::Error;

use crate::geometry::{BoundingBox, RowBoxPolicy};
use crate::page::{PageContent, RawCell};
use crate::record::LineNumber;
use crate::text::{clean_cell, clean_text};

/// Why a matched word could not be turned into a row extent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReconcileError {
    #[error("word '{text}' has a non-finite vertical extent ({top}, {bottom})")]
    NonFiniteExtent { text: String, top: f64, bottom: f64 },

    #[error("word '{text}' has an inverted vertical extent (top {top} > bottom {bottom})")]
    InvertedExtent { text: String, top: f64, bottom: f64 },
}

/// Which step produced a row's box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Anchor,
    CellScan,
    Synthetic,
    /// Word matching raised an error; the box is synthetic and carries it.
    Recovered,
}

impl Placement {
    /// Returns `true` if the box came from the layout policy.
    pub fn is_synthetic(self) -> bool {
        matches!(self, Self::Synthetic | Self::Recovered)
    }
}

/// The box chosen for one row and how it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub bounding_box: BoundingBox,
    pub placement: Placement,
}

/// Locates rows of one page.
///
/// Built once per page; word texts are normalized up front so each row only
/// pays for the comparisons.
pub struct PositionReconciler<'a, P> {
    page: &'a PageContent,
    normalized_words: Vec<String>,
    serial_column: Option<usize>,
    policy: &'a P,
}

impl<'a, P: RowBoxPolicy> PositionReconciler<'a, P> {
    /// `serial_column` is the index of the serial-number column, if the
    /// document header has one.
    pub fn new(page: &'a PageContent, serial_column: Option<usize>, policy: &'a P) -> Self {
        let normalized_words = page.words.iter().map(|w| clean_text(&w.text)).collect();
        Self {
            page,
            normalized_words,
            serial_column,
            policy,
        }
    }

    /// Produce a bounding box for `row`, the `row_index`-th row of its table.
    pub fn bounding_box(&self, row: &[RawCell], row_index: usize) -> Reconciliation {
        let (x0, x1) = self.policy.horizontal_extent();

        match self.locate(row) {
            Ok(Some((y0, y1, placement))) => Reconciliation {
                bounding_box: BoundingBox::new(x0, y0, x1, y1),
                placement,
            },
            Ok(None) => Reconciliation {
                bounding_box: self.policy.synthetic_box(row_index),
                placement: Placement::Synthetic,
            },
            Err(err) => {
                log::warn!(
                    "page {}: error calculating bounding box for row {row_index}: {err}",
                    self.page.number
                );
                Reconciliation {
                    bounding_box: self.policy.synthetic_box(row_index).with_error(err.to_string()),
                    placement: Placement::Recovered,
                }
            }
        }
    }

    /// 1-based index of the first text line containing both `course` and
    /// `section`.
    pub fn line_number(&self, course: Option<&str>, section: Option<&str>) -> LineNumber {
        let (Some(course), Some(section)) = (course, section) else {
            return LineNumber::NotFound;
        };

        self.page
            .text_lines
            .iter()
            .position(|line| line.contains(course) && line.contains(section))
            .map_or(LineNumber::NotFound, |index| LineNumber::Found(index + 1))
    }

    fn locate(&self, row: &[RawCell]) -> Result<Option<(f64, f64, Placement)>, ReconcileError> {
        if let Some(anchor) = self.anchor_text(row) {
            if let Some(index) = self.find_word(&anchor, &[]) {
                let (top, bottom) = self.vertical_extent(index)?;
                return Ok(Some((top, bottom, Placement::Anchor)));
            }
        }

        let mut consumed: Vec<usize> = Vec::new();
        for text in row.iter().filter_map(clean_cell) {
            if let Some(index) = self.find_word(&text, &consumed) {
                consumed.push(index);
                let (top, bottom) = self.vertical_extent(index)?;
                return Ok(Some((top, bottom, Placement::CellScan)));
            }
        }

        Ok(None)
    }

    /// The serial-number cell when that column is known and present,
    /// otherwise the first cell.
    fn anchor_text(&self, row: &[RawCell]) -> Option<String> {
        let serial = self
            .serial_column
            .and_then(|index| row.get(index))
            .filter(|cell| cell.is_some());

        match serial {
            Some(cell) => clean_cell(cell),
            None => row.first().and_then(clean_cell),
        }
    }

    fn find_word(&self, text: &str, consumed: &[usize]) -> Option<usize> {
        self.normalized_words
            .iter()
            .enumerate()
            .find(|(index, word)| word.as_str() == text && !consumed.contains(index))
            .map(|(index, _)| index)
    }

    fn vertical_extent(&self, index: usize) -> Result<(f64, f64), ReconcileError> {
        let word = &self.page.words[index];
        if !word.top.is_finite() || !word.bottom.is_finite() {
            return Err(ReconcileError::NonFiniteExtent {
                text: word.text.clone(),
                top: word.top,
                bottom: word.bottom,
            });
        }
        if word.top > word.bottom {
            return Err(ReconcileError::InvertedExtent {
                text: word.text.clone(),
                top: word.top,
                bottom: word.bottom,
            });
        }
        Ok((word.top, word.bottom))
    }
}
