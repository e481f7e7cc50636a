//! Whitespace normalization shared by header, cell, and word matching.

use std::sync::LazyLock;

use regex::Regex;

use crate::page::RawCell;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Collapse every run of whitespace to a single space and trim both ends.
///
/// Cell text coming out of table detection often carries line breaks from
/// wrapped cells; positioned words never do. Both sides go through this
/// function before they are compared.
pub fn clean_text(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Clean a raw cell, returning `None` for absent or whitespace-only cells.
pub fn clean_cell(cell: &RawCell) -> Option<String> {
    cell.as_deref()
        .map(clean_text)
        .filter(|cleaned| !cleaned.is_empty())
}
