//! exam-schedule-core: Backend-independent exam schedule extraction.
//!
//! Turns the tables detected on each page of an exam schedule into normalized
//! [`Record`]s. The crate never touches a PDF itself; a backend implements
//! [`PageSource`] and hands over one [`PageContent`] snapshot per page.
//!
//! # Pipeline
//!
//! 1. [`HeaderRow`] derives the canonical column list once, from the first row
//!    of the first table on the first page.
//! 2. [`TableRowExtractor`] skips repeated headers and blank rows, then maps
//!    each remaining row onto the canonical columns.
//! 3. [`standardize_date`] / [`standardize_time`] rewrite recognised values.
//! 4. [`PositionReconciler`] attaches a [`BoundingBox`] and a [`LineNumber`].
//! 5. [`validate`] accepts or rejects the record, and the [`Aggregator`]
//!    collects accepted records in traversal order into a [`Document`].

mod document;
mod extract;
mod geometry;
mod header;
mod page;
mod pipeline;
mod reconcile;
mod record;
mod standardize;
mod text;
mod validate;

pub use document::{Aggregator, Document, ExtractionStats, Metadata, fields_description};
pub use extract::{HEADER_KEYWORDS, RowOutcome, SkipReason, TableRowExtractor};
pub use geometry::{BoundingBox, LayoutTemplate, RowBoxPolicy};
pub use header::{CanonicalHeader, HeaderRow};
pub use page::{PageContent, PageSource, PositionedWord, RawCell, RawRow, RawTable};
pub use pipeline::Pipeline;
pub use reconcile::{Placement, PositionReconciler, ReconcileError, Reconciliation};
pub use record::{LineNumber, RESERVED_KEYS, Record};
pub use standardize::{Standardized, standardize_date, standardize_time};
pub use text::{clean_cell, clean_text};
pub use validate::{Rejection, validate};
