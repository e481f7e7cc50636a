//! PDF → JSON conversion entry points.

use std::path::{Path, PathBuf};

use chrono::Utc;
use exam_schedule_core::{Document, ExtractionStats, Pipeline};

use crate::error::Result;
use crate::options::ConvertOptions;
use crate::output::write_document;
use crate::source::PdfSource;

/// Outcome of a successful [`convert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub output: PathBuf,
    /// Number of records written.
    pub entries: usize,
    pub stats: ExtractionStats,
}

/// Extract the schedule from the PDF at `input` without writing anything.
pub fn extract(input: &Path, options: &ConvertOptions) -> Result<(Document, ExtractionStats)> {
    let source = PdfSource::open(input, options)?;
    let aggregator = Pipeline::new(options.layout).run(&source)?;
    let stats = *aggregator.stats();
    let document = aggregator.into_document(input.display().to_string(), Utc::now());
    Ok((document, stats))
}

/// Extract the schedule from `input` and write it to `output`.
///
/// Nothing is written when the PDF cannot be opened or a page cannot be read.
pub fn convert(input: &Path, output: &Path, options: &ConvertOptions) -> Result<ConvertSummary> {
    let (document, stats) = extract(input, options)?;
    write_document(output, &document)?;

    Ok(ConvertSummary {
        output: output.to_path_buf(),
        entries: document.metadata.total_entries,
        stats,
    })
}
