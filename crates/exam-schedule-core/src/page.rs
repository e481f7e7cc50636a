//! Page model handed to the pipeline by a PDF backend.
//!
//! The pipeline only needs three things from a page: the detected tables as
//! rows of optional cell text, the positioned words, and the plain text split
//! into lines. [`PageContent`] is an owned snapshot of exactly that, so the
//! pipeline stays independent of whichever PDF library produced it.

/// Text content of one table cell. `None` when the detector found no text.
pub type RawCell = Option<String>;

/// One table row, cells in column order.
pub type RawRow = Vec<RawCell>;

/// A table detected on a page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    /// Rows in top-to-bottom order. Row 0 is the table's own header.
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self { rows }
    }

    /// Returns `true` if the detector produced no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A word token with its rectangle in page coordinates.
///
/// `top` and `bottom` are measured from the top of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedWord {
    pub text: String,
    pub x0: f64,
    pub top: f64,
    pub x1: f64,
    pub bottom: f64,
}

impl PositionedWord {
    pub fn new(text: impl Into<String>, x0: f64, top: f64, x1: f64, bottom: f64) -> Self {
        Self {
            text: text.into(),
            x0,
            top,
            x1,
            bottom,
        }
    }
}

/// Everything the pipeline reads from a single page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageContent {
    /// Page number (1-based).
    pub number: usize,
    /// Tables in detection order.
    pub tables: Vec<RawTable>,
    /// Words in the order the backend extracted them.
    pub words: Vec<PositionedWord>,
    /// Plain page text split into lines, in reading order.
    pub text_lines: Vec<String>,
}

impl PageContent {
    /// Create an empty page with the given 1-based number.
    pub fn new(number: usize) -> Self {
        Self {
            number,
            ..Self::default()
        }
    }

    pub fn with_tables(mut self, tables: Vec<RawTable>) -> Self {
        self.tables = tables;
        self
    }

    pub fn with_words(mut self, words: Vec<PositionedWord>) -> Self {
        self.words = words;
        self
    }

    /// Set the text lines by splitting `text` on line breaks.
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_lines = text.lines().map(str::to_string).collect();
        self
    }

    /// The first row of the first table, if the page has one.
    pub fn first_table_header(&self) -> Option<&RawRow> {
        self.tables.first().and_then(|table| table.rows.first())
    }
}

/// A paginated document the pipeline can walk page by page.
///
/// Implementations own the underlying document handle; dropping the source
/// releases it.
pub trait PageSource {
    /// Error produced when a page cannot be read.
    type Error;

    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Load the page at `index` (0-based).
    fn load_page(&self, index: usize) -> Result<PageContent, Self::Error>;
}

/// In-memory pages, mostly useful for tests and for callers that already
/// hold extracted content.
impl PageSource for Vec<PageContent> {
    type Error = std::convert::Infallible;

    fn page_count(&self) -> usize {
        self.len()
    }

    fn load_page(&self, index: usize) -> Result<PageContent, Self::Error> {
        Ok(self[index].clone())
    }
}
