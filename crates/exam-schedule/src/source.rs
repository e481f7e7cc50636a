//! [`PageSource`] over a PDF opened with `pdfplumber`.

use std::path::Path;

use exam_schedule_core::{PageContent, PageSource, PositionedWord, RawTable};
use pdfplumber::{Pdf, TableSettings, TextOptions, WordOptions};

use crate::error::{Error, Result};
use crate::options::ConvertOptions;

/// An opened PDF, adapted page by page into [`PageContent`].
///
/// Owns the parsed document; dropping the source releases it, on success and
/// error paths alike.
pub struct PdfSource {
    pdf: Pdf,
    table_settings: TableSettings,
    word_options: WordOptions,
    text_options: TextOptions,
}

impl PdfSource {
    /// Read and open the PDF at `path`, decrypting with the configured
    /// password if one is set.
    pub fn open(path: &Path, options: &ConvertOptions) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| Error::read(path, e))?;
        let pdf = match options.password.as_deref() {
            Some(password) => Pdf::open_with_password(&bytes, password.as_bytes(), None),
            None => Pdf::open(&bytes, None),
        }
        .map_err(|e| Error::Open {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        log::info!("processing {}: {} pages", path.display(), pdf.page_count());

        Ok(Self {
            pdf,
            table_settings: options.table_settings.clone(),
            word_options: options.word_options.clone(),
            text_options: options.text_options.clone(),
        })
    }
}

impl PageSource for PdfSource {
    type Error = Error;

    fn page_count(&self) -> usize {
        self.pdf.page_count()
    }

    fn load_page(&self, index: usize) -> Result<PageContent> {
        let number = index + 1;
        log::debug!("loading page {number}");

        let page = self.pdf.page(index).map_err(|e| Error::Page {
            page: number,
            message: e.to_string(),
        })?;

        let tables = page
            .find_tables(&self.table_settings)
            .into_iter()
            .map(|table| {
                RawTable::new(
                    table
                        .rows
                        .into_iter()
                        .map(|row| row.into_iter().map(|cell| cell.text).collect())
                        .collect(),
                )
            })
            .collect();

        let words = page
            .extract_words(&self.word_options)
            .into_iter()
            .map(|word| {
                PositionedWord::new(
                    word.text,
                    word.bbox.x0,
                    word.bbox.top,
                    word.bbox.x1,
                    word.bbox.bottom,
                )
            })
            .collect();

        let text = page.extract_text(&self.text_options);

        Ok(PageContent::new(number)
            .with_tables(tables)
            .with_words(words)
            .with_text(&text))
    }
}
