//! Page → table → row traversal tying the stages together.

use crate::document::Aggregator;
use crate::extract::{RowOutcome, TableRowExtractor};
use crate::geometry::{LayoutTemplate, RowBoxPolicy};
use crate::header::{CanonicalHeader, HeaderRow};
use crate::page::{PageContent, PageSource};
use crate::reconcile::PositionReconciler;
use crate::record::LineNumber;

/// The extraction pipeline, parameterized by the row placement policy.
#[derive(Debug, Clone, Default)]
pub struct Pipeline<P = LayoutTemplate> {
    policy: P,
}

impl<P: RowBoxPolicy> Pipeline<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Run over every page of `source`, strictly in order.
    ///
    /// Only failures to load a page are returned; everything below page
    /// level is skipped or recovered and logged.
    pub fn run<S: PageSource>(&self, source: &S) -> Result<Aggregator, S::Error> {
        let page_count = source.page_count();
        let first_page = if page_count > 0 {
            Some(source.load_page(0)?)
        } else {
            None
        };

        let headers = HeaderRow::derive(
            first_page
                .as_ref()
                .and_then(PageContent::first_table_header)
                .map(Vec::as_slice),
        );

        let mut aggregator = Aggregator::new();
        // The first page is loaded once and reused for extraction.
        if let Some(page) = first_page {
            self.process_page(&page, &headers, &mut aggregator);
        }
        for index in 1..page_count {
            let page = source.load_page(index)?;
            self.process_page(&page, &headers, &mut aggregator);
        }

        log::info!("total valid entries extracted: {}", aggregator.len());
        log::info!("{}", aggregator.stats());
        Ok(aggregator)
    }

    /// Extract every table of one page into `aggregator`.
    pub fn process_page(&self, page: &PageContent, headers: &HeaderRow, aggregator: &mut Aggregator) {
        aggregator.stats_mut().pages += 1;

        if page.tables.is_empty() {
            log::warn!("no tables found on page {}", page.number);
            aggregator.stats_mut().pages_without_tables += 1;
            return;
        }
        log::info!("found {} tables on page {}", page.tables.len(), page.number);

        let extractor = TableRowExtractor::new(headers);
        let serial_column = headers.position_of(&CanonicalHeader::SerialNumber);
        let reconciler = PositionReconciler::new(page, serial_column, &self.policy);

        for (table_index, table) in page.tables.iter().enumerate() {
            aggregator.stats_mut().tables += 1;

            for (row_index, row) in table.rows.iter().enumerate() {
                aggregator.stats_mut().rows += 1;

                let mut record = match extractor.extract(row_index, row) {
                    RowOutcome::Candidate(record) => record,
                    RowOutcome::Skipped(reason) => {
                        log::debug!(
                            "page {} table {} row {row_index}: skipped ({reason})",
                            page.number,
                            table_index + 1,
                        );
                        aggregator.note_skip(reason);
                        continue;
                    }
                };

                let placed = reconciler.bounding_box(row, row_index);
                log::trace!(
                    "page {} table {} row {row_index}: placed by {:?}",
                    page.number,
                    table_index + 1,
                    placed.placement,
                );
                if placed.placement.is_synthetic() {
                    aggregator.stats_mut().synthetic_boxes += 1;
                }

                let line_number = reconciler.line_number(record.course(), record.section());
                if line_number == LineNumber::NotFound {
                    aggregator.stats_mut().unlocated_lines += 1;
                }

                record.bounding_box = Some(placed.bounding_box);
                record.page_number = Some(page.number);
                record.line_number = Some(line_number);

                if let Err(rejection) = aggregator.offer(record) {
                    log::debug!(
                        "page {} table {} row {row_index}: skipping invalid entry ({rejection})",
                        page.number,
                        table_index + 1,
                    );
                }
            }
        }
    }
}
