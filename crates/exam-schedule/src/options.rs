//! Conversion settings: PDF backend options plus the row layout template.

use std::path::Path;

use exam_schedule_core::LayoutTemplate;
use pdfplumber::{ExplicitLines, Strategy, TableSettings, TextOptions, WordOptions};

use crate::error::{Error, Result};

/// Settings for one [`convert`](crate::convert) run.
///
/// `Default` uses the backend's own defaults (lattice tables, 3.0 point
/// tolerances) and the built-in layout template. Lattice detection needs
/// ruled lines reported by the backend; when the grid position is known
/// up front, [`with_explicit_lines`](Self::with_explicit_lines) is the
/// dependable choice.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Table detection settings handed to the PDF backend.
    pub table_settings: TableSettings,
    /// Grouping of characters into the positioned words used for row placement.
    pub word_options: WordOptions,
    /// Plain-text extraction used for line numbers.
    pub text_options: TextOptions,
    /// Placement of rows that cannot be matched to any word.
    pub layout: LayoutTemplate,
    /// Password for encrypted PDFs.
    pub password: Option<String>,
}

impl ConvertOptions {
    /// Switch table detection strategy, keeping the other settings.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.table_settings.strategy = strategy;
        self
    }

    /// Set the snap tolerance on both axes.
    pub fn with_snap_tolerance(mut self, tolerance: f64) -> Self {
        let settings = &mut self.table_settings;
        settings.snap_tolerance = tolerance;
        settings.snap_x_tolerance = tolerance;
        settings.snap_y_tolerance = tolerance;
        self
    }

    /// Set the join tolerance on both axes.
    pub fn with_join_tolerance(mut self, tolerance: f64) -> Self {
        let settings = &mut self.table_settings;
        settings.join_tolerance = tolerance;
        settings.join_x_tolerance = tolerance;
        settings.join_y_tolerance = tolerance;
        self
    }

    /// Set the text tolerance on both axes.
    pub fn with_text_tolerance(mut self, tolerance: f64) -> Self {
        let settings = &mut self.table_settings;
        settings.text_tolerance = tolerance;
        settings.text_x_tolerance = tolerance;
        settings.text_y_tolerance = tolerance;
        self
    }

    /// Detect tables from a fixed grid instead of page content.
    ///
    /// Coordinates are in page space with the origin at the top-left corner:
    /// `rows` are the y positions of horizontal rules, `columns` the x
    /// positions of vertical rules.
    pub fn with_explicit_lines(mut self, rows: Vec<f64>, columns: Vec<f64>) -> Self {
        self.table_settings.strategy = Strategy::Explicit;
        self.table_settings.explicit_lines = Some(ExplicitLines {
            horizontal_lines: rows,
            vertical_lines: columns,
        });
        self
    }

    pub fn with_layout(mut self, layout: LayoutTemplate) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

/// Load a [`LayoutTemplate`] from a TOML file. Keys that are left out keep
/// their default value.
pub fn load_layout(path: &Path) -> Result<LayoutTemplate> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
    parse_layout(&text).map_err(|source| Error::Layout {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_layout(text: &str) -> std::result::Result<LayoutTemplate, toml::de::Error> {
    toml::from_str(text)
}
