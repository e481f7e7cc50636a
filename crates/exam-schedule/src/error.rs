//! Error type for the PDF-facing operations.
//!
//! Everything below page level is recovered inside the pipeline, so these
//! errors are all fatal to a run: the source could not be opened or read, or
//! an output file could not be parsed or written.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error returned by [`convert`](crate::convert), [`set_title`](crate::set_title)
/// and the output writers.
#[derive(Debug, Error)]
pub enum Error {
    /// The PDF could not be opened (damaged, encrypted, not a PDF).
    #[error("failed to open PDF {}: {message}", path.display())]
    Open { path: PathBuf, message: String },

    /// A page of an opened PDF could not be loaded.
    #[error("error reading page {page}: {message}")]
    Page { page: usize, message: String },

    /// A file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A JSON file could not be parsed, or a document could not be encoded.
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An output file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A layout template file is not valid TOML for a template.
    #[error("invalid layout template {}: {source}", path.display())]
    Layout {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
