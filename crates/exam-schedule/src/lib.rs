//! exam-schedule: Extract exam schedules from PDF tables into JSON.
//!
//! Opens a schedule PDF with `pdfplumber`, runs the
//! [`exam_schedule_core`] pipeline over every page, and writes the resulting
//! [`Document`] as the JSON file the schedule site reads.
//!
//! ```no_run
//! use std::path::Path;
//! use exam_schedule::{ConvertOptions, convert, set_title};
//!
//! let summary = convert(
//!     Path::new("final_schedule.pdf"),
//!     Path::new("exam_data.json"),
//!     &ConvertOptions::default(),
//! )?;
//! println!("{} entries", summary.entries);
//!
//! set_title(Path::new("exam_data.json"), "Final Exam", "Fall-2025")?;
//! # Ok::<(), exam_schedule::Error>(())
//! ```

mod convert;
mod error;
mod options;
mod output;
mod source;
mod title;

pub use convert::{ConvertSummary, convert, extract};
pub use error::{Error, Result};
pub use options::{ConvertOptions, load_layout};
pub use output::{write_document, write_json};
pub use source::PdfSource;
pub use title::{DEFAULT_DATA_FILE, TitleUpdate, set_title, set_title_at};

pub use exam_schedule_core::{Document, ExtractionStats, LayoutTemplate, Record};
pub use pdfplumber::Strategy;
