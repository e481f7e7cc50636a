//! Exam name and semester patching of an already written document.
//!
//! The site reads `metadata.title` for display and screenshot naming; this is
//! the single place it is meant to be edited by hand.

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::Error as _;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::output::write_json;

/// File patched when no path is given.
pub const DEFAULT_DATA_FILE: &str = "exam_data.json";

/// What [`set_title`] wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleUpdate {
    pub path: PathBuf,
    pub exam_name: String,
    pub semester: String,
    /// `"{exam_name} {semester}"`, trimmed.
    pub title: String,
    pub last_updated: String,
}

/// Set `exam_name`, `semester`, `title` and `last_updated` in the metadata of
/// the JSON document at `path`. All other content is preserved.
pub fn set_title(path: &Path, exam_name: &str, semester: &str) -> Result<TitleUpdate> {
    set_title_at(path, exam_name, semester, Utc::now())
}

/// [`set_title`] with an explicit timestamp.
pub fn set_title_at(
    path: &Path,
    exam_name: &str,
    semester: &str,
    now: DateTime<Utc>,
) -> Result<TitleUpdate> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
    let mut data: Value = serde_json::from_str(&text).map_err(|e| Error::json(path, e))?;

    let Some(root) = data.as_object_mut() else {
        return Err(Error::json(
            path,
            serde_json::Error::custom("top-level value is not an object"),
        ));
    };

    let update = TitleUpdate {
        path: path.to_path_buf(),
        exam_name: exam_name.trim().to_string(),
        semester: semester.trim().to_string(),
        title: format!("{} {}", exam_name.trim(), semester.trim())
            .trim()
            .to_string(),
        last_updated: now.to_rfc3339_opts(SecondsFormat::Micros, false),
    };
    apply(root, &update);

    write_json(path, &data)?;
    log::info!("updated {} -> '{}'", path.display(), update.title);
    Ok(update)
}

fn apply(root: &mut Map<String, Value>, update: &TitleUpdate) {
    let metadata = root
        .entry("metadata")
        .or_insert_with(|| Value::Object(Map::new()));
    if !metadata.is_object() {
        *metadata = Value::Object(Map::new());
    }
    if let Value::Object(metadata) = metadata {
        metadata.insert("exam_name".into(), update.exam_name.clone().into());
        metadata.insert("semester".into(), update.semester.clone().into());
        metadata.insert("title".into(), update.title.clone().into());
        metadata.insert("last_updated".into(), update.last_updated.clone().into());
    }
}
