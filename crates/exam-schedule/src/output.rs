//! JSON output files.
//!
//! Files are encoded completely in memory before the target is touched, so an
//! encoding failure never clobbers an existing file. Write failures leave the
//! file empty rather than holding a prefix of the document.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use exam_schedule_core::Document;
use serde::Serialize;

use crate::error::{Error, Result};

/// Write the extraction result to `path` as pretty-printed UTF-8 JSON.
pub fn write_document(path: &Path, document: &Document) -> Result<()> {
    write_json(path, document)?;
    log::info!(
        "wrote {} entries to {}",
        document.metadata.total_entries,
        path.display()
    );
    Ok(())
}

/// Write any serializable value to `path` as pretty-printed UTF-8 JSON with
/// two-space indentation and unescaped non-ASCII text.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).map_err(|e| Error::json(path, e))?;

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::write(path, e))?;

    if let Err(e) = write_all_synced(&mut file, &bytes) {
        // Best effort: an empty file is easier to spot than a truncated one.
        if let Err(truncate) = file.set_len(0) {
            log::warn!("could not truncate {} after failed write: {truncate}", path.display());
        }
        return Err(Error::write(path, e));
    }
    Ok(())
}

fn write_all_synced(file: &mut File, bytes: &[u8]) -> std::io::Result<()> {
    file.write_all(bytes)?;
    file.flush()?;
    file.sync_all()
}
