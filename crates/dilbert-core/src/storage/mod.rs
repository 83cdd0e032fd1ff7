//! Saving the strip to disk.
//!
//! Files are named `dilbert-<YYYY-MM-DD>.<ext>` inside the output
//! directory. Bytes go to a `.part` file first, are fsynced, then renamed
//! into place, so an interrupted run never leaves a truncated strip under
//! the final name.

mod writer;

pub use writer::StorageWriter;

use crate::date::StripDate;
use crate::error::StripError;
use crate::image::StripImage;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Prefix of every saved strip file.
pub const FILE_PREFIX: &str = "dilbert-";

/// Path for the temp file: appends `.part` to the final path (e.g.
/// `dilbert-2021-06-15.gif` → `dilbert-2021-06-15.gif.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// File name for a strip: `dilbert-<date>.<ext>`.
pub fn strip_filename(date: &StripDate, extension: &str) -> String {
    format!("{}{}.{}", FILE_PREFIX, date.as_str(), extension)
}

/// What `save_strip` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The image was written to this path.
    Saved(PathBuf),
    /// A file already existed at this path and overwriting is off.
    Skipped(PathBuf),
}

impl SaveOutcome {
    pub fn path(&self) -> &Path {
        match self {
            SaveOutcome::Saved(p) | SaveOutcome::Skipped(p) => p,
        }
    }
}

/// Writes `image` for `date` into `dir`, creating `dir` if needed.
///
/// An existing file is left alone unless `overwrite` is set. On any write
/// failure the temp file is removed and the final path is untouched.
pub fn save_strip(
    dir: &Path,
    date: &StripDate,
    image: &StripImage,
    overwrite: bool,
) -> Result<SaveOutcome, StripError> {
    let final_path = dir.join(strip_filename(date, image.extension()));
    if final_path.exists() && !overwrite {
        tracing::info!(path = %final_path.display(), "strip already saved, skipping");
        return Ok(SaveOutcome::Skipped(final_path));
    }

    std::fs::create_dir_all(dir).map_err(|error| StripError::Storage {
        path: dir.to_path_buf(),
        error,
    })?;

    let tp = temp_path(&final_path);
    let storage_err = |error: std::io::Error| StripError::Storage {
        path: tp.clone(),
        error,
    };
    let mut writer = StorageWriter::create(&tp).map_err(storage_err)?;
    writer.write_all(&image.bytes).map_err(storage_err)?;
    writer.sync().map_err(storage_err)?;
    writer
        .finalize(&final_path)
        .map_err(|error| StripError::Storage {
            path: final_path.clone(),
            error,
        })?;

    tracing::info!(path = %final_path.display(), bytes = image.bytes.len(), "strip saved");
    Ok(SaveOutcome::Saved(final_path))
}
