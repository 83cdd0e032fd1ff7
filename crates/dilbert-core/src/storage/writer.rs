//! Temp-file writer with atomic finalize.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Writer for a `.part` file. Data only appears under the final name once
/// `finalize` renames it; dropping the writer before that removes the temp
/// file.
pub struct StorageWriter {
    file: Option<File>,
    temp_path: PathBuf,
}

impl StorageWriter {
    /// Create a new temp file at `temp_path`, truncating any leftover from
    /// an earlier interrupted run.
    pub fn create(temp_path: &Path) -> io::Result<Self> {
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(temp_path)?;
        Ok(Self {
            file: Some(file),
            temp_path: temp_path.to_path_buf(),
        })
    }

    pub fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        match self.file.as_mut() {
            Some(f) => f.write_all(data),
            None => Err(io::Error::new(io::ErrorKind::Other, "writer already closed")),
        }
    }

    /// Sync file data to disk. Call before `finalize` for durability.
    pub fn sync(&self) -> io::Result<()> {
        match self.file.as_ref() {
            Some(f) => f.sync_all(),
            None => Ok(()),
        }
    }

    /// Atomically rename the temp file to the final path, replacing it if
    /// present. Consumes the writer and closes the file first.
    pub fn finalize(mut self, final_path: &Path) -> io::Result<()> {
        drop(self.file.take());
        let res = std::fs::rename(&self.temp_path, final_path);
        if res.is_ok() {
            // Nothing left for Drop to clean up.
            self.temp_path = PathBuf::new();
        }
        res
    }
}

impl Drop for StorageWriter {
    fn drop(&mut self) {
        drop(self.file.take());
        if !self.temp_path.as_os_str().is_empty() {
            if let Err(e) = std::fs::remove_file(&self.temp_path) {
                if e.kind() != io::ErrorKind::NotFound {
                    tracing::warn!(path = %self.temp_path.display(), "failed to remove temp file: {}", e);
                }
            }
        }
    }
}
