//! Record-tree traversal.
//!
//! [`RecordWalker`] walks a directory recursively and decodes every file with
//! the configured extension. Files that cannot be read or decoded do not stop
//! the walk: they come out as entries carrying a [`RecordDecodeError`].

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{BuildError, RecordDecodeError};
use crate::record::{FileFormat, Record};

/// One walked file: its path and either the decoded record or why decoding failed.
#[derive(Debug, Clone)]
pub struct WalkEntry {
    /// The file path.
    pub path: PathBuf,
    /// The decoded record, or the decode failure for this file only.
    pub record: Result<Record, RecordDecodeError>,
}

/// A lazy, single-pass iterator over the record files under a root directory.
///
/// Entries come in file-name order within each directory. Re-walking means
/// constructing a new walker.
pub struct RecordWalker {
    format: FileFormat,
    inner: walkdir::IntoIter,
}

impl RecordWalker {
    /// Checks the preconditions and prepares the walk.
    ///
    /// The extension is validated before the filesystem is touched.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnsupportedFormat`] if `extension` has no decoder,
    /// or [`BuildError::NotFound`] if `root` does not exist.
    pub fn new(root: &Path, extension: &str) -> Result<Self, BuildError> {
        let format = FileFormat::from_extension(extension)
            .ok_or_else(|| BuildError::UnsupportedFormat(extension.to_owned()))?;
        if !root.exists() {
            return Err(BuildError::NotFound(root.to_path_buf()));
        }
        Ok(Self {
            format,
            inner: WalkDir::new(root).sort_by_file_name().into_iter(),
        })
    }

    /// The record format being decoded.
    #[must_use]
    pub fn format(&self) -> FileFormat {
        self.format
    }
}

impl Iterator for RecordWalker {
    type Item = WalkEntry;

    fn next(&mut self) -> Option<WalkEntry> {
        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    if entry.file_type().is_dir() || !self.format.matches(entry.path()) {
                        continue;
                    }
                    let path = entry.into_path();
                    let record = fs::read_to_string(&path)
                        .map_err(RecordDecodeError::new)
                        .and_then(|text| self.format.decode(&path, &text));
                    return Some(WalkEntry { path, record });
                }
                // Unreadable directory entries are reported like undecodable
                // files so one bad subtree does not end the walk.
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                    return Some(WalkEntry {
                        path,
                        record: Err(RecordDecodeError::new(err)),
                    });
                }
            }
        }
    }
}
