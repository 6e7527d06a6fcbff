//! Source discovery.
//!
//! [`find`] walks an input path and returns every file whose path ends with a
//! given suffix. The walk is depth-first and pre-order: entries of a directory
//! are visited in file-name order, and a subdirectory is fully explored before
//! its next sibling.
//!
//! ```text
//! content/
//! ├── a.txt          1
//! ├── guide/
//! │   ├── b.txt      2
//! │   └── deep/
//! │       └── c.txt  3
//! └── z.txt          4
//! ```
//!
//! Matching is a plain, case-sensitive suffix test on the whole path, so
//! `notes.old.md` matches `.md` but `notes.mdx` and `NOTES.MD` do not.
//! Symbolic links are classified by their own metadata and never followed
//! during the walk.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("No such file or directory: {0}")]
    NotFound(PathBuf),
    #[error("Permission denied: {0}")]
    AccessDenied(PathBuf),
    #[error("IO error at {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

impl ScanError {
    fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ScanError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => ScanError::AccessDenied(path.to_path_buf()),
            _ => ScanError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    fn from_walk(root: &Path, err: walkdir::Error) -> Self {
        let path = err.path().unwrap_or(root).to_path_buf();
        match err.into_io_error() {
            Some(io_err) => Self::from_io(&path, io_err),
            // Only symlink loops lack an io::Error, and links are never followed.
            None => ScanError::Io {
                path,
                source: io::Error::other("filesystem loop"),
            },
        }
    }
}

/// Every non-directory entry under `root` whose path ends with `extension`.
///
/// A `root` that is itself a file yields `[root]` when it matches and an
/// empty list otherwise.
pub fn find(root: &Path, extension: &str) -> Result<Vec<PathBuf>, ScanError> {
    std::fs::metadata(root).map_err(|e| ScanError::from_io(root, e))?;

    let mut found = Vec::new();
    let walker = WalkDir::new(root).follow_links(false).sort_by_file_name();
    for entry in walker {
        let entry = entry.map_err(|e| ScanError::from_walk(root, e))?;
        if entry.file_type().is_dir() {
            continue;
        }
        if entry.path().to_string_lossy().ends_with(extension) {
            debug!(path = %entry.path().display(), extension, "discovered source");
            found.push(entry.into_path());
        }
    }
    Ok(found)
}
