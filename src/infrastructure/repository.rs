//! File system repository

use crate::error::{CalendarError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of `ensure_dir`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Created,
    AlreadyExists,
}

/// Abstract storage for a generated calendar
pub trait CalendarRepository {
    /// Directory the calendar is generated under
    fn root(&self) -> &Path;

    /// Create `path` unless it is already a directory.
    ///
    /// The parent must exist. An existing directory is not an error.
    fn ensure_dir(&self, path: &Path) -> Result<DirStatus>;

    /// Create or overwrite the file at `path`
    fn write_file(&self, path: &Path, content: &str) -> Result<()>;
}

/// File system implementation of CalendarRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }
}

impl CalendarRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self, path: &Path) -> Result<DirStatus> {
        match fs::create_dir(path) {
            Ok(()) => Ok(DirStatus::Created),
            Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => {
                debug!("{} -> Directory already exists!", path.display());
                Ok(DirStatus::AlreadyExists)
            }
            Err(e) => Err(CalendarError::Io(e)),
        }
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).map_err(CalendarError::Io)
    }
}
