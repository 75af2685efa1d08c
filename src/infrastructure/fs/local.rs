//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go to a temp file in the destination directory which is then
/// renamed over the target, so readers never see a half-written script.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::at(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        atomic_write(path, content.as_bytes())
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Write `content` to `path` via tempfile + rename.
///
/// Existing permissions of `path` are carried over to the new file.
pub fn atomic_write(path: &Path, content: &[u8]) -> FsResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| FsError::at(dir, e))?;
    temp.write_all(content).map_err(|e| FsError::at(temp.path(), e))?;
    temp.as_file().sync_all().map_err(|e| FsError::at(temp.path(), e))?;

    if let Ok(metadata) = std::fs::metadata(path) {
        std::fs::set_permissions(temp.path(), metadata.permissions())
            .map_err(|e| FsError::at(path, e))?;
    }

    temp.persist(path).map_err(|e| FsError::at(path, e.error))?;
    Ok(())
}
