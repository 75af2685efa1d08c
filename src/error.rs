//! Error types for place-html
//!
//! Library code returns `PlaceResult`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for place-html operations
pub type PlaceResult<T> = Result<T, PlaceError>;

/// Main error type for place-html operations
#[derive(Error, Debug)]
pub enum PlaceError {
    /// Input or output directory does not exist or is not a directory
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Input directory exists but cannot be listed
    #[error("could not list contents of directory {path}: {message}")]
    ListDirectory { path: PathBuf, message: String },

    /// Source file is not located below the input directory
    #[error("'{path}' is not inside the input directory '{root}'")]
    PathOutsideInput { path: PathBuf, root: PathBuf },

    /// Source path has no file name to derive a destination from
    #[error("'{path}' has no file name")]
    NoFileName { path: PathBuf },

    /// Reading the html or js file failed
    #[error("could not read {path}: {message}")]
    Read { path: PathBuf, message: String },

    /// Writing the js file failed
    #[error("could not write {path}: {message}")]
    Write { path: PathBuf, message: String },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// File watcher could not be started
    #[error("unable to start watching {path}: {message}")]
    WatchFailed { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<notify::Error> for PlaceError {
    fn from(e: notify::Error) -> Self {
        let path = e.paths.first().cloned().unwrap_or_default();
        PlaceError::WatchFailed {
            path,
            message: e.to_string(),
        }
    }
}
