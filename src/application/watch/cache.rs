//! Content hashes of watched sources

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// Last seen content hash per source.
///
/// Editors and `touch` fire modify events without changing a byte; those
/// must not trigger a placement.
#[derive(Debug, Default)]
pub struct ContentHashes {
    hashes: HashMap<PathBuf, String>,
}

impl ContentHashes {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    /// Record `hash` for `path`, returning true if it differs from the last one
    pub fn update(&mut self, path: &Path, hash: String) -> bool {
        match self.hashes.get(path) {
            Some(previous) if *previous == hash => false,
            _ => {
                self.hashes.insert(path.to_path_buf(), hash);
                true
            }
        }
    }

    /// Hash the file at `path` and record it; `None` if it cannot be read
    pub fn refresh(&mut self, path: &Path) -> Option<bool> {
        let content = std::fs::read(path).ok()?;
        Some(self.update(path, compute_content_hash(&content)))
    }

    /// Forget `path`, so its next event is treated as a change
    pub fn invalidate(&mut self, path: &Path) {
        self.hashes.remove(path);
    }
}

/// SHA-256 of `content`, formatted as `sha256:<hex>`
pub fn compute_content_hash(content: &[u8]) -> String {
    format!("sha256:{:x}", Sha256::digest(content))
}
