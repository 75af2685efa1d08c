//! Finding html sources in the input tree

use std::path::{Component, Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::SourceFilter;
use crate::error::{PlaceError, PlaceResult};

/// List the sources below `input_root`, sorted.
///
/// Without `recursive` only the direct children are considered. A missing or
/// unlistable input directory is an error; unreadable entries further down
/// the tree are logged and skipped.
pub fn discover_sources(
    input_root: &Path,
    recursive: bool,
    filter: &SourceFilter,
) -> PlaceResult<Vec<PathBuf>> {
    if !input_root.is_dir() {
        return Err(PlaceError::DirectoryNotFound {
            path: input_root.to_path_buf(),
        });
    }
    std::fs::read_dir(input_root).map_err(|e| PlaceError::ListDirectory {
        path: input_root.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut builder = WalkBuilder::new(input_root);
    builder
        .standard_filters(false)
        .hidden(!filter.include_hidden())
        .follow_links(false);
    if !recursive {
        builder.max_depth(Some(1));
    }

    let mut sources = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("skipping unreadable entry: {err}");
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        let path = entry.path();
        if path.is_file() && filter.accepts(path) {
            sources.push(path.to_path_buf());
        }
    }

    sources.sort();
    tracing::debug!(
        "found {} source(s) in {}",
        sources.len(),
        input_root.display()
    );
    Ok(sources)
}

/// Whether `path` is a source that discovery would have returned.
///
/// Used by watch mode to filter change events. `path` and `input_root` must
/// be spelled the same way (both canonical, or both relative).
pub fn is_source(input_root: &Path, path: &Path, recursive: bool, filter: &SourceFilter) -> bool {
    let Ok(relative) = path.strip_prefix(input_root) else {
        return false;
    };

    let components: Vec<Component<'_>> = relative.components().collect();
    if components.is_empty() || (!recursive && components.len() != 1) {
        return false;
    }

    if !filter.include_hidden() {
        let hidden_dir = components[..components.len() - 1].iter().any(|c| {
            matches!(c, Component::Normal(name) if name.to_string_lossy().starts_with('.'))
        });
        if hidden_dir {
            return false;
        }
    }

    path.is_file() && filter.accepts(path)
}
