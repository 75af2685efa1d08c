//! Pairing of html sources with their script destinations
//!
//! `in/widgets/card.html` pairs with `out/widgets/card.js`: the directories
//! below the input root are mirrored below the output root and the last
//! extension is swapped. Matching is case sensitive.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::SourceConfig;
use crate::error::{PlaceError, PlaceResult};

/// A source file and the destination its html is placed into
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl Placement {
    /// Pair `source` (below `input_root`) with its destination below `output_root`
    pub fn new(
        input_root: &Path,
        output_root: &Path,
        source: &Path,
        extension: &str,
    ) -> PlaceResult<Self> {
        Ok(Self {
            source: source.to_path_buf(),
            destination: destination_for(input_root, output_root, source, extension)?,
        })
    }

    /// File name of the source, used in the generated header
    pub fn source_name(&self) -> String {
        file_name_lossy(&self.source)
    }

    pub fn destination_name(&self) -> String {
        file_name_lossy(&self.destination)
    }
}

fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Compute the destination path for `source`.
///
/// Fails when `source` is not below `input_root` or has no file name.
pub fn destination_for(
    input_root: &Path,
    output_root: &Path,
    source: &Path,
    extension: &str,
) -> PlaceResult<PathBuf> {
    let relative = source
        .strip_prefix(input_root)
        .map_err(|_| PlaceError::PathOutsideInput {
            path: source.to_path_buf(),
            root: input_root.to_path_buf(),
        })?;

    let stem = relative
        .file_stem()
        .ok_or_else(|| PlaceError::NoFileName {
            path: source.to_path_buf(),
        })?;

    let mut destination = output_root.to_path_buf();
    if let Some(nested) = relative.parent().filter(|p| !p.as_os_str().is_empty()) {
        destination.push(nested);
    }

    let mut file_name = stem.to_os_string();
    let extension = extension.trim_start_matches('.');
    if !extension.is_empty() {
        file_name.push(".");
        file_name.push(extension);
    }
    destination.push(file_name);
    Ok(destination)
}

/// Decides which file names count as html sources
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFilter {
    extensions: Vec<String>,
    include_hidden: bool,
}

impl SourceFilter {
    pub fn new(extensions: &[String], include_hidden: bool) -> Self {
        Self {
            extensions: extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .filter(|e| !e.is_empty())
                .collect(),
            include_hidden,
        }
    }

    pub fn include_hidden(&self) -> bool {
        self.include_hidden
    }

    /// Whether a regular file at `path` is a source
    pub fn accepts(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        if !self.include_hidden && name.starts_with('.') {
            return false;
        }
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(e)))
            .unwrap_or(false)
    }
}

impl From<&SourceConfig> for SourceFilter {
    fn from(config: &SourceConfig) -> Self {
        Self::new(&config.extensions, config.include_hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_source_maps_into_output_root() {
        let dest = destination_for(
            Path::new("html"),
            Path::new("js"),
            Path::new("html/card.html"),
            "js",
        )
        .unwrap();
        assert_eq!(dest, PathBuf::from("js/card.js"));
    }

    #[test]
    fn nested_directories_are_mirrored() {
        let dest = destination_for(
            Path::new("/src/html"),
            Path::new("/src/js"),
            Path::new("/src/html/widgets/forms/input.html"),
            "js",
        )
        .unwrap();
        assert_eq!(dest, PathBuf::from("/src/js/widgets/forms/input.js"));
    }

    #[test]
    fn only_the_last_extension_is_replaced() {
        let dest = destination_for(
            Path::new("in"),
            Path::new("out"),
            Path::new("in/card.tpl.html"),
            "js",
        )
        .unwrap();
        assert_eq!(dest, PathBuf::from("out/card.tpl.js"));
    }

    #[test]
    fn file_without_extension_gets_one() {
        let dest =
            destination_for(Path::new("in"), Path::new("out"), Path::new("in/README"), ".mjs")
                .unwrap();
        assert_eq!(dest, PathBuf::from("out/README.mjs"));
    }

    #[test]
    fn case_is_preserved() {
        let dest = destination_for(
            Path::new("in"),
            Path::new("out"),
            Path::new("in/MyCard.HTML"),
            "js",
        )
        .unwrap();
        assert_eq!(dest, PathBuf::from("out/MyCard.js"));
    }

    #[test]
    fn source_outside_input_is_rejected() {
        let err = destination_for(
            Path::new("in"),
            Path::new("out"),
            Path::new("elsewhere/card.html"),
            "js",
        )
        .unwrap_err();
        assert!(matches!(err, PlaceError::PathOutsideInput { .. }));
    }

    #[test]
    fn input_root_itself_has_no_file_name() {
        let err =
            destination_for(Path::new("in"), Path::new("out"), Path::new("in"), "js").unwrap_err();
        assert!(matches!(err, PlaceError::NoFileName { .. }));
    }

    #[test]
    fn placement_exposes_file_names() {
        let placement = Placement::new(
            Path::new("in"),
            Path::new("out"),
            Path::new("in/a/card.html"),
            "js",
        )
        .unwrap();
        assert_eq!(placement.source_name(), "card.html");
        assert_eq!(placement.destination_name(), "card.js");
    }

    #[test]
    fn filter_accepts_everything_but_hidden_by_default() {
        let filter = SourceFilter::default();
        assert!(filter.accepts(Path::new("in/card.html")));
        assert!(filter.accepts(Path::new("in/notes.txt")));
        assert!(!filter.accepts(Path::new("in/.DS_Store")));
    }

    #[test]
    fn filter_matches_extensions_case_insensitively() {
        let filter = SourceFilter::new(&["html".to_string(), ".htm".to_string()], false);
        assert!(filter.accepts(Path::new("card.HTML")));
        assert!(filter.accepts(Path::new("card.htm")));
        assert!(!filter.accepts(Path::new("card.js")));
        assert!(!filter.accepts(Path::new("Makefile")));
    }

    #[test]
    fn filter_can_include_hidden_files() {
        let filter = SourceFilter::new(&[], true);
        assert!(filter.accepts(Path::new(".card.html")));
    }
}
