//! Place Options

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::SourceFilter;

/// Name written into the generated header when none is given
pub const DEFAULT_TOOL_NAME: &str = "place-html";

/// Options for the place use case
#[derive(Debug, Clone)]
pub struct PlaceOptions {
    /// Directory containing the html files
    pub input: PathBuf,
    /// Directory containing the script files
    pub output: PathBuf,
    /// Descend into subdirectories of `input`
    pub recursive: bool,
    /// Compute changes without writing
    pub dry_run: bool,
    /// Program name shown in the generated header
    pub tool_name: String,
    /// Markers, template and source settings
    pub config: Config,
}

impl PlaceOptions {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            recursive: false,
            dry_run: false,
            tool_name: DEFAULT_TOOL_NAME.to_string(),
            config: Config::default(),
        }
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_tool_name(mut self, tool_name: impl Into<String>) -> Self {
        self.tool_name = tool_name.into();
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Source filter derived from the `[source]` config
    pub fn filter(&self) -> SourceFilter {
        SourceFilter::from(&self.config.source)
    }

    /// Extension of the paired script files
    pub fn extension(&self) -> &str {
        &self.config.output.extension
    }
}
