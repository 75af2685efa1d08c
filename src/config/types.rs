//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::BlockRenderer;
use crate::error::PlaceResult;

use super::loader::{self, ConfigWarning};

/// Default opening marker, kept compatible with files placed by earlier releases
pub const DEFAULT_START_MARKER: &str = "/*! -- START OF PLACED HTML -- */";
/// Default closing marker
pub const DEFAULT_END_MARKER: &str = "/*! -- END OF PLACED HTML -- */";

/// Sentinel comments delimiting the placed block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkersConfig {
    #[serde(default = "default_start_marker")]
    pub start: String,

    #[serde(default = "default_end_marker")]
    pub end: String,
}

impl Default for MarkersConfig {
    fn default() -> Self {
        Self {
            start: default_start_marker(),
            end: default_end_marker(),
        }
    }
}

impl MarkersConfig {
    /// Check that the markers delimit a block unambiguously.
    ///
    /// Each marker has to occur exactly once in a rendered block, at its
    /// edge; otherwise `find_block` picks the wrong span and re-runs nest.
    pub fn validate(&self, template: &TemplateConfig) -> Result<(), String> {
        if self.start.trim().is_empty() || self.end.trim().is_empty() {
            return Err("markers.start and markers.end must not be empty".to_string());
        }
        if self.start == self.end {
            return Err("markers.start and markers.end must differ".to_string());
        }

        let sample = BlockRenderer::new(self.clone(), template.clone(), env!("CARGO_PKG_NAME"))
            .render("index.html", "", "");
        for (key, marker) in [("markers.start", &self.start), ("markers.end", &self.end)] {
            if sample.matches(marker.as_str()).count() != 1 {
                return Err(format!(
                    "{key} {marker:?} also occurs inside the generated block"
                ));
            }
        }
        Ok(())
    }
}

fn default_start_marker() -> String {
    DEFAULT_START_MARKER.to_string()
}

fn default_end_marker() -> String {
    DEFAULT_END_MARKER.to_string()
}

/// Shape of the generated JavaScript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Name of the `const` holding the template element
    #[serde(default = "default_variable")]
    pub variable: String,

    /// `chrono` format string for the "placed at" line
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Escape backticks, backslashes and `${` so the html survives the template literal
    #[serde(default)]
    pub escape: bool,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            variable: default_variable(),
            timestamp_format: default_timestamp_format(),
            escape: false,
        }
    }
}

fn default_variable() -> String {
    "template".to_string()
}

fn default_timestamp_format() -> String {
    "%d %b, %Y at %H:%M:%S (%z)".to_string()
}

/// Which files in the input directory count as sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SourceConfig {
    /// Extensions (without dot) to accept; empty accepts every regular file
    #[serde(default)]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub include_hidden: bool,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Extension of the paired script file
    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_extension() -> String {
    "js".to_string()
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Watch mode configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    100
}

/// Logging configuration (overridden by `RUST_LOG`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub markers: MarkersConfig,

    #[serde(default)]
    pub template: TemplateConfig,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Resolve the config file (explicit, project, user) and apply env overrides
    pub fn resolve(
        explicit: Option<&Path>,
        cwd: &Path,
    ) -> PlaceResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(explicit, cwd)
    }

    /// Check the values serde cannot, e.g. markers that would nest on re-runs
    pub fn validate(&self) -> Result<(), String> {
        self.markers.validate(&self.template)
    }
}
