//! Configuration module for place-html
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PLACE_HTML_*)
//! 3. Explicit `--config` file, or `./place-html.toml`
//! 4. User config (~/.config/place-html/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_env_overrides_from, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{
    ColorMode, Config, LoggingConfig, MarkersConfig, OutputConfig, SourceConfig, TemplateConfig,
    WatchConfig,
};
