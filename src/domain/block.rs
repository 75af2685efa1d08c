//! Generated block rendering
//!
//! A placed block looks like:
//!
//! ```text
//! /*! -- START OF PLACED HTML -- */
//! /*
//! 'place-html' placed the below part by copying the html from `card.html`.
//! 05 Oct, 2024 at 14:03:07 (+0200)
//! */
//! const template = document.createElement('template');
//! template.innerHTML = `
//! <div class="card"></div>
//! `;
//! /*! -- END OF PLACED HTML -- */
//! ```

use std::fmt::{Display, Write};

use chrono::{DateTime, TimeZone};

use crate::config::{MarkersConfig, TemplateConfig};

/// Renders placed blocks for one run
#[derive(Debug, Clone)]
pub struct BlockRenderer {
    markers: MarkersConfig,
    template: TemplateConfig,
    tool_name: String,
}

impl BlockRenderer {
    pub fn new(markers: MarkersConfig, template: TemplateConfig, tool_name: impl Into<String>) -> Self {
        Self {
            markers,
            template,
            tool_name: tool_name.into(),
        }
    }

    pub fn markers(&self) -> &MarkersConfig {
        &self.markers
    }

    pub fn timestamp_format(&self) -> &str {
        &self.template.timestamp_format
    }

    /// Render the block for `html` copied from the file named `source_name`
    pub fn render(&self, source_name: &str, html: &str, placed_at: &str) -> String {
        let variable = &self.template.variable;
        let html = if self.template.escape {
            escape_template_literal(html)
        } else {
            html.to_string()
        };

        format!(
            "{start}\n\
             /*\n\
             '{tool}' placed the below part by copying the html from `{source}`.\n\
             {placed_at}\n\
             */\n\
             const {variable} = document.createElement('template');\n\
             {variable}.innerHTML = `\n\
             {html}\n\
             `;\n\
             {end}",
            start = self.markers.start,
            end = self.markers.end,
            tool = self.tool_name,
            source = source_name,
        )
    }
}

/// Format `at` with a `chrono` strftime string.
///
/// Invalid format strings fall back to RFC 3339 instead of panicking.
pub fn format_timestamp<Tz>(at: &DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    if write!(out, "{}", at.format(format)).is_err() {
        tracing::warn!("invalid timestamp format {format:?}, using RFC 3339");
        return at.to_rfc3339();
    }
    out
}

/// Escape text for use inside a JavaScript template literal
pub fn escape_template_literal(html: &str) -> String {
    html.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}
