use std::path::Path;

use place_html::{PlaceOptions, WatchEvent};

use crate::ui::blocks::header::{RunHeader, RunMode};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::place::file_name;

pub fn render_watch_header(
    options: &PlaceOptions,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let input = options.input.display().to_string();
    let output = options.output.display().to_string();
    RunHeader::new(RunMode::Watch, &input, &output)
        .extension(options.extension())
        .recursive(options.recursive)
        .render(supports_color, supports_unicode)
}

/// One line per event; placements read `<timestamp> html from a.html placed into a.js`
pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = ColoredText::dim(timestamp).render(supports_color);
    let name = |s: &str| file_name(Path::new(s));

    match event {
        WatchEvent::WatchStarted { input, .. } => format!(
            "{} {} Watching: {}\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode),
            input
        ),
        WatchEvent::Placed {
            source,
            destination,
            ..
        } => format!(
            "{} html from {} placed into {}\n",
            prefix,
            name(source),
            name(destination)
        ),
        WatchEvent::Unchanged { source } => format!(
            "{} {} {}\n",
            prefix,
            Icon::Skipped.colored(supports_color, supports_unicode),
            ColoredText::dim(format!("{} unchanged", name(source))).render(supports_color)
        ),
        WatchEvent::Skipped {
            source,
            destination,
        } => format!(
            "{} {} {}\n",
            prefix,
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(format!(
                "Skipping a file! Could not find `{}` to place html into for {}",
                destination,
                name(source)
            ))
            .render(supports_color)
        ),
        WatchEvent::Failed { source, message } => format!(
            "{} {} Could not place html for {}: {}\n",
            prefix,
            Icon::Error.colored(supports_color, supports_unicode),
            name(source),
            message
        ),
        WatchEvent::Error { message } => format!(
            "{} {} Error: {}\n",
            prefix,
            Icon::Error.colored(supports_color, supports_unicode),
            message
        ),
        WatchEvent::Shutdown => format!(
            "\n{} {} Watch stopped.\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode)
        ),
    }
}
