use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;

use place_html::domain::format_timestamp;
use place_html::{LocalFs, PlaceOptions, PlaceUseCase, WatchOptions, WatchSession};

use crate::ui::context::UiContext;

/// Place everything once, then keep placing sources as they change.
///
/// Returns when Ctrl+C is pressed.
pub fn cmd_watch(options: PlaceOptions, ui: &UiContext) -> Result<()> {
    let watch_options = WatchOptions::new(options.clone());

    // Register before the initial run so no edit falls in between
    let session =
        WatchSession::start(&watch_options).context("Unable to start watching. Aborting.")?;

    let initial = crate::commands::place::cmd_place(&options, ui)?;
    if !initial.is_success() {
        tracing::warn!("{} file(s) failed in the initial run", initial.failed());
    }

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("Error setting Ctrl+C handler")?;

    if !ui.json {
        print!(
            "\n{}",
            crate::ui::views::watch::render_watch_header(&options, ui.color, ui.unicode)
        );
    }

    let timestamp_format = options.config.template.timestamp_format.clone();
    let use_case = PlaceUseCase::new(LocalFs::new());

    let (json, color, unicode) = (ui.json, ui.color, ui.unicode);
    session.run(&use_case, running, |event| {
        if json {
            println!("{}", event.to_json());
            return;
        }

        let timestamp = format_timestamp(&Local::now(), &timestamp_format);
        let rendered =
            crate::ui::views::watch::render_watch_event(&timestamp, &event, color, unicode);

        if event.is_error() {
            eprint!("{rendered}");
        } else {
            print!("{rendered}");
        }
    })
    .context("Watching stopped unexpectedly")?;

    Ok(())
}
