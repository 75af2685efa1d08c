//! place-html CLI
//!
//! Usage: place-html -i <INPUT> -o <OUTPUT> [-r] [-w] [--dry-run]
//!
//! Places every html file of INPUT into the script file with the same name
//! in OUTPUT, once, or on every change with `--watch`.

mod cli;
mod commands;
mod ui;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use place_html::application::place::DEFAULT_TOOL_NAME;
use place_html::{Config, PlaceOptions};

use crate::cli::Cli;
use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("cannot determine the current directory")?;
    let (config, warnings) = Config::resolve(cli.config.as_deref(), &cwd)?;
    place_html::logging::init(&config.logging, cli.verbose);

    let ui = UiContext::new(cli.json, cli.color, &config);
    for warning in &warnings {
        eprintln!("{}", ColoredText::warning(warning.to_string()).render(ui.color));
    }

    let options = PlaceOptions::new(&cli.input, &cli.output)
        .with_recursive(cli.recursive)
        .with_dry_run(cli.dry_run)
        .with_tool_name(tool_name())
        .with_config(config);

    if cli.watch {
        return commands::watch::cmd_watch(options, &ui);
    }

    let report = commands::place::cmd_place(&options, &ui)?;
    if !report.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

/// Name the binary was invoked as; it is written into every placed block
fn tool_name() -> String {
    std::env::args_os()
        .next()
        .and_then(|arg0| {
            Path::new(&arg0)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| DEFAULT_TOOL_NAME.to_string())
}
