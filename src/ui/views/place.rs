use std::path::Path;

use place_html::{FileReport, Outcome, PlaceOptions, PlaceReport, SpliceKind};

use crate::ui::blocks::header::{RunHeader, RunMode};
use crate::ui::components::diff::render_unified_diff;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_place_header(
    options: &PlaceOptions,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mode = if options.dry_run {
        RunMode::DryRun
    } else {
        RunMode::Place
    };
    let input = options.input.display().to_string();
    let output = options.output.display().to_string();
    RunHeader::new(mode, &input, &output)
        .extension(options.extension())
        .recursive(options.recursive)
        .render(supports_color, supports_unicode)
}

/// Last path component, the way files are named in messages
pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn render_file_report(report: &FileReport, supports_color: bool, supports_unicode: bool) -> String {
    let source = file_name(&report.source);
    let destination = report.destination.as_deref();

    let line = match &report.outcome {
        Outcome::Placed { kind } => {
            let verb = match kind {
                SpliceKind::Appended => "appended to",
                _ => "placed into",
            };
            format!(
                "{} html from {} {} {}",
                Icon::Success.colored(supports_color, supports_unicode),
                source,
                verb,
                destination.map(file_name).unwrap_or_default()
            )
        }
        Outcome::Unchanged => format!(
            "{} {}",
            Icon::Skipped.colored(supports_color, supports_unicode),
            ColoredText::dim(format!(
                "{} already up to date",
                destination.map(file_name).unwrap_or_default()
            ))
            .render(supports_color)
        ),
        Outcome::MissingDestination => format!(
            "{} {}",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(format!(
                "No corresponding file for {}. Searched for `{}`",
                source,
                destination.map(|d| d.display().to_string()).unwrap_or_default()
            ))
            .render(supports_color)
        ),
        Outcome::Failed { message } => format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(format!("File skipped! {}: {}", source, message))
                .render(supports_color)
        ),
    };

    let mut out = format!("{line}\n");
    if let Some(diff) = &report.diff {
        out.push_str(&render_unified_diff(diff, supports_color));
    }
    out
}

pub fn render_place_summary(report: &PlaceReport, supports_color: bool, supports_unicode: bool) -> String {
    let icon = if report.is_success() {
        Icon::Success
    } else {
        Icon::Error
    };
    let verb = if report.dry_run { "would place" } else { "placed" };
    let mut line = format!(
        "{} {} {}, {} unchanged, {} skipped",
        icon.colored(supports_color, supports_unicode),
        verb,
        report.placed(),
        report.unchanged(),
        report.skipped()
    );
    if report.failed() > 0 {
        line.push_str(
            &ColoredText::error(format!(", {} failed", report.failed())).render(supports_color),
        );
    }
    format!("\n{line}\n")
}
