use anyhow::Result;

use place_html::{LocalFs, PlaceOptions, PlaceReport, PlaceUseCase};

use crate::ui::context::UiContext;
use crate::ui::views::place::{render_file_report, render_place_header, render_place_summary};

/// Place every source once and print the outcome
pub fn cmd_place(options: &PlaceOptions, ui: &UiContext) -> Result<PlaceReport> {
    if ui.json {
        println!(
            "{}",
            serde_json::json!({
                "event": "start",
                "command": "place",
                "input": options.input.display().to_string(),
                "output": options.output.display().to_string(),
                "recursive": options.recursive,
                "dry_run": options.dry_run,
            })
        );
    } else {
        print!(
            "{}",
            render_place_header(options, ui.color, ui.unicode)
        );
    }

    let use_case = PlaceUseCase::new(LocalFs::new());
    let report = use_case.run(options)?;

    if ui.json {
        for file in &report.files {
            println!("{}", file.to_json());
        }
        println!("{}", report.summary_json());
    } else {
        for file in &report.files {
            let rendered = render_file_report(file, ui.color, ui.unicode);
            if file.is_failed() {
                eprint!("{rendered}");
            } else {
                print!("{rendered}");
            }
        }
        print!("{}", render_place_summary(&report, ui.color, ui.unicode));
    }

    Ok(report)
}
