use crossterm::style::Stylize;

use crate::ui::theme;

/// Color a unified diff line by line
pub fn render_unified_diff(diff: &str, supports_color: bool) -> String {
    let mut out = String::new();
    for line in diff.lines() {
        out.push_str(&color_line(line, supports_color));
        out.push('\n');
    }
    out
}

fn color_line(line: &str, supports_color: bool) -> String {
    if !supports_color {
        return line.to_string();
    }

    let color = if line.starts_with("---") || line.starts_with("+++") || line.starts_with("@@") {
        theme::colors::INFO
    } else if line.starts_with('+') {
        theme::colors::SUCCESS
    } else if line.starts_with('-') {
        theme::colors::ERROR
    } else {
        theme::colors::DIM
    };
    format!("{}", line.with(color))
}
