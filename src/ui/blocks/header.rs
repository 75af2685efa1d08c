use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

/// Which run the header announces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Place,
    DryRun,
    Watch,
}

impl RunMode {
    fn icon(self) -> Icon {
        match self {
            RunMode::Place => Icon::Place,
            RunMode::DryRun => Icon::Diff,
            RunMode::Watch => Icon::Watch,
        }
    }

    fn title(self) -> &'static str {
        match self {
            RunMode::Place => "place-html",
            RunMode::DryRun => "place-html (dry run)",
            RunMode::Watch => "place-html watch",
        }
    }

    fn note(self) -> Option<&'static str> {
        match self {
            RunMode::Place => None,
            RunMode::DryRun => Some("nothing is written, changes are shown as diffs"),
            RunMode::Watch => Some("Press Ctrl+C to stop"),
        }
    }
}

/// Title plus the html -> script pairing a run works on
#[derive(Debug, Clone)]
pub struct RunHeader<'a> {
    mode: RunMode,
    input: &'a str,
    output: &'a str,
    extension: &'a str,
    recursive: bool,
}

impl<'a> RunHeader<'a> {
    pub fn new(mode: RunMode, input: &'a str, output: &'a str) -> Self {
        Self {
            mode,
            input,
            output,
            extension: "js",
            recursive: false,
        }
    }

    pub fn extension(mut self, extension: &'a str) -> Self {
        self.extension = extension;
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = ColoredText::info(self.mode.title())
            .bold()
            .render(supports_color);
        let mut out = format!(
            "{} {}\n",
            self.mode.icon().colored(supports_color, supports_unicode),
            title
        );

        let arrow = if supports_unicode {
            theme::icons::PAIRS_WITH
        } else {
            theme::icons_ascii::PAIRS_WITH
        };
        out.push_str(&format!(
            "  {} {} {} {}\n",
            self.input,
            ColoredText::dim(arrow).render(supports_color),
            self.output,
            ColoredText::dim(format!("(*.{})", self.extension)).render(supports_color)
        ));

        let scope = if self.recursive {
            "all subdirectories"
        } else {
            "top level only"
        };
        out.push_str(&format!(
            "  {} {}\n",
            ColoredText::dim("Scope:").render(supports_color),
            scope
        ));

        if let Some(note) = self.mode.note() {
            out.push_str(&format!("  {}\n", ColoredText::dim(note).render(supports_color)));
        }
        out
    }
}
