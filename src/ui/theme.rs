use crossterm::style::Color;

/// Design tokens for the place-html CLI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const SKIPPED: &str = "○";

    // Command identifiers (used in headers).
    pub const PLACE: &str = "⇥";
    pub const WATCH: &str = "⟳";
    pub const DIFF: &str = "Δ";

    /// Source directory to script directory
    pub const PAIRS_WITH: &str = "→";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const SKIPPED: &str = "[SKIP]";

    pub const PLACE: &str = "[PLACE]";
    pub const WATCH: &str = "[~]";
    pub const DIFF: &str = "[DIFF]";

    pub const PAIRS_WITH: &str = "->";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_icons_are_plain_ascii() {
        for icon in [
            icons_ascii::SUCCESS,
            icons_ascii::ERROR,
            icons_ascii::WARNING,
            icons_ascii::SKIPPED,
            icons_ascii::PLACE,
            icons_ascii::WATCH,
            icons_ascii::DIFF,
        ] {
            assert!(icon.is_ascii(), "{icon} is not ascii");
        }
    }
}
