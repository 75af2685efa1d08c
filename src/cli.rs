//! CLI Argument Parsing
//!
//! A single command: place once, then optionally keep watching.

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Place html snippets into the script files that use them
#[derive(Parser, Debug)]
#[command(name = "place-html")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Each html file in INPUT is placed into the script file of the same name in OUTPUT,\nbetween `/*! -- START OF PLACED HTML -- */` and `/*! -- END OF PLACED HTML -- */`."
)]
pub struct Cli {
    /// The directory containing the html files
    #[arg(short, long, value_name = "INPUT")]
    pub input: PathBuf,

    /// The directory containing the script files
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Operate on all html files below the input directory, mirroring subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Keep running and place html whenever a file in the input directory changes
    #[arg(short, long)]
    pub watch: bool,

    /// Show what would change without writing anything
    #[arg(long, conflicts_with = "watch")]
    pub dry_run: bool,

    /// Configuration file (default: ./place-html.toml, then the user config)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit NDJSON events instead of human output
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_minimal() {
        let cli = Cli::try_parse_from(["place-html", "-i", "html", "-o", "js"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("html"));
        assert_eq!(cli.output, PathBuf::from("js"));
        assert!(!cli.recursive);
        assert!(!cli.watch);
        assert!(!cli.dry_run);
        assert_eq!(cli.color, None);
    }

    #[test]
    fn test_cli_parse_long_flags() {
        let cli = Cli::try_parse_from([
            "place-html",
            "--input",
            "src/html",
            "--output",
            "src/js",
            "--recursive",
            "--watch",
            "--json",
        ])
        .unwrap();
        assert!(cli.recursive);
        assert!(cli.watch);
        assert!(cli.json);
    }

    #[test]
    fn test_cli_input_and_output_are_required() {
        assert!(Cli::try_parse_from(["place-html", "-i", "html"]).is_err());
        assert!(Cli::try_parse_from(["place-html", "-o", "js"]).is_err());
    }

    #[test]
    fn test_cli_dry_run_conflicts_with_watch() {
        let result = Cli::try_parse_from(["place-html", "-i", "a", "-o", "b", "-w", "--dry-run"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_color_and_verbosity() {
        let cli = Cli::try_parse_from([
            "place-html", "-i", "a", "-o", "b", "--color", "never", "-vv",
        ])
        .unwrap();
        assert!(matches!(cli.color, Some(ColorWhen::Never)));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_config_path() {
        let cli = Cli::try_parse_from(["place-html", "-i", "a", "-o", "b", "--config", "x.toml"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }
}
