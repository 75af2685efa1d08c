//! Place Use Case implementation

use std::path::Path;

use chrono::{DateTime, Local};

use crate::domain::ports::{FileSystem, FsError};
use crate::domain::{format_timestamp, splice, BlockRenderer, Placement};
use crate::error::{PlaceError, PlaceResult};
use crate::infrastructure::discover_sources;

use super::options::PlaceOptions;
use super::report::{FileReport, Outcome, PlaceReport};

/// Places html into script files through a [`FileSystem`]
pub struct PlaceUseCase<FS: FileSystem> {
    fs: FS,
    now: fn() -> DateTime<Local>,
}

impl<FS: FileSystem> PlaceUseCase<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs, now: Local::now }
    }

    /// Replace the clock used for the "placed at" line
    pub fn with_clock(mut self, now: fn() -> DateTime<Local>) -> Self {
        self.now = now;
        self
    }

    /// Place every source found in `options.input`.
    ///
    /// Fails only when the input directory cannot be listed.
    pub fn run(&self, options: &PlaceOptions) -> PlaceResult<PlaceReport> {
        let sources = discover_sources(&options.input, options.recursive, &options.filter())?;

        let renderer = self.renderer(options);
        let mut report = PlaceReport::new(options.dry_run);
        for source in &sources {
            if Self::pairs_with_itself(options, source) {
                tracing::debug!("{} is its own destination, skipping", source.display());
                continue;
            }
            report.push(self.place_with(&renderer, options, source));
        }

        tracing::info!(
            placed = report.placed(),
            unchanged = report.unchanged(),
            skipped = report.skipped(),
            failed = report.failed(),
            "placement finished"
        );
        Ok(report)
    }

    /// Place a single source, e.g. one reported by the watcher
    pub fn place_one(&self, options: &PlaceOptions, source: &Path) -> FileReport {
        self.place_with(&self.renderer(options), options, source)
    }

    /// Whether `source` would be placed into itself (input and output overlap)
    pub fn pairs_with_itself(options: &PlaceOptions, source: &Path) -> bool {
        match Placement::new(&options.input, &options.output, source, options.extension()) {
            Ok(placement) => same_file(&placement.source, &placement.destination),
            Err(_) => false,
        }
    }

    fn renderer(&self, options: &PlaceOptions) -> BlockRenderer {
        BlockRenderer::new(
            options.config.markers.clone(),
            options.config.template.clone(),
            options.tool_name.clone(),
        )
    }

    fn place_with(&self, renderer: &BlockRenderer, options: &PlaceOptions, source: &Path) -> FileReport {
        let placement =
            match Placement::new(&options.input, &options.output, source, options.extension()) {
                Ok(placement) => placement,
                Err(e) => return FileReport::failed(source, None, e.to_string()),
            };
        if same_file(&placement.source, &placement.destination) {
            return FileReport::failed(
                source,
                Some(&placement.destination),
                "source and destination are the same file",
            );
        }
        self.place(renderer, &placement, options.dry_run)
    }

    fn place(&self, renderer: &BlockRenderer, placement: &Placement, dry_run: bool) -> FileReport {
        let source = placement.source.as_path();
        let destination = placement.destination.as_path();

        if !self.fs.is_file(destination) {
            tracing::warn!(
                "no corresponding file for {}, searched for {}",
                source.display(),
                destination.display()
            );
            return FileReport::new(source, Some(destination), Outcome::MissingDestination);
        }

        let html = match self.fs.read(source) {
            Ok(html) => html,
            Err(e) => return read_failed(source, destination, source, e),
        };

        let markers = renderer.markers();
        if html.contains(&markers.start) || html.contains(&markers.end) {
            return FileReport::failed(
                source,
                Some(destination),
                "html contains a placement marker and cannot be placed",
            );
        }

        let document = match self.fs.read(destination) {
            Ok(document) => document,
            Err(e) => return read_failed(source, destination, destination, e),
        };

        let placed_at = format_timestamp(&(self.now)(), renderer.timestamp_format());
        let block = renderer.render(&placement.source_name(), &html, &placed_at);
        if block.matches(markers.start.as_str()).count() != 1
            || block.matches(markers.end.as_str()).count() != 1
        {
            return FileReport::failed(
                source,
                Some(destination),
                "generated block would contain a placement marker more than once",
            );
        }
        let spliced = splice(&document, &block, markers);

        if !spliced.changed() {
            tracing::debug!("{} already up to date", destination.display());
            return FileReport::new(source, Some(destination), Outcome::Unchanged);
        }

        let outcome = Outcome::Placed { kind: spliced.kind };
        if dry_run {
            let diff = unified_diff(destination, &document, &spliced.text);
            return FileReport::new(source, Some(destination), outcome).with_diff(diff);
        }

        if let Err(e) = self.fs.write(destination, &spliced.text) {
            let error = PlaceError::Write {
                path: destination.to_path_buf(),
                message: e.to_string(),
            };
            return FileReport::failed(source, Some(destination), error.to_string());
        }

        tracing::info!(
            "html from {} placed into {} ({:?})",
            placement.source_name(),
            placement.destination_name(),
            spliced.kind
        );
        FileReport::new(source, Some(destination), outcome)
    }
}

fn read_failed(source: &Path, destination: &Path, failed: &Path, e: FsError) -> FileReport {
    let error = PlaceError::Read {
        path: failed.to_path_buf(),
        message: e.to_string(),
    };
    FileReport::failed(source, Some(destination), error.to_string())
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Generate a unified diff between old and new content
fn unified_diff(path: &Path, old: &str, new: &str) -> String {
    use similar::TextDiff;
    TextDiff::from_lines(old, new)
        .unified_diff()
        .header(
            &format!("a/{}", path.display()),
            &format!("b/{}", path.display()),
        )
        .to_string()
}
