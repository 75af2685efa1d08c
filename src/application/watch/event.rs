//! Watch event types and options

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::application::place::{FileReport, Outcome, PlaceOptions};
use crate::domain::SpliceKind;

/// Debounce duration in milliseconds
pub const DEBOUNCE_MS: u64 = 100;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// How each changed source is placed
    pub place: PlaceOptions,
    /// Quiet period after the last event before placing
    pub debounce: Duration,
}

impl WatchOptions {
    /// Create watch options using the debounce from the place config
    pub fn new(place: PlaceOptions) -> Self {
        let debounce = Duration::from_millis(place.config.watch.debounce_ms);
        Self { place, debounce }
    }

    /// Override the debounce duration
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Watch started
    WatchStarted {
        input: String,
        output: String,
        recursive: bool,
    },
    /// Html placed into its script file
    Placed {
        source: String,
        destination: String,
        kind: SpliceKind,
    },
    /// Source changed but the script already carries its html
    Unchanged { source: String },
    /// No script file for the changed source
    Skipped { source: String, destination: String },
    /// Placement failed for one source
    Failed { source: String, message: String },
    /// Watcher-level error
    Error { message: String },
    /// Watch stopped
    Shutdown,
}

impl WatchEvent {
    /// Event describing the placement of one changed source
    pub fn from_report(report: &FileReport) -> Self {
        let source = report.source.display().to_string();
        let destination = report
            .destination
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_default();

        match &report.outcome {
            Outcome::Placed { kind } => WatchEvent::Placed {
                source,
                destination,
                kind: *kind,
            },
            Outcome::Unchanged => WatchEvent::Unchanged { source },
            Outcome::MissingDestination => WatchEvent::Skipped {
                source,
                destination,
            },
            Outcome::Failed { message } => WatchEvent::Failed {
                source,
                message: message.clone(),
            },
        }
    }

    /// Whether this event should go to stderr in human output
    pub fn is_error(&self) -> bool {
        matches!(self, WatchEvent::Failed { .. } | WatchEvent::Error { .. })
    }

    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        // Serialize to Value, add command field, then serialize to string
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Watcher state for debouncing
#[derive(Debug)]
pub struct WatcherState {
    pending_changes: HashSet<PathBuf>,
    last_change: Option<Instant>,
    debounce: Duration,
}

impl Default for WatcherState {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEBOUNCE_MS))
    }
}

impl WatcherState {
    /// Create a new watcher state
    pub fn new(debounce: Duration) -> Self {
        Self {
            pending_changes: HashSet::new(),
            last_change: None,
            debounce,
        }
    }

    /// Add a file change to pending changes
    pub fn add_change(&mut self, path: PathBuf) {
        self.pending_changes.insert(path);
        self.last_change = Some(Instant::now());
    }

    /// Check if debounce period has passed and we have pending changes
    pub fn should_sync(&self) -> bool {
        if let Some(last) = self.last_change {
            !self.pending_changes.is_empty() && last.elapsed() >= self.debounce
        } else {
            false
        }
    }

    /// Take all pending changes, sorted, resetting state
    pub fn take_changes(&mut self) -> Vec<PathBuf> {
        let mut changes: Vec<_> = self.pending_changes.drain().collect();
        changes.sort();
        self.last_change = None;
        changes
    }

    /// Check if there are pending changes
    pub fn has_pending(&self) -> bool {
        !self.pending_changes.is_empty()
    }
}
