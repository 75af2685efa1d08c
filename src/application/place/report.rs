//! Place results

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::SpliceKind;

/// What happened to one source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Block replaced or appended (or would be, in a dry run)
    Placed { kind: SpliceKind },
    /// Script file already carries this html
    Unchanged,
    /// No script file to place into
    MissingDestination,
    /// Reading or writing failed
    Failed { message: String },
}

/// Result for a single source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub source: PathBuf,
    pub destination: Option<PathBuf>,
    #[serde(flatten)]
    pub outcome: Outcome,
    /// Unified diff of the script file, only in dry runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

impl FileReport {
    pub fn new(source: &Path, destination: Option<&Path>, outcome: Outcome) -> Self {
        Self {
            source: source.to_path_buf(),
            destination: destination.map(Path::to_path_buf),
            outcome,
            diff: None,
        }
    }

    pub fn failed(source: &Path, destination: Option<&Path>, message: impl Into<String>) -> Self {
        Self::new(
            source,
            destination,
            Outcome::Failed {
                message: message.into(),
            },
        )
    }

    pub fn with_diff(mut self, diff: String) -> Self {
        self.diff = Some(diff);
        self
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, Outcome::Failed { .. })
    }

    /// NDJSON line with `"event":"file"` and `"command":"place"`
    pub fn to_json(&self) -> String {
        let mut value = serde_json::to_value(self)
            .unwrap_or_else(|_| serde_json::json!({"status": "failed"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("event".to_string(), serde_json::json!("file"));
            obj.insert("command".to_string(), serde_json::json!("place"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Result of a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceReport {
    pub files: Vec<FileReport>,
    pub dry_run: bool,
}

impl PlaceReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            files: Vec::new(),
            dry_run,
        }
    }

    pub fn push(&mut self, file: FileReport) {
        self.files.push(file);
    }

    pub fn placed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Placed { .. }))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Unchanged))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::MissingDestination))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed { .. }))
    }

    /// True when no file failed
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.outcome)).count()
    }

    /// NDJSON summary line
    pub fn summary_json(&self) -> String {
        serde_json::json!({
            "event": "complete",
            "command": "place",
            "dry_run": self.dry_run,
            "placed": self.placed(),
            "unchanged": self.unchanged(),
            "skipped": self.skipped(),
            "failed": self.failed(),
        })
        .to_string()
    }
}
