//! Test environment builder for isolated place-html runs.
//!
//! Provides `TestEnv` - a temp project with an html and a js directory, an
//! isolated HOME (so no user config leaks in), and helpers to run the CLI.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Output, Stdio};
use tempfile::TempDir;

/// Result of running the place-html CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every stdout line as JSON (for `--json` runs)
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("not json: {l:?}: {e}"))
            })
            .collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Temporary directory for HOME
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Create an empty project with `html/` and `js/` directories
    pub fn new() -> Self {
        let project_root = tempfile::tempdir().expect("Failed to create project dir");
        let home_dir = tempfile::tempdir().expect("Failed to create home dir");
        std::fs::create_dir_all(project_root.path().join("html")).unwrap();
        std::fs::create_dir_all(project_root.path().join("js")).unwrap();

        Self {
            project_root,
            home_dir,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_place-html")),
        }
    }

    /// Add an html source (path relative to `html/`)
    pub fn with_html(self, relative: &str, content: &str) -> Self {
        self.write_project_file(&format!("html/{relative}"), content);
        self
    }

    /// Add a script file (path relative to `js/`)
    pub fn with_script(self, relative: &str, content: &str) -> Self {
        self.write_project_file(&format!("js/{relative}"), content);
        self
    }

    /// Write `place-html.toml` into the project root
    pub fn with_project_config(self, toml: &str) -> Self {
        self.write_project_file("place-html.toml", toml);
        self
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Read a script file (path relative to `js/`)
    pub fn read_script(&self, relative: &str) -> String {
        let path = self.project_path(&format!("js/{relative}"));
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Run the CLI from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = self
            .command(args)
            .output()
            .expect("Failed to execute place-html");
        output_to_result(output)
    }

    /// Run `-i html -o js` plus `extra` from the project root
    pub fn place(&self, extra: &[&str]) -> TestResult {
        let mut args = vec!["-i", "html", "-o", "js"];
        args.extend_from_slice(extra);
        self.run(&args)
    }

    /// Start the CLI without waiting for it (for `--watch`)
    pub fn spawn(&self, args: &[&str]) -> Child {
        self.command(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to start place-html")
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("USERPROFILE", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("PLACE_HTML_EXTENSION")
            .env_remove("PLACE_HTML_DEBOUNCE_MS")
            .env_remove("PLACE_HTML_LOG");
        cmd
    }
}

/// Convert Command output to TestResult
pub fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files
}
