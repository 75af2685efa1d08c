//! What the attached terminal can display
//!
//! Placement lines go to stdout and failures to stderr, so colour is only
//! used when stdout is a terminal.

use std::collections::HashMap;

use is_terminal::IsTerminal;

/// Variables set by common CI services
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "JENKINS_HOME",
    "BUILDKITE",
    "CIRCLECI",
    "TRAVIS",
];

/// Locale variables in POSIX precedence order
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

/// Character set announced by the locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Charset {
    Utf8,
    Ascii,
    Unspecified,
}

/// Environment variables relevant to output, read once
#[derive(Debug, Default)]
struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    fn from_process() -> Self {
        let keys = ["TERM", "NO_COLOR", "CLICOLOR"]
            .iter()
            .chain(CI_VARS)
            .chain(LOCALE_VARS);
        let vars = keys
            .filter_map(|key| std::env::var(key).ok().map(|v| (key.to_string(), v)))
            .collect();
        Self { vars }
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    fn is_set(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// First locale variable that is set and non-empty wins
    fn charset(&self) -> Charset {
        let Some(locale) = LOCALE_VARS
            .iter()
            .filter_map(|key| self.get(key))
            .find(|value| !value.is_empty())
        else {
            return Charset::Unspecified;
        };

        let locale = locale.to_ascii_lowercase();
        if locale.contains("utf-8") || locale.contains("utf8") {
            Charset::Utf8
        } else if locale == "c" || locale == "posix" {
            Charset::Ascii
        } else {
            Charset::Unspecified
        }
    }
}

pub fn detect_capabilities() -> TerminalCapabilities {
    capabilities(&EnvSnapshot::from_process(), std::io::stdout().is_terminal())
}

fn capabilities(env: &EnvSnapshot, is_tty: bool) -> TerminalCapabilities {
    let dumb = env
        .get("TERM")
        .is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
    // https://no-color.org and the BSD `CLICOLOR=0` convention
    let color_disabled = env.is_set("NO_COLOR") || env.get("CLICOLOR") == Some("0");

    TerminalCapabilities {
        is_tty,
        supports_color: is_tty && !dumb && !color_disabled,
        supports_unicode: !dumb && env.charset() != Charset::Ascii,
        is_ci: CI_VARS.iter().any(|key| env.is_set(key)),
    }
}
