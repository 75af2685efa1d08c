//! Custom assertion macros for CLI tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

/// Assert that output (stdout or stderr) contains expected pattern.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "placed into card.js");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that a script holds exactly one placed block.
///
/// # Example
/// ```ignore
/// assert_single_block!(env.read_script("card.js"));
/// ```
#[macro_export]
macro_rules! assert_single_block {
    ($content:expr) => {
        let content: &str = &$content;
        assert_eq!(
            content.matches($crate::common::START_MARKER).count(),
            1,
            "Expected exactly one start marker in:\n{}",
            content
        );
        assert_eq!(
            content.matches($crate::common::END_MARKER).count(),
            1,
            "Expected exactly one end marker in:\n{}",
            content
        );
    };
}
