//! Place Use Case
//!
//! For every html source:
//! 1. Pair it with its script file in the output tree
//! 2. Render the placed block
//! 3. Splice the block into the script file
//! 4. Write the script file back (unless dry run or unchanged)
//!
//! Per-file problems are recorded in the report; only an unusable input
//! directory aborts the run.

mod options;
mod report;
mod use_case;

pub use options::{PlaceOptions, DEFAULT_TOOL_NAME};
pub use report::{FileReport, Outcome, PlaceReport};
pub use use_case::PlaceUseCase;
