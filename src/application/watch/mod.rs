//! Watch Use Case
//!
//! Keeps script files in step with their html while the sources are edited.
//! It orchestrates:
//! - File system monitoring (via `notify` crate)
//! - Debouncing (100ms default)
//! - Content hashing, so saves that do not change a file are ignored
//! - Placement of each changed source through `PlaceUseCase`
//!
//! ## Usage
//!
//! ```ignore
//! let options = WatchOptions::new(place_options);
//! let session = WatchSession::start(&options)?;
//! use_case.run(&options.place)?; // edits from here on are queued
//! session.run(&use_case, running, |event| { ... })?;
//! ```

mod cache;
mod event;
mod sync;


pub use cache::{compute_content_hash, ContentHashes};
pub use event::{WatchEvent, WatchOptions, WatcherState, DEBOUNCE_MS};
pub use sync::{watch, WatchSession};
