//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (pairing, splice, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PlaceUseCase` - Places every source's html into its paired script file
//! - `watch` - Re-runs placement for sources that change on disk

pub mod place;
pub mod watch;

pub use place::{FileReport, Outcome, PlaceOptions, PlaceReport, PlaceUseCase};
pub use watch::{
    compute_content_hash, watch, ContentHashes, WatchEvent, WatchOptions, WatchSession,
    WatcherState, DEBOUNCE_MS,
};
