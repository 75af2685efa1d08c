//! place-html - keeps html snippets embedded in their script files
//!
//! Every html file in an input directory is paired with the script file of
//! the same name in an output directory. The html is wrapped in a
//! `<template>` declaration and placed between two sentinel comments, either
//! once or every time the html changes on disk.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{
    watch, FileReport, Outcome, PlaceOptions, PlaceReport, PlaceUseCase, WatchEvent, WatchOptions,
    WatchSession,
};
pub use config::{Config, ConfigWarning};
pub use domain::{destination_for, find_block, splice, BlockRenderer, SpliceKind, Spliced};
pub use error::{PlaceError, PlaceResult};
pub use infrastructure::{discover_sources, LocalFs};
