//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Mock)
//! - `discovery` - Finding html sources in the input tree

pub mod discovery;
pub mod fs;

// Re-export for convenience
pub use discovery::{discover_sources, is_source};
pub use fs::LocalFs;
