//! Domain Layer
//!
//! Pure logic without I/O:
//!
//! - `block` - renders the generated JavaScript block
//! - `splice` - places a block between the sentinel markers of a document
//! - `pairing` - maps an html source onto its script destination
//! - `ports` - the file system interface the application layer talks to

pub mod block;
pub mod pairing;
pub mod ports;
pub mod splice;

pub use block::{format_timestamp, BlockRenderer};
pub use pairing::{destination_for, Placement, SourceFilter};
pub use splice::{find_block, splice, SpliceKind, Spliced};
