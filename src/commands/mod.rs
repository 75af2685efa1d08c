pub mod place;
pub mod watch;
