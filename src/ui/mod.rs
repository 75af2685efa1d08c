//! Terminal rendering for the command line

pub mod blocks;
pub mod components;
pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
