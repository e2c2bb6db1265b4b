//! File input: reading the history JSON.

pub mod history;

pub use history::*;
