//! Trend fitting.
//!
//! Responsibilities:
//!
//! - turn history records into (index, value) observations
//! - fit the ordinary-least-squares line through them

pub mod extract;
pub mod fitter;

pub use extract::*;
pub use fitter::*;
