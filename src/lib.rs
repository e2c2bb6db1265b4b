//! `co2-trend` library crate.
//!
//! The binary (`co2trend`) is a thin wrapper around this library so that the
//! load → extract → fit → emit pipeline is testable without spawning
//! processes.
//!
//! The tool reads a JSON history of CO₂ measurement records, fits an
//! ordinary-least-squares line to (record index, cumulative value) pairs, and
//! prints a small JavaScript snippet with the fitted model on stdout.

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod report;
