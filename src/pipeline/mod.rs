// src/pipeline/mod.rs

//! Pipeline entry points.
//!
//! - `run_report`: assemble a report for a date range and write the artifact

pub mod report;

pub use report::run_report;
