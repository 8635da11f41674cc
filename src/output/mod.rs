// src/output/mod.rs

//! Report writers.
//!
//! A finished run hands its flat record collection to a [`ReportWriter`].
//! The spreadsheet writer is the default artifact; the JSON writer serves
//! downstream tooling.

pub mod json;
pub mod xlsx;

use std::path::Path;

use crate::error::Result;
use crate::models::AwardRecord;

pub use json::JsonReportWriter;
pub use xlsx::XlsxReportWriter;

/// Report column labels, in output order.
pub const COLUMNS: [&str; 11] = [
    "index",
    "contract name",
    "link",
    "award date",
    "contract number",
    "dollars awarded",
    "service",
    "contractor",
    "small business",
    "woman owned small business",
    "description",
];

/// Persists a record collection, one row per record, columns in
/// [`COLUMNS`] order.
pub trait ReportWriter {
    fn write(&self, records: &[AwardRecord], path: &Path) -> Result<()>;
}

/// Selectable report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Xlsx,
    Json,
}

impl ReportFormat {
    /// File extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Xlsx => "xlsx",
            ReportFormat::Json => "json",
        }
    }

    /// The writer implementation for the format.
    pub fn writer(&self) -> Box<dyn ReportWriter> {
        match self {
            ReportFormat::Xlsx => Box::new(XlsxReportWriter),
            ReportFormat::Json => Box::new(JsonReportWriter),
        }
    }
}
