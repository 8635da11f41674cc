// src/output/json.rs

//! JSON report writer.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::Result;
use crate::models::AwardRecord;
use crate::output::ReportWriter;

/// Writes the record collection as a pretty-printed JSON array, field names
/// matching the report column labels.
pub struct JsonReportWriter;

impl ReportWriter for JsonReportWriter {
    fn write(&self, records: &[AwardRecord], path: &Path) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), records)?;
        Ok(())
    }
}
