// src/output/xlsx.rs

//! Spreadsheet report writer.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::error::Result;
use crate::models::AwardRecord;
use crate::output::{ReportWriter, COLUMNS};

/// Writes the record collection as an `.xlsx` workbook with a single sheet
/// named after the filename stem.
pub struct XlsxReportWriter;

impl ReportWriter for XlsxReportWriter {
    fn write(&self, records: &[AwardRecord], path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        // Sheet name = filename stem (xlsx caps sheet names at 31 chars).
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let sheet_name: String = stem.chars().take(31).collect();
        if !sheet_name.is_empty() {
            worksheet.set_name(&sheet_name)?;
        }

        let bold = Format::new().set_bold();
        for (col, label) in COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *label, &bold)?;
        }

        for (i, record) in records.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet.write_string(row, 0, &record.id)?;
            worksheet.write_string(row, 1, &record.contract_name)?;
            worksheet.write_string(row, 2, &record.source_link)?;
            worksheet.write_string(row, 3, &record.award_date)?;
            worksheet.write_string(row, 4, &record.contract_number)?;
            worksheet.write_string(row, 5, &record.dollars_awarded)?;
            worksheet.write_string(row, 6, &record.service)?;
            worksheet.write_string(row, 7, &record.contractor)?;
            worksheet.write_boolean(row, 8, record.small_business)?;
            worksheet.write_boolean(row, 9, record.woman_owned_small_business)?;
            worksheet.write_string(row, 10, &record.description)?;
        }

        workbook.save(path)?;
        Ok(())
    }
}
