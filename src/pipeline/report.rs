// src/pipeline/report.rs

//! Report generation pipeline.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::error::Result;
use crate::models::Config;
use crate::output::ReportFormat;
use crate::services::ReportAssembler;
use crate::utils::http::HttpFetcher;
use crate::utils::log;

/// Run the full report pipeline: discover announcement pages in the date
/// range, extract award records, and write the report artifact. Returns
/// the path of the written file.
pub async fn run_report(
    config: &Config,
    start: NaiveDate,
    end: Option<NaiveDate>,
    format: ReportFormat,
) -> Result<PathBuf> {
    log::header("Contract Award Report");
    config.validate()?;

    log::step(1, 2, "Extract - Scanning listings and parsing announcements");
    let fetcher = HttpFetcher::new(&config.fetch)?;
    let mut assembler = ReportAssembler::new(config.source.clone(), fetcher)?;
    let outcome = assembler.generate(start, end).await?;

    log::step(2, 2, "Write - Saving the report");
    let path = report_path(&config.output.dir, &config.output.filename_suffix, format);
    format.writer().write(&outcome.records, &path)?;

    log::summary(
        "Report complete",
        &[
            ("Records", outcome.records.len().to_string()),
            ("Listing pages scanned", outcome.listing_pages.to_string()),
            ("Announcement pages parsed", outcome.detail_pages.to_string()),
            ("Report file", path.display().to_string()),
        ],
    );
    log::success("Report written");

    Ok(path)
}

/// Artifact path: `{dir}/{today YYYY-MM-DD}_{suffix}.{ext}`.
fn report_path(dir: &str, suffix: &str, format: ReportFormat) -> PathBuf {
    let stem = format!("{}_{}", Local::now().format("%Y-%m-%d"), suffix);
    Path::new(dir).join(format!("{stem}.{}", format.extension()))
}
