// src/main.rs

//! Award Scraper CLI
//!
//! Prompts for a date range (or takes it from flags) and writes a report of
//! structured contract announcements for that range.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use clap::Parser;

use award_scraper::error::Result;
use award_scraper::models::Config;
use award_scraper::output::ReportFormat;
use award_scraper::pipeline::run_report;
use award_scraper::utils::log;

/// CLI Arguments
#[derive(Parser, Debug)]
#[command(
    name = "award-scraper",
    version,
    about = "Scrapes defense.gov contract announcements into a spreadsheet report"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: String,

    /// Start of the date range (YYYY-MM-DD); prompted for when omitted
    #[arg(short, long)]
    start_date: Option<NaiveDate>,

    /// End of the date range (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    end_date: Option<NaiveDate>,

    /// Report output format
    #[arg(long, value_enum, default_value = "xlsx")]
    format: ReportFormat,

    /// Directory the report is written to (overrides config)
    #[arg(short, long)]
    output: Option<String>,

    /// Only print warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

/// Initialize the `log` facade for library-level warnings.
fn init_logging(quiet: bool) {
    let level = if quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    let mut config = Config::load_or_default(&cli.config);
    if let Some(dir) = cli.output {
        config.output.dir = dir;
    }

    let level = if cli.quiet { "warn" } else { &config.logging.level };
    log::init(level);

    let start = match cli.start_date {
        Some(date) => date,
        None => prompt_start_date()?,
    };
    let end = match cli.end_date {
        Some(date) => Some(date),
        None if cli.start_date.is_some() => None,
        None => prompt_end_date()?,
    };

    run_report(&config, start, end, cli.format).await?;

    Ok(())
}

/// Prompt for the required start date, re-prompting on invalid input.
fn prompt_start_date() -> Result<NaiveDate> {
    loop {
        match read_date_line("(Required) Start Date \"YYYY-MM-DD\": ")? {
            Some(date) => return Ok(date),
            None => println!("This is the incorrect date string format. It should be YYYY-MM-DD"),
        }
    }
}

/// Prompt for the optional end date; an empty line means "use today".
fn prompt_end_date() -> Result<Option<NaiveDate>> {
    loop {
        let mut input = String::new();
        print!("(Optional) End Date \"YYYY-MM-DD\": ");
        io::stdout().flush()?;
        io::stdin().lock().read_line(&mut input)?;

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        match parse_cli_date(trimmed) {
            Some(date) => return Ok(Some(date)),
            None => println!("This is the incorrect date string format. It should be YYYY-MM-DD"),
        }
    }
}

fn read_date_line(prompt: &str) -> Result<Option<NaiveDate>> {
    let mut input = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    io::stdin().lock().read_line(&mut input)?;
    Ok(parse_cli_date(input.trim()))
}

fn parse_cli_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}
