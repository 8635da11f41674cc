// src/models/mod.rs

//! Domain models for the scraper application.

mod award;
mod block;
mod config;

pub use award::AwardRecord;
pub use block::{Announcement, BlockKind, TextBlock};
pub use config::{Config, FetchConfig, LoggingConfig, OutputConfig, SourceConfig};
