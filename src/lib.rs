// src/lib.rs

//! Award Scraper Library
//!
//! Turns defense.gov contract-announcement pages into structured
//! [`AwardRecord`](models::AwardRecord)s and writes them out as a report.

pub mod error;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod services;
pub mod utils;
