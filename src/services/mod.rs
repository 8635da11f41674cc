// src/services/mod.rs

//! Core extraction services.
//!
//! - `ident`: collision-resistant record identifiers
//! - `dates`: display-date normalization
//! - `link_index`: listing-page link discovery
//! - `segment`: detail-page body segmentation
//! - `extract`: field extraction rules over award paragraphs
//! - `report`: report assembly across a date range

pub mod dates;
pub mod extract;
pub mod ident;
pub mod link_index;
pub mod report;
pub mod segment;

pub use extract::FieldExtractor;
pub use ident::IdGenerator;
pub use report::ReportAssembler;
