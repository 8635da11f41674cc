// src/services/extract/mod.rs

//! Field extraction over award paragraphs.
//!
//! One paragraph produces one [`AwardRecord`]. Rules apply in a fixed
//! declared order but never depend on each other; a failed pattern leaves
//! its field at the empty default and never aborts record construction.

pub mod rules;

use crate::models::AwardRecord;
use crate::services::ident::IdGenerator;

use self::rules::{
    contract_name_from, ContractNumberRule, ContractorRule, DescriptionRule, DollarsRule,
    FieldRule, SMALL_BUSINESS, WOMAN_OWNED,
};

/// Applies the extraction rules to award paragraphs, generating a fresh
/// identifier per record.
pub struct FieldExtractor {
    ids: IdGenerator,
}

impl FieldExtractor {
    pub fn new() -> Self {
        Self {
            ids: IdGenerator::new(),
        }
    }

    /// Extract a structured record from one award paragraph.
    ///
    /// `service`, `source_link` and `award_date` are caller context passed
    /// through unchanged. Every rule fails soft: a record with only those
    /// fields and a fresh id is valid, if low-value, output.
    pub fn extract(
        &mut self,
        paragraph: &str,
        service: &str,
        source_link: &str,
        award_date: &str,
    ) -> AwardRecord {
        let mut record =
            AwardRecord::new(self.ids.generate(), source_link, award_date, service);

        // Declared rule order; each rule is independent of the others.
        if let Some(contractor) = ContractorRule.apply(paragraph) {
            record.contractor = contractor;
        }
        record.small_business = SMALL_BUSINESS.is_present(paragraph);
        record.woman_owned_small_business = WOMAN_OWNED.is_present(paragraph);
        if let Some(description) = DescriptionRule.apply(paragraph) {
            record.description = description;
        }
        record.contract_name = contract_name_from(&record.description);
        if let Some(number) = ContractNumberRule.apply(paragraph) {
            record.contract_number = number;
        }
        if let Some(dollars) = DollarsRule.apply(paragraph) {
            record.dollars_awarded = dollars;
        }

        record
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}
