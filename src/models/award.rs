//! Award record data structure.

use serde::{Deserialize, Serialize};

/// One structured contract announcement extracted from an award paragraph.
///
/// Every field other than `id` and `award_date` defaults to empty/false when
/// its pattern is absent from the source text; nothing is ever null.
/// Serde names match the report column labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AwardRecord {
    /// Opaque unique token, fresh per paragraph
    #[serde(rename = "index")]
    pub id: String,

    /// Heuristically synthesized title, always suffixed as preliminary
    #[serde(rename = "contract name")]
    pub contract_name: String,

    /// URL of the announcement page the record came from
    #[serde(rename = "link")]
    pub source_link: String,

    /// Canonical award date (MM/DD/YYYY)
    #[serde(rename = "award date")]
    pub award_date: String,

    /// Normalized PIID-style contract number (hyphens stripped, upper-cased)
    #[serde(rename = "contract number")]
    pub contract_number: String,

    /// First currency token, verbatim with its display formatting
    #[serde(rename = "dollars awarded")]
    pub dollars_awarded: String,

    /// Last-seen service section header (e.g. "NAVY")
    #[serde(rename = "service")]
    pub service: String,

    /// Text preceding the first comma of the paragraph
    #[serde(rename = "contractor")]
    pub contractor: String,

    /// Set when the small-business marker follows the business name
    #[serde(rename = "small business")]
    pub small_business: bool,

    /// Set when the woman-owned small-business marker is present
    #[serde(rename = "woman owned small business")]
    pub woman_owned_small_business: bool,

    /// First "for ..."-bounded clause after the contract keyword
    #[serde(rename = "description")]
    pub description: String,
}

impl AwardRecord {
    /// Create a record carrying only caller context, all extracted fields
    /// at their empty defaults.
    pub fn new(id: String, source_link: &str, award_date: &str, service: &str) -> Self {
        Self {
            id,
            contract_name: String::new(),
            source_link: source_link.to_string(),
            award_date: award_date.to_string(),
            contract_number: String::new(),
            dollars_awarded: String::new(),
            service: service.to_string(),
            contractor: String::new(),
            small_business: false,
            woman_owned_small_business: false,
            description: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_are_empty() {
        let record = AwardRecord::new(
            "202301-AB000010".to_string(),
            "https://example.com/article/1/",
            "03/03/2023",
            "NAVY",
        );
        assert_eq!(record.award_date, "03/03/2023");
        assert_eq!(record.service, "NAVY");
        assert!(record.contractor.is_empty());
        assert!(record.description.is_empty());
        assert!(!record.small_business);
        assert!(!record.woman_owned_small_business);
    }

    #[test]
    fn test_serialize_uses_column_labels() {
        let record = AwardRecord::new(
            "202301-AB000010".to_string(),
            "https://example.com/article/1/",
            "03/03/2023",
            "",
        );
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("award date").is_some());
        assert!(json.get("woman owned small business").is_some());
        assert!(json.get("awardDate").is_none());
    }
}
