// src/services/extract/rules.rs

//! Named extraction rules over award paragraph text.
//!
//! Each rule is independent: it matches its own pattern against the raw
//! paragraph and yields a field value, or nothing when the pattern is
//! absent. No rule depends on another rule's success, so each is testable
//! in isolation. Regexes compile once per process.

use std::sync::OnceLock;

use regex::Regex;

use crate::utils::text::{capitalize, title_case};

/// Marker appended to heuristically derived contract names. The synthesized
/// title is never authoritative.
pub const PRELIMINARY_SUFFIX: &str = " (PRELIM. DESC.)";

/// Contract names longer than this are truncated with an ellipsis.
const NAME_TRUNCATE_LEN: usize = 100;

/// A named rule producing one string field from paragraph text.
pub trait FieldRule {
    /// Apply the rule. `None` when the pattern is absent from the text.
    fn apply(&self, text: &str) -> Option<String>;
}

/// Contractor: the text from the paragraph start up to (not including) the
/// first comma.
pub struct ContractorRule;

impl FieldRule for ContractorRule {
    fn apply(&self, text: &str) -> Option<String> {
        let idx = text.find(',')?;
        if idx == 0 {
            return None;
        }
        Some(text[..idx].to_string())
    }
}

/// Description: the first `for ...`-bounded clause following the first
/// contract keyword, captured through the next sentence-ending period and
/// capitalized at its first letter.
pub struct DescriptionRule;

static DESCRIPTION_RE: OnceLock<Regex> = OnceLock::new();

impl FieldRule for DescriptionRule {
    fn apply(&self, text: &str) -> Option<String> {
        let re = DESCRIPTION_RE
            .get_or_init(|| Regex::new(r"(?:contract|agreement|award).*?for (.+?\.)").unwrap());
        let caps = re.captures(text)?;
        Some(capitalize(&caps[1]))
    }
}

/// Contract number: a PIID-shaped token (FAR 4.16) — one letter, five
/// alphanumerics, a two-digit year segment, one letter and a 4-8 digit
/// suffix, with optional hyphen separators. Normalized by stripping hyphens
/// and upper-casing.
pub struct ContractNumberRule;

static CONTRACT_NUMBER_RE: OnceLock<Regex> = OnceLock::new();

impl FieldRule for ContractNumberRule {
    fn apply(&self, text: &str) -> Option<String> {
        let re = CONTRACT_NUMBER_RE.get_or_init(|| {
            Regex::new(r"[a-zA-Z][a-zA-Z0-9]{5}-*[0-9]{2}-*[a-zA-Z]-*[0-9]{4,8}").unwrap()
        });
        let m = re.find(text)?;
        Some(m.as_str().trim().replace('-', "").to_uppercase())
    }
}

/// Dollar amount: the first currency token, preserved verbatim since the
/// report keeps display formatting.
pub struct DollarsRule;

static DOLLARS_RE: OnceLock<Regex> = OnceLock::new();

impl FieldRule for DollarsRule {
    fn apply(&self, text: &str) -> Option<String> {
        let re = DOLLARS_RE
            .get_or_init(|| Regex::new(r"\$(\d{1,3}(,\d{3})*|\d+)(\.\d{2})?").unwrap());
        re.find(text).map(|m| m.as_str().to_string())
    }
}

/// A literal marker scan for a business-status flag.
///
/// The single- and double-asterisk markers use their own distinct literals.
/// `",** "` does not contain `",* "`, so the two flags stay independent: a
/// woman-owned paragraph does not also read as small-business.
pub struct MarkerRule {
    literal: &'static str,
}

impl MarkerRule {
    /// True when the marker literal occurs anywhere in the paragraph.
    pub fn is_present(&self, text: &str) -> bool {
        text.contains(self.literal)
    }
}

/// Small-business marker: comma, one asterisk, space after the name region.
pub const SMALL_BUSINESS: MarkerRule = MarkerRule { literal: ",* " };

/// Woman-owned small-business marker: comma, two asterisks, space.
pub const WOMAN_OWNED: MarkerRule = MarkerRule { literal: ",** " };

static CONTRACT_NAME_RE: OnceLock<Regex> = OnceLock::new();

/// Derive the preliminary contract name from a description: strip leading
/// bare article/conjunction tokens and trailing periods, title-case,
/// truncate past 100 characters, and always append the preliminary-title
/// suffix.
///
/// An empty description therefore yields the bare suffix. That reproduces
/// observed source behavior; see DESIGN.md.
pub fn contract_name_from(description: &str) -> String {
    let re = CONTRACT_NAME_RE
        .get_or_init(|| Regex::new(r"(?i)^((?:the|or|an|a)*\s+)*(.+)\.+$").unwrap());

    let mut name = match re.captures(description) {
        Some(caps) => title_case(&caps[2]),
        None => String::new(),
    };

    if name.chars().count() >= NAME_TRUNCATE_LEN {
        name = name.chars().take(NAME_TRUNCATE_LEN).collect::<String>() + "...";
    }
    name + PRELIMINARY_SUFFIX
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACME: &str =
        "Acme Corp., Arlington, Va., is awarded a $1,000,000 contract for widget parts.* ";

    #[test]
    fn test_contractor_stops_at_first_comma() {
        assert_eq!(ContractorRule.apply(ACME).as_deref(), Some("Acme Corp."));
    }

    #[test]
    fn test_contractor_missing_comma_yields_none() {
        assert!(ContractorRule.apply("No commas here at all").is_none());
        assert!(ContractorRule.apply(", leading comma").is_none());
    }

    #[test]
    fn test_description_captures_first_for_clause() {
        assert_eq!(DescriptionRule.apply(ACME).as_deref(), Some("Widget parts."));
    }

    #[test]
    fn test_description_matches_any_contract_keyword() {
        let agreement = "Acme Corp., Arlington, Va., signed an agreement for spare engines. More.";
        assert_eq!(
            DescriptionRule.apply(agreement).as_deref(),
            Some("Spare engines.")
        );
    }

    #[test]
    fn test_description_absent_keyword_yields_none() {
        assert!(DescriptionRule
            .apply("Acme Corp., Arlington, Va., received $5.")
            .is_none());
    }

    #[test]
    fn test_contract_number_normalizes_hyphens_and_case() {
        let text = "The contract number is W912DY-23-D-0001 for this award.";
        assert_eq!(
            ContractNumberRule.apply(text).as_deref(),
            Some("W912DY23D0001")
        );
    }

    #[test]
    fn test_contract_number_without_hyphens() {
        let text = "under contract n0001923c0004 with the Navy";
        assert_eq!(
            ContractNumberRule.apply(text).as_deref(),
            Some("N0001923C0004")
        );
    }

    #[test]
    fn test_contract_number_absent_yields_none() {
        assert!(ContractNumberRule.apply("no identifiers here").is_none());
    }

    #[test]
    fn test_dollars_first_token_verbatim() {
        assert_eq!(DollarsRule.apply(ACME).as_deref(), Some("$1,000,000"));
        assert_eq!(
            DollarsRule
                .apply("a $7,500,000.25 modification and a later $1 fee")
                .as_deref(),
            Some("$7,500,000.25")
        );
    }

    #[test]
    fn test_small_business_marker() {
        assert!(SMALL_BUSINESS.is_present("Acme Corp.,* Arlington, Va., is awarded..."));
        // A trailing ".* " alone is not the marker.
        assert!(!SMALL_BUSINESS.is_present(ACME));
    }

    #[test]
    fn test_flags_are_independent_on_double_asterisk() {
        let woman_owned = "Acme Corp.,** Arlington, Va., is awarded a contract for parts.";
        assert!(WOMAN_OWNED.is_present(woman_owned));
        assert!(!SMALL_BUSINESS.is_present(woman_owned));
    }

    #[test]
    fn test_contract_name_strips_articles_and_periods() {
        assert_eq!(
            contract_name_from("The widget parts."),
            format!("Widget Parts{PRELIMINARY_SUFFIX}")
        );
        assert_eq!(
            contract_name_from("Widget parts."),
            format!("Widget Parts{PRELIMINARY_SUFFIX}")
        );
    }

    #[test]
    fn test_contract_name_truncates_long_descriptions() {
        let long = format!("{}.", "x".repeat(150));
        let name = contract_name_from(&long);
        assert!(name.starts_with(&format!("X{}", "x".repeat(99))));
        assert!(name.contains("..."));
        assert!(name.ends_with(PRELIMINARY_SUFFIX));
        assert_eq!(name.chars().count(), 100 + 3 + PRELIMINARY_SUFFIX.chars().count());
    }

    #[test]
    fn test_empty_description_yields_bare_suffix() {
        // Known source quirk, reproduced deliberately.
        assert_eq!(contract_name_from(""), PRELIMINARY_SUFFIX);
    }
}
