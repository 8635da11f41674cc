// src/services/link_index.rs

//! Listing-page link discovery.
//!
//! A listing page carries one anchor per announcement date, pointing at the
//! detail page for that date. The builder collects them into a date-keyed
//! index; an empty index signals the end of pagination to the assembler.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use scraper::{Html, Selector};

use crate::services::dates::normalize_date;
use crate::utils::log;

/// Cached anchor selector, compiled once.
static ANCHOR_SELECTOR: OnceLock<Selector> = OnceLock::new();

fn anchor_selector() -> &'static Selector {
    ANCHOR_SELECTOR.get_or_init(|| Selector::parse("a[href]").expect("static selector"))
}

/// Build the date → detail-page URL index from one listing page.
///
/// Anchors whose href matches `link_pattern` are treated as detail links;
/// the visible link text is the raw display date. Entries whose date cannot
/// be normalized are dropped with a warning. Duplicate dates resolve
/// last-write-wins, since listings may repeat across result pages.
pub fn build_link_index(
    markup: &str,
    link_pattern: &Regex,
    boilerplate_phrase: &str,
) -> BTreeMap<NaiveDate, String> {
    let document = Html::parse_document(markup);
    let mut index = BTreeMap::new();

    for anchor in document.select(anchor_selector()) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if !link_pattern.is_match(href) {
            continue;
        }

        let link_text: String = anchor.text().collect();
        match normalize_date(&link_text, boilerplate_phrase) {
            Ok(date) => {
                index.insert(date, href.to_string());
            }
            Err(e) => {
                log::warn(&format!("Skipping link '{}': {}", link_text.trim(), e));
            }
        }
    }

    index
}
