// src/services/dates.rs

//! Display-date normalization.
//!
//! Listing links label each announcement page with a loosely formatted
//! display date such as `"Contracts For March 3rd, 2023"`, sometimes with a
//! leading weekday. Normalization strips the boilerplate and parses the
//! remainder into a calendar date used as the record key and field value.

use chrono::NaiveDate;

use crate::error::{AppError, Result};
use crate::utils::text::title_case;

/// Canonical display format for award dates.
const CANONICAL_FORMAT: &str = "%m/%d/%Y";

/// Strip boilerplate from a raw display date: title-case, remove the
/// boilerplate phrase and all periods, trim.
///
/// Idempotent on canonical output: a string already in `MM/DD/YYYY` form
/// passes through unchanged.
pub fn strip_boilerplate(raw: &str, phrase: &str) -> String {
    title_case(raw)
        .replace(phrase, "")
        .replace('.', "")
        .trim()
        .to_string()
}

/// Normalize a raw display date into a calendar date.
///
/// Accepts `"<Month> <Day>(st|nd|rd|th), <Year>"` with an optional leading
/// weekday token and the usual listing boilerplate. Fails with a parse error
/// when the month abbreviation is unrecognized or the tokens do not form a
/// valid date; callers log and skip the link entry.
pub fn normalize_date(raw: &str, phrase: &str) -> Result<NaiveDate> {
    let stripped = strip_boilerplate(raw, phrase);
    let tokens: Vec<&str> = stripped.split_whitespace().collect();

    let (month_token, day_token, year_token) = match tokens.len() {
        3 => (tokens[0], tokens[1], tokens[2]),
        // Leading weekday ("Monday, March 3rd, 2023")
        4 => (tokens[1], tokens[2], tokens[3]),
        _ => {
            return Err(AppError::parse(
                "award date",
                format!("unexpected token count in '{stripped}'"),
            ))
        }
    };

    let month: String = title_case(month_token).chars().take(3).collect();
    let day: String = day_token.chars().filter(|c| c.is_ascii_digit()).collect();
    let year: String = year_token.chars().filter(|c| c.is_ascii_digit()).collect();

    NaiveDate::parse_from_str(&format!("{month} {day}, {year}"), "%b %d, %Y")
        .map_err(|e| AppError::parse("award date", format!("'{raw}': {e}")))
}

/// Render a date in the canonical `MM/DD/YYYY` display format.
pub fn canonical(date: NaiveDate) -> String {
    date.format(CANONICAL_FORMAT).to_string()
}
