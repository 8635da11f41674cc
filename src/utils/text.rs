// src/utils/text.rs

//! Small text-shaping helpers shared by the extraction rules.

/// Title-case a string: the first letter of every run of alphabetic
/// characters is upper-cased, the rest lower-cased. Word boundaries are any
/// non-alphabetic character, so `"3rd"` becomes `"3Rd"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Capitalize the first letter of a string, lower-casing the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}
