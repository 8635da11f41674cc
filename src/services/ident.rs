// src/services/ident.rs

//! Record identifier generation.

use chrono::Local;
use rand::rngs::ThreadRng;
use rand::Rng;

/// Generates sortable, collision-resistant record identifiers.
///
/// Format: `{YYYYMM}-{two random uppercase letters}{six-digit zero-padded
/// number in [10, 999999]}`, e.g. `202303-QX000412`. Uniqueness is
/// probabilistic only; at report volumes (thousands of records per run)
/// collisions are not observed.
pub struct IdGenerator {
    rng: ThreadRng,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }

    /// Generate a fresh identifier stamped with the current year and month.
    pub fn generate(&mut self) -> String {
        let prefix = Local::now().format("%Y%m");
        let letters: String = (0..2)
            .map(|_| self.rng.random_range(b'A'..=b'Z') as char)
            .collect();
        let number: u32 = self.rng.random_range(10..=999_999);
        format!("{prefix}-{letters}{number:06}")
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_pattern() -> regex::Regex {
        regex::Regex::new(r"^\d{6}-[A-Z]{2}\d{6}$").unwrap()
    }

    #[test]
    fn test_generate_matches_schema() {
        let mut ids = IdGenerator::new();
        let pattern = id_pattern();
        for _ in 0..1000 {
            let id = ids.generate();
            assert!(pattern.is_match(&id), "unexpected id shape: {id}");
        }
    }

    #[test]
    fn test_numeric_suffix_is_zero_padded() {
        // Small sampled values must render as six digits, e.g. 10 -> "000010".
        let rendered = format!("{:06}", 10u32);
        assert_eq!(rendered, "000010");

        let mut ids = IdGenerator::new();
        let id = ids.generate();
        let suffix = &id[id.len() - 6..];
        assert_eq!(suffix.len(), 6);
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_prefix_is_current_year_month() {
        let mut ids = IdGenerator::new();
        let id = ids.generate();
        let expected = Local::now().format("%Y%m").to_string();
        assert!(id.starts_with(&expected));
    }

    #[test]
    fn test_no_collisions_at_test_volume() {
        let mut ids = IdGenerator::new();
        let generated: std::collections::HashSet<String> =
            (0..10_000).map(|_| ids.generate()).collect();
        // A handful of collisions would be tolerable; zero is the norm.
        assert!(generated.len() > 9_990);
    }
}
