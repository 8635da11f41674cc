//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP fetch behavior settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Announcement source settings
    #[serde(default)]
    pub source: SourceConfig,

    /// Report output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.fetch.user_agent.trim().is_empty() {
            return Err(AppError::validation("fetch.user_agent is empty"));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(AppError::validation("fetch.timeout_secs must be > 0"));
        }
        if url::Url::parse(&self.source.listing_base_url).is_err() {
            return Err(AppError::validation(
                "source.listing_base_url is not a valid URL",
            ));
        }
        if regex::Regex::new(&self.source.article_link_pattern).is_err() {
            return Err(AppError::validation(
                "source.article_link_pattern is not a valid regex",
            ));
        }
        if scraper::Selector::parse(&self.source.body_selector).is_err() {
            return Err(AppError::validation(
                "source.body_selector is not a valid CSS selector",
            ));
        }
        Ok(())
    }
}

/// HTTP fetch behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Delay after each fetch, letting client-side rendering settle,
    /// in milliseconds
    #[serde(default = "defaults::settle_delay")]
    pub settle_delay_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            settle_delay_ms: defaults::settle_delay(),
        }
    }
}

/// Announcement source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base URL of the contract listing pages
    #[serde(default = "defaults::listing_base_url")]
    pub listing_base_url: String,

    /// Regex matched against anchor hrefs to find detail-page links
    #[serde(default = "defaults::article_link_pattern")]
    pub article_link_pattern: String,

    /// CSS selector for the main content container of a detail page
    #[serde(default = "defaults::body_selector")]
    pub body_selector: String,

    /// Boilerplate phrase stripped from listing link text before date parsing
    #[serde(default = "defaults::boilerplate_phrase")]
    pub boilerplate_phrase: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            listing_base_url: defaults::listing_base_url(),
            article_link_pattern: defaults::article_link_pattern(),
            body_selector: defaults::body_selector(),
            boilerplate_phrase: defaults::boilerplate_phrase(),
        }
    }
}

/// Report output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the report file is written to
    #[serde(default = "defaults::output_dir")]
    pub dir: String,

    /// Filename suffix, appended to today's date as the filename stem
    #[serde(default = "defaults::filename_suffix")]
    pub filename_suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: defaults::output_dir(),
            filename_suffix: defaults::filename_suffix(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level printed to the console
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    // Fetch defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; award-scraper/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn settle_delay() -> u64 {
        4000
    }

    // Source defaults
    pub fn listing_base_url() -> String {
        "https://www.defense.gov/News/Contracts".into()
    }
    pub fn article_link_pattern() -> String {
        r"https?://www\.defense\.gov/News/Contracts/Contract/Article/\d+/".into()
    }
    pub fn body_selector() -> String {
        "div.body".into()
    }
    pub fn boilerplate_phrase() -> String {
        "Contracts For".into()
    }

    // Output defaults
    pub fn output_dir() -> String {
        ".".into()
    }
    pub fn filename_suffix() -> String {
        "award_descriptions".into()
    }

    // Logging defaults
    pub fn log_level() -> String {
        "info".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.fetch.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_listing_url() {
        let mut config = Config::default();
        config.source.listing_base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_link_pattern() {
        let mut config = Config::default();
        config.source.article_link_pattern = "[unclosed".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_body_selector() {
        let mut config = Config::default();
        config.source.body_selector = "[[invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn deserialize_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[fetch]\ntimeout_secs = 5\n").unwrap();
        assert_eq!(config.fetch.timeout_secs, 5);
        assert_eq!(config.source.body_selector, "div.body");
        assert_eq!(config.output.filename_suffix, "award_descriptions");
    }
}
