//! `[site]` section configuration.
//!
//! Site identity and presentation settings. These values are handed to the
//! site-generation engine verbatim; `extra` carries free-form theme
//! variables without schema checks.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "My Blog"
//! author = "Alice"
//! url = "https://alice.example.com"
//! relative_urls = true
//! timezone = "America/New_York"
//! language = "en"
//! summary_max_length = 10
//!
//! [site.extra]
//! github_url = "https://github.com/alice"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Site identity and link-generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title.
    pub title: String,

    /// Author name.
    pub author: String,

    /// Site URL; base for absolute link generation (e.g. "https://example.com").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Generate document-relative links instead of absolute ones.
    /// The publish overlay typically turns this off.
    pub relative_urls: bool,

    /// IANA timezone name for date formatting (e.g. "America/New_York").
    pub timezone: String,

    /// Language code (e.g. "en", "zh-Hans").
    pub language: String,

    /// Maximum summary length in words.
    pub summary_max_length: usize,

    /// Free-form theme variables, passed through untouched.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, toml::Value>,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            url: None,
            relative_urls: true,
            timezone: "America/New_York".into(),
            language: "en".into(),
            summary_max_length: 10,
            extra: BTreeMap::new(),
        }
    }
}

impl SiteSectionConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - If `feeds_enabled`, `url` must be set (feeds emit absolute links)
    /// - If `relative_urls` is off, `url` must be set
    /// - `url` must be a valid URL with scheme (e.g. `https://example.com`)
    /// - `summary_max_length` must be positive
    /// - `timezone` and `language` must be non-empty
    pub fn validate(&self, feeds_enabled: bool, diag: &mut ConfigDiagnostics) {
        if feeds_enabled && self.url.is_none() {
            diag.error_with_hint(
                FieldPath::new("site.url"),
                "feeds are enabled but site.url is not configured",
                "set site.url, e.g.: \"https://example.com\"",
            );
        }

        if !self.relative_urls && self.url.is_none() {
            diag.error_with_hint(
                FieldPath::new("site.url"),
                "site.relative_urls is off but site.url is not configured",
                "set site.url so absolute links have a base",
            );
        }

        // URL format check using url crate for strict validation
        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    // Must be http or https
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            FieldPath::new("site.url"),
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    // Must have a valid host
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            FieldPath::new("site.url"),
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        FieldPath::new("site.url"),
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }

        if self.summary_max_length == 0 {
            diag.error(
                FieldPath::new("site.summary_max_length"),
                "must be a positive integer",
            );
        }

        if self.timezone.trim().is_empty() {
            diag.error(FieldPath::new("site.timezone"), "must not be empty");
        }
        if self.language.trim().is_empty() {
            diag.error(FieldPath::new("site.language"), "must not be empty");
        }
    }
}
