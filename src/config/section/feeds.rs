//! `[feeds]` section configuration.
//!
//! Output locations for generated syndication feeds. Every key is optional;
//! an unset key disables that feed. The base profile ships with all feeds
//! disabled and the publish overlay turns them on.
//!
//! Per-entity feeds (category, author, translation) take a path template
//! with a `{slug}` placeholder:
//!
//! ```toml
//! [feeds]
//! all_atom = "feeds/all.atom.xml"
//! category_atom = "feeds/{slug}.atom.xml"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A feed output path, possibly carrying a `{slug}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedTemplate(String);

impl FeedTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the template carries a `{slug}` placeholder.
    pub fn has_slug(&self) -> bool {
        self.0.contains("{slug}")
    }

    /// Substitute `{slug}` and return the concrete output path.
    pub fn expand(&self, slug: &str) -> PathBuf {
        PathBuf::from(self.0.replace("{slug}", slug))
    }

    /// Validate the template.
    ///
    /// # Checks
    /// - No unresolved `{...}` placeholders once `{slug}` is substituted
    /// - Expanded path is relative
    /// - Expanded path has no empty segments
    pub fn validate(&self, field: FieldPath, diag: &mut ConfigDiagnostics) {
        let expanded = self.0.replace("{slug}", "item");

        if expanded.contains('{') || expanded.contains('}') {
            diag.error_with_hint(
                field,
                format!("unresolved placeholder in '{}'", self.0),
                "only {slug} is recognized",
            );
            return;
        }

        if Path::new(&expanded).is_absolute() {
            diag.error(
                field,
                format!("path '{}' must be relative to the output directory", self.0),
            );
            return;
        }

        if expanded.split('/').any(str::is_empty) {
            diag.error(field, format!("path '{}' has an empty segment", self.0));
        }
    }
}

/// Feed output settings. `None` disables the corresponding feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedsConfig {
    /// All-items Atom feed path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_atom: Option<FeedTemplate>,

    /// Per-category Atom feed path template (`{slug}` placeholder).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_atom: Option<FeedTemplate>,

    /// Per-translation Atom feed path template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_atom: Option<FeedTemplate>,

    /// Per-author Atom feed path template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_atom: Option<FeedTemplate>,

    /// Per-author RSS feed path template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_rss: Option<FeedTemplate>,
}

impl FeedsConfig {
    /// Whether any feed output is enabled.
    pub fn any_enabled(&self) -> bool {
        self.all_atom.is_some()
            || self.category_atom.is_some()
            || self.translation_atom.is_some()
            || self.author_atom.is_some()
            || self.author_rss.is_some()
    }

    /// All configured templates with their field paths.
    fn entries(&self) -> [(FieldPath, Option<&FeedTemplate>, bool); 5] {
        // Third element: whether the feed is per-entity and wants a {slug}
        [
            (FieldPath::new("feeds.all_atom"), self.all_atom.as_ref(), false),
            (
                FieldPath::new("feeds.category_atom"),
                self.category_atom.as_ref(),
                true,
            ),
            (
                FieldPath::new("feeds.translation_atom"),
                self.translation_atom.as_ref(),
                true,
            ),
            (
                FieldPath::new("feeds.author_atom"),
                self.author_atom.as_ref(),
                true,
            ),
            (
                FieldPath::new("feeds.author_rss"),
                self.author_rss.as_ref(),
                true,
            ),
        ]
    }

    /// Validate all configured feed templates.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, template, per_entity) in self.entries() {
            let Some(template) = template else { continue };
            template.validate(field, diag);

            if per_entity && !template.has_slug() {
                diag.hint(
                    field,
                    "no {slug} placeholder; every entity would share one file",
                );
            }
        }
    }
}
