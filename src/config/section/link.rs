//! Shared (label, URL) link entry type for menu and social lists.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// An ordered navigation or footer link.
///
/// Accepts two TOML spellings:
///
/// ```toml
/// items = [["Home", "/"], { label = "Posts", url = "/posts" }]
/// ```
///
/// The two-element array form is the compact spelling; the inline-table
/// form reads better for long lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkEntry {
    /// Two-element form: `["github", "https://github.com/alice"]`.
    Pair(String, String),
    /// Inline-table form: `{ label = "github", url = "https://github.com/alice" }`.
    Detailed { label: String, url: String },
}

impl LinkEntry {
    pub fn label(&self) -> &str {
        match self {
            Self::Pair(label, _) => label,
            Self::Detailed { label, .. } => label,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Pair(_, url) => url,
            Self::Detailed { url, .. } => url,
        }
    }
}

/// Validate a link list: every entry needs a non-empty label and URL.
pub(crate) fn validate_links(
    links: &[LinkEntry],
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    let total = links.len();
    for (idx, link) in links.iter().enumerate() {
        // Only show index if there are multiple entries
        let prefix = if total > 1 {
            format!("[{idx}] ")
        } else {
            String::new()
        };
        if link.label().trim().is_empty() {
            diag.error(field, format!("{prefix}entry has an empty label"));
        }
        if link.url().trim().is_empty() {
            diag.error(
                field,
                format!("{prefix}entry '{}' has an empty URL", link.label()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Deserialize)]
    struct Wrap {
        links: Vec<LinkEntry>,
    }

    #[test]
    fn test_pair_form() {
        let wrap: Wrap =
            toml::from_str(r#"links = [["github", "https://github.com/alice"]]"#).unwrap();
        assert_eq!(wrap.links.len(), 1);
        assert_eq!(wrap.links[0].label(), "github");
        assert_eq!(wrap.links[0].url(), "https://github.com/alice");
    }

    #[test]
    fn test_detailed_form() {
        let wrap: Wrap =
            toml::from_str(r#"links = [{ label = "Posts", url = "/posts" }]"#).unwrap();
        assert_eq!(wrap.links[0].label(), "Posts");
        assert_eq!(wrap.links[0].url(), "/posts");
    }

    #[test]
    fn test_mixed_forms() {
        let wrap: Wrap = toml::from_str(
            r#"links = [["Home", "/"], { label = "Posts", url = "/posts" }]"#,
        )
        .unwrap();
        assert_eq!(wrap.links[0].label(), "Home");
        assert_eq!(wrap.links[1].label(), "Posts");
    }

    #[test]
    fn test_empty_label_rejected() {
        let links = vec![LinkEntry::Pair(String::new(), "/".into())];
        let mut diag = ConfigDiagnostics::new();
        validate_links(&links, FieldPath::new("menu.items"), &mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_empty_url_rejected() {
        let links = vec![
            LinkEntry::Pair("Home".into(), "/".into()),
            LinkEntry::Detailed {
                label: "Posts".into(),
                url: "  ".into(),
            },
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_links(&links, FieldPath::new("social.links"), &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("Posts"));
    }

    #[test]
    fn test_valid_links_pass() {
        let links = vec![
            LinkEntry::Pair("Home".into(), "/".into()),
            LinkEntry::Pair("Posts".into(), "/posts".into()),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_links(&links, FieldPath::new("menu.items"), &mut diag);
        assert!(diag.is_empty());
    }
}
