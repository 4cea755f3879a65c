//! `[content]` section configuration.
//!
//! Input/output directory mapping for the site build.
//!
//! # Example
//!
//! ```toml
//! [content]
//! path = "content"            # Content source directory (relative to site root)
//! output = "output"           # Output directory for generated pages
//! article_paths = ["blog"]    # Article subdirectories (relative to `path`)
//! static_paths = ["images"]   # Static-asset subdirectories (relative to `path`)
//! clean_output = true         # Delete the output directory before building
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Content source directory.
    pub path: PathBuf,

    /// Build output directory.
    pub output: PathBuf,

    /// Article subdirectories, relative to `path`.
    pub article_paths: Vec<PathBuf>,

    /// Static-asset subdirectories, relative to `path`; copied verbatim.
    pub static_paths: Vec<PathBuf>,

    /// Delete the output directory before building.
    pub clean_output: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: "content".into(),
            output: "output".into(),
            article_paths: vec![],
            static_paths: vec![],
            clean_output: true,
        }
    }
}

impl ContentConfig {
    /// Validate content configuration.
    ///
    /// All paths must stay inside the site root: relative, no `..`.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_path_safety(&self.path, 0, 1, FieldPath::new("content.path"), diag);
        validate_path_safety(&self.output, 0, 1, FieldPath::new("content.output"), diag);

        let article_count = self.article_paths.len();
        for (i, p) in self.article_paths.iter().enumerate() {
            validate_path_safety(
                p,
                i,
                article_count,
                FieldPath::new("content.article_paths"),
                diag,
            );
        }

        let static_count = self.static_paths.len();
        for (i, p) in self.static_paths.iter().enumerate() {
            validate_path_safety(
                p,
                i,
                static_count,
                FieldPath::new("content.static_paths"),
                diag,
            );
        }
    }
}

/// Check a single path for unsafe components (`..` or absolute).
pub(crate) fn validate_path_safety(
    path: &Path,
    idx: usize,
    total: usize,
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    for comp in path.components() {
        let msg = match comp {
            Component::ParentDir => Some("parent directory '..' not allowed"),
            Component::Prefix(_) | Component::RootDir => Some("absolute paths not allowed"),
            _ => None,
        };
        if let Some(reason) = msg {
            // Only show index if there are multiple entries
            let prefix = if total > 1 {
                format!("[{idx}] ")
            } else {
                String::new()
            };
            diag.error(field, format!("{prefix}path '{}': {reason}", path.display()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.content.path, PathBuf::from("content"));
        assert_eq!(config.content.output, PathBuf::from("output"));
        assert!(config.content.article_paths.is_empty());
        assert!(config.content.static_paths.is_empty());
        assert!(config.content.clean_output);
    }

    #[test]
    fn test_custom_paths() {
        let config = test_parse_config(
            "[content]\narticle_paths = [\"blog\"]\nstatic_paths = [\"images\", \"files\"]",
        );
        assert_eq!(config.content.article_paths, vec![PathBuf::from("blog")]);
        assert_eq!(
            config.content.static_paths,
            vec![PathBuf::from("images"), PathBuf::from("files")]
        );
    }

    #[test]
    fn test_absolute_path_rejected() {
        let mut content = ContentConfig::default();
        content.output = "/var/www/html".into();

        let mut diag = ConfigDiagnostics::new();
        content.validate(&mut diag);
        assert!(diag.has_errors());
        assert!(diag.errors()[0].message.contains("absolute"));
    }

    #[test]
    fn test_parent_dir_rejected() {
        let mut content = ContentConfig::default();
        content.static_paths = vec!["images".into(), "../shared".into()];

        let mut diag = ConfigDiagnostics::new();
        content.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("[1]"));
    }

    #[test]
    fn test_relative_paths_pass() {
        let content = ContentConfig::default();
        let mut diag = ConfigDiagnostics::new();
        content.validate(&mut diag);
        assert!(diag.is_empty());
    }
}
