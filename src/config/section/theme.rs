//! `[theme]` section configuration.
//!
//! Selects the template set used to render the site.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Theme directory, relative to the site root.
    pub path: PathBuf,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            path: "themes/default".into(),
        }
    }
}

impl ThemeConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        super::content::validate_path_safety(&self.path, 0, 1, FieldPath::new("theme.path"), diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.theme.path, PathBuf::from("themes/default"));
    }

    #[test]
    fn test_custom_theme() {
        let config = test_parse_config("[theme]\npath = \"themes/minimal\"");
        assert_eq!(config.theme.path, PathBuf::from("themes/minimal"));
    }

    #[test]
    fn test_absolute_theme_rejected() {
        let theme = ThemeConfig {
            path: "/usr/share/themes/minimal".into(),
        };
        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
