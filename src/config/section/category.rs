//! `[category]` section configuration.
//!
//! Controls how articles without an explicit category are classified.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryConfig {
    /// Fallback category for articles that declare none.
    pub default: String,

    /// Derive the category from the article's parent folder name.
    pub use_folder_as_category: bool,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            default: "misc".into(),
            use_folder_as_category: false,
        }
    }
}

impl CategoryConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.default.trim().is_empty() {
            diag.error(FieldPath::new("category.default"), "must not be empty");
        }
    }
}
