//! `[menu]` section configuration.
//!
//! Navigation entries and menu display flags.
//!
//! # Example
//!
//! ```toml
//! [menu]
//! items = [["Home", "/"], ["Posts", "/posts"]]
//! display_pages = true
//! display_categories = false
//! ```

use super::link::{LinkEntry, validate_links};
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Ordered navigation entries, rendered in declaration order.
    pub items: Vec<LinkEntry>,

    /// Show standalone pages on the menu.
    pub display_pages: bool,

    /// Show categories on the menu.
    pub display_categories: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            items: vec![],
            display_pages: true,
            display_categories: true,
        }
    }
}

impl MenuConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_links(&self.items, FieldPath::new("menu.items"), diag);
    }
}
