//! `[social]` section configuration.
//!
//! Social links rendered into the footer, in declaration order.

use super::link::{LinkEntry, validate_links};
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    /// Ordered (label, URL) pairs.
    pub links: Vec<LinkEntry>,
}

impl SocialConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_links(&self.links, FieldPath::new("social.links"), diag);
    }
}
