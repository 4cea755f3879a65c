//! `[pagination]` section configuration.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Content ordering key for article listings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OrderBy {
    /// Oldest first.
    Date,
    /// Newest first (default).
    #[default]
    ReversedDate,
    /// Alphabetical by title.
    Title,
    /// Alphabetical by source filename.
    Basename,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Articles per listing page.
    pub size: usize,

    /// Ordering key for article listings.
    pub order_by: OrderBy,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            size: 10,
            order_by: OrderBy::ReversedDate,
        }
    }
}

impl PaginationConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.size == 0 {
            diag.error_with_hint(
                FieldPath::new("pagination.size"),
                "must be a positive integer",
                "remove the key to use the default of 10",
            );
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
        assert_eq!(config.pagination.size, 10);
        assert_eq!(config.pagination.order_by, OrderBy::ReversedDate);
    }

    #[test]
    fn test_order_by_parsing() {
        for (input, expected) in [
            ("date", OrderBy::Date),
            ("reversed-date", OrderBy::ReversedDate),
            ("title", OrderBy::Title),
            ("basename", OrderBy::Basename),
        ] {
            let config =
                test_parse_config(&format!("[pagination]\norder_by = \"{input}\""));
            assert_eq!(
                config.pagination.order_by, expected,
                "order_by failed for {input}"
            );
        }
    }

    #[test]
    fn test_zero_size_rejected() {
        let pagination = PaginationConfig {
            size: 0,
            order_by: OrderBy::Date,
        };
        let mut diag = ConfigDiagnostics::new();
        pagination.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].hint.is_some());
    }

    #[test]
    fn test_custom_size() {
        let config = test_parse_config("[pagination]\nsize = 25");
        assert_eq!(config.pagination.size, 25);

        let mut diag = ConfigDiagnostics::new();
        config.pagination.validate(&mut diag);
        assert!(diag.is_empty());
    }
}
