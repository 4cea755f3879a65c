//! Publish overlay merging.
//!
//! The publish profile re-declares a subset of the base configuration's
//! keys. Merging happens on raw TOML documents before deserialization:
//! tables merge recursively, while scalars and arrays in the overlay
//! replace the base value wholesale.

use toml::Value;

/// Deep-merge `overlay` into `base`.
///
/// A key absent from the overlay keeps the base's value. Arrays are
/// treated as atomic values (an overlay link list replaces the base
/// list, it does not append).
pub fn merge(base: &mut Value, overlay: Value) {
    match overlay {
        Value::Table(overlay_table) => {
            if let Value::Table(base_table) = base {
                for (key, value) in overlay_table {
                    match base_table.get_mut(&key) {
                        Some(existing) if existing.is_table() && value.is_table() => {
                            merge(existing, value);
                        }
                        _ => {
                            base_table.insert(key, value);
                        }
                    }
                }
            } else {
                *base = Value::Table(overlay_table);
            }
        }
        other => *base = other,
    }
}

/// One key the overlay overrides, with both sides of the change.
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideEntry {
    /// Dotted key path (e.g. `site.relative_urls`).
    pub path: String,
    /// Base value; `None` when the overlay introduces the key.
    pub base: Option<Value>,
    /// Overlay value.
    pub publish: Value,
}

/// Collect the keys `overlay` actually changes relative to `base`.
///
/// Keys the overlay re-declares with an identical value are skipped.
pub fn overridden_keys(base: &Value, overlay: &Value) -> Vec<OverrideEntry> {
    let mut out = Vec::new();
    collect(&mut out, "", Some(base), overlay);
    out
}

fn collect(out: &mut Vec<OverrideEntry>, prefix: &str, base: Option<&Value>, overlay: &Value) {
    match overlay {
        Value::Table(table) => {
            for (key, value) in table {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                let base_child = base
                    .and_then(Value::as_table)
                    .and_then(|t| t.get(key.as_str()));
                collect(out, &path, base_child, value);
            }
        }
        leaf => {
            if base != Some(leaf) {
                out.push(OverrideEntry {
                    path: prefix.to_string(),
                    base: base.cloned(),
                    publish: leaf.clone(),
                });
            }
        }
    }
}
