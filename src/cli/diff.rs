//! Diff command implementation.
//!
//! Lists the dotted key paths the publish overlay actually changes,
//! with the base and publish values side by side.

use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize;
use std::fs;

use crate::config::{ConfigError, cfg, overridden_keys};
use crate::log;

/// Execute diff command
pub fn run_diff() -> Result<()> {
    let config = cfg();

    if !config.overlay_path.exists() {
        bail!(ConfigError::Validation(format!(
            "publish overlay '{}' not found",
            config.overlay_path.display()
        )));
    }

    let base_raw = fs::read_to_string(&config.config_path)
        .with_context(|| format!("Failed to read '{}'", config.config_path.display()))?;
    let overlay_raw = fs::read_to_string(&config.overlay_path)
        .with_context(|| format!("Failed to read '{}'", config.overlay_path.display()))?;

    let base: toml::Value = toml::from_str(&base_raw).map_err(ConfigError::Toml)?;
    let overlay: toml::Value = toml::from_str(&overlay_raw).map_err(ConfigError::Toml)?;

    let overrides = overridden_keys(&base, &overlay);

    if overrides.is_empty() {
        log!("diff"; "overlay changes nothing");
        return Ok(());
    }

    log!("diff"; "{} key(s) overridden by '{}':", overrides.len(), config.overlay_path.display());
    for entry in &overrides {
        let base_side = match &entry.base {
            Some(value) => value.to_string(),
            None => "unset".dimmed().to_string(),
        };
        println!(
            "{} {} {} {}",
            entry.path.cyan(),
            base_side,
            "→".dimmed(),
            entry.publish.to_string().green()
        );
    }

    Ok(())
}
