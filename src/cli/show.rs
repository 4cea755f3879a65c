//! Show command implementation.
//!
//! Serializes the effective (merged) configuration so the values the
//! site-generation engine will actually see can be inspected or piped
//! into other tooling.

use anyhow::{Context, Result};
use std::fs;

use crate::cli::args::{ShowArgs, ShowFormat};
use crate::config::SiteConfig;
use crate::log;

/// Execute show command
pub fn run_show(args: &ShowArgs, config: &SiteConfig) -> Result<()> {
    let rendered = match args.format {
        ShowFormat::Toml => toml::to_string_pretty(config)
            .context("Failed to serialize configuration as TOML")?,
        ShowFormat::Json if args.pretty => serde_json::to_string_pretty(config)
            .context("Failed to serialize configuration as JSON")?,
        ShowFormat::Json => serde_json::to_string(config)
            .context("Failed to serialize configuration as JSON")?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            log!("show"; "wrote {} profile to '{}'", config.profile, path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
