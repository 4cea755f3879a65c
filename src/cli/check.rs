//! Check command implementation.
//!
//! Runs every consistency check from the schema against the selected
//! profile and prints grouped diagnostics. `--warn-only` downgrades
//! failures so CI can surface findings without failing the build.

use anyhow::Result;

use crate::cli::args::CheckArgs;
use crate::config::{ConfigError, SiteConfig};
use crate::log;

/// Execute check command
pub fn run_check(args: &CheckArgs, config: &SiteConfig) -> Result<()> {
    log!("check"; "validating {} profile", config.profile);

    match config.validate() {
        Ok(()) => {
            log!("check"; "configuration OK");
            Ok(())
        }
        Err(ConfigError::Diagnostics(diag)) if args.warn_only => {
            eprintln!("{diag}");
            log!("warning"; "{} finding(s) downgraded by --warn-only", diag.len());
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
