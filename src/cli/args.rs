//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Siteconf static-site configuration CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Base config file path (default: site.toml)
    #[arg(short = 'C', long, default_value = "site.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Publish overlay filename, resolved next to the base config
    #[arg(long, default_value = "publish.toml", value_hint = clap::ValueHint::FilePath)]
    pub overlay: PathBuf,

    /// Select the publish profile (base config + overlay)
    #[arg(short = 'p', long, global = true)]
    pub publish: bool,

    /// Enable verbose output for debugging
    // -V belongs to the auto-generated --version flag
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Scaffold site.toml and publish.toml for a new site
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the base config template to stdout instead of writing files
        #[arg(long)]
        dry: bool,
    },

    /// Validate the selected profile's configuration
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Print the effective configuration for the selected profile
    #[command(visible_alias = "s")]
    Show {
        #[command(flatten)]
        args: ShowArgs,
    },

    /// List the keys the publish overlay overrides
    #[command(visible_alias = "d")]
    Diff,
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Treat validation failures as warnings instead of errors
    #[arg(long, short = 'w')]
    pub warn_only: bool,
}

/// Show command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "toml")]
    pub format: ShowFormat,

    /// Pretty-print JSON output
    #[arg(short = 'P', long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Output format for the show command.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowFormat {
    Toml,
    Json,
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check { .. })
    }
    pub const fn is_show(&self) -> bool {
        matches!(self.command, Commands::Show { .. })
    }
    pub const fn is_diff(&self) -> bool {
        matches!(self.command, Commands::Diff)
    }
}
