//! Site configuration management for `site.toml` and its publish overlay.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── content    # [content]
//! │   ├── theme      # [theme]
//! │   ├── feeds      # [feeds]
//! │   ├── pagination # [pagination]
//! │   ├── category   # [category]
//! │   ├── menu       # [menu]
//! │   ├── social     # [social]
//! │   └── serve      # [serve]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! ├── overlay        # Publish overlay deep-merge
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Profiles
//!
//! | Profile   | Files read                                  |
//! |-----------|---------------------------------------------|
//! | `dev`     | `site.toml`                                 |
//! | `publish` | `site.toml`, then `publish.toml` merged over it |

mod overlay;
pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    CategoryConfig, ContentConfig, FeedTemplate, FeedsConfig, LinkEntry, MenuConfig, OrderBy,
    PaginationConfig, ServeConfig, SiteSectionConfig, SocialConfig, ThemeConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};

// Re-export from overlay/
pub use overlay::{OverrideEntry, overridden_keys};

use crate::{
    cli::{Cli, Commands},
    log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

// ============================================================================
// profile
// ============================================================================

/// Deployment profile selecting which configuration files are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Base configuration only.
    #[default]
    Dev,
    /// Base configuration with the publish overlay merged over it.
    Publish,
}

impl Profile {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Publish => "publish",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing the effective settings table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the base config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Resolved overlay file path, next to the base config (internal use only)
    #[serde(skip)]
    pub overlay_path: PathBuf,

    /// Selected profile (internal use only)
    #[serde(skip)]
    pub profile: Profile,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site identity (title, author, url, timezone)
    pub site: SiteSectionConfig,

    /// Input/output directory mapping
    pub content: ContentConfig,

    /// Template-set selection
    pub theme: ThemeConfig,

    /// Syndication feed output paths
    pub feeds: FeedsConfig,

    /// Listing page size and content ordering
    pub pagination: PaginationConfig,

    /// Category derivation settings
    pub category: CategoryConfig,

    /// Navigation entries and display flags
    pub menu: MenuConfig,

    /// Footer link list
    pub social: SocialConfig,

    /// Preview server settings
    pub serve: ServeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            overlay_path: PathBuf::new(),
            profile: Profile::Dev,
            root: PathBuf::new(),
            site: SiteSectionConfig::default(),
            content: ContentConfig::default(),
            theme: ThemeConfig::default(),
            feeds: FeedsConfig::default(),
            pagination: PaginationConfig::default(),
            category: CategoryConfig::default(),
            menu: MenuConfig::default(),
            social: SocialConfig::default(),
            serve: ServeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find the base
    /// config file. The project root is the config file's parent directory.
    /// With `--publish`, the overlay file is read next to the base config
    /// and merged over it before deserialization.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        // Validate config existence (skip for init)
        if !cli.is_init() && !exists {
            log!(
                "error";
                "Config file '{}' not found. Run 'siteconf init' to create one.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        let overlay_path = config_path
            .parent()
            .map(|p| p.join(&cli.overlay))
            .unwrap_or_else(|| cli.overlay.clone());

        let profile = if cli.publish {
            Profile::Publish
        } else {
            Profile::Dev
        };

        let mut config = if cli.is_init() || !exists {
            Self::default()
        } else if profile == Profile::Publish {
            if !overlay_path.exists() {
                bail!(ConfigError::Validation(format!(
                    "publish overlay '{}' not found",
                    overlay_path.display()
                )));
            }
            Self::from_paths(&config_path, Some(&overlay_path))?
        } else {
            Self::from_paths(&config_path, None)?
        };

        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.config_path = config_path;
        config.overlay_path = overlay_path;
        config.profile = profile;

        Ok(config)
    }

    /// Resolve base config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match &cli.command {
            Commands::Init {
                name: Some(name), ..
            } => {
                let path = cwd.join(name).join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            Commands::Init { name: None, .. } => {
                let path = cwd.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => {
                // Search upward from cwd
                match find_config_file(&cli.config) {
                    Some(path) => Ok((path, true)),
                    None => Ok((cwd.join(&cli.config), false)),
                }
            }
        }
    }

    /// Load configuration from the base file, merging the overlay when given.
    ///
    /// Each file is checked for unknown fields individually so the warning
    /// names the offending file.
    pub(crate) fn from_paths(base_path: &Path, overlay_path: Option<&Path>) -> Result<Self> {
        let base_raw = fs::read_to_string(base_path)
            .map_err(|err| ConfigError::Io(base_path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&base_raw)?;
        Self::report_unknown(&ignored, base_path)?;

        let Some(overlay_path) = overlay_path else {
            return Ok(config);
        };

        let overlay_raw = fs::read_to_string(overlay_path)
            .map_err(|err| ConfigError::Io(overlay_path.to_path_buf(), err))?;

        let (_, ignored) = Self::parse_with_ignored(&overlay_raw)?;
        Self::report_unknown(&ignored, overlay_path)?;

        let mut document: toml::Value = toml::from_str(&base_raw).map_err(ConfigError::Toml)?;
        let overlay_doc: toml::Value = toml::from_str(&overlay_raw).map_err(ConfigError::Toml)?;
        overlay::merge(&mut document, overlay_doc);

        crate::debug!("config"; "merged overlay '{}'", overlay_path.display());

        let merged =
            toml::to_string(&document).context("Failed to re-serialize merged configuration")?;
        Self::from_str(&merged)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub(crate) fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Warn about unknown fields and ask whether to continue.
    fn report_unknown(fields: &[String], path: &Path) -> Result<()> {
        if fields.is_empty() {
            return Ok(());
        }
        Self::print_unknown_fields_warning(fields, path);
        if !Self::prompt_continue()? {
            bail!("Aborted due to unknown config fields");
        }
        Ok(())
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Run all consistency checks, collecting every finding.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(self.feeds.any_enabled(), &mut diag);
        self.content.validate(&mut diag);
        self.theme.validate(&mut diag);
        self.feeds.validate(&mut diag);
        self.pagination.validate(&mut diag);
        self.category.validate(&mut diag);
        self.menu.validate(&mut diag);
        self.social.validate(&mut diag);

        diag
    }

    /// Validate the configuration.
    ///
    /// Prints collected hints and warnings, then returns every error at
    /// once as [`ConfigError::Diagnostics`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let diag = self.diagnostics();

        // Print collected hints and warnings (grouped display)
        diag.print_hints_and_warnings();

        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_parse_config`)
// ============================================================================

/// Parse config with a minimal `[site]` section prepended.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<SiteConfig, _> = toml::from_str("[site\ntitle = \"My Blog\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.profile, Profile::Dev);
        assert_eq!(config.site.title, "");
        assert!(config.site.relative_urls);
        assert_eq!(config.pagination.size, 10);
        assert_eq!(config.serve.port, 8000);
        assert!(!config.feeds.any_enabled());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.site.title, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_unknown_field_inside_known_section() {
        let content = "[site]\ntitle = \"Test\"\nsummary_maximum = 10";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.iter().any(|f| f.contains("summary_maximum")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\ntitle = \"Test\"\nauthor = \"Alice\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_publish_profile_merge() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("site.toml");
        let overlay = dir.path().join("publish.toml");
        std::fs::write(
            &base,
            "[site]\ntitle = \"My Blog\"\nrelative_urls = true\n\n[menu]\ndisplay_categories = false\n",
        )
        .unwrap();
        std::fs::write(
            &overlay,
            "[site]\nurl = \"https://example.github.io\"\nrelative_urls = false\n\n[feeds]\nall_atom = \"feeds/all.atom.xml\"\ncategory_atom = \"feeds/{slug}.atom.xml\"\n",
        )
        .unwrap();

        let config = SiteConfig::from_paths(&base, Some(&overlay)).unwrap();

        // Overridden keys take the overlay's value
        assert!(!config.site.relative_urls);
        assert_eq!(config.site.url.as_deref(), Some("https://example.github.io"));
        assert!(config.feeds.any_enabled());

        // Untouched keys keep the base's value
        assert_eq!(config.site.title, "My Blog");
        assert!(!config.menu.display_categories);

        // The merged result passes validation
        assert!(config.diagnostics().is_empty());
    }

    #[test]
    fn test_loading_twice_is_identical() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("site.toml");
        let overlay = dir.path().join("publish.toml");
        std::fs::write(&base, "[site]\ntitle = \"t\"\n[pagination]\nsize = 5\n").unwrap();
        std::fs::write(&overlay, "[site]\nrelative_urls = false\n").unwrap();

        let first = SiteConfig::from_paths(&base, Some(&overlay)).unwrap();
        let second = SiteConfig::from_paths(&base, Some(&overlay)).unwrap();

        assert_eq!(
            toml::to_string(&first).unwrap(),
            toml::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_validate_collects_errors() {
        let config = test_parse_config("[pagination]\nsize = 0\n");
        match config.validate() {
            Err(ConfigError::Diagnostics(diag)) => assert!(diag.has_errors()),
            other => panic!("expected diagnostics, got {other:?}"),
        }

        let clean = test_parse_config("");
        assert!(clean.validate().is_ok());
    }

    #[test]
    fn test_unknown_field_only_in_overlay() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("site.toml");
        let overlay = dir.path().join("publish.toml");
        std::fs::write(&base, "[site]\ntitle = \"t\"\n").unwrap();
        std::fs::write(&overlay, "[site]\nrelativ_urls = false\n").unwrap();

        // The per-file pass pins the typo to the overlay, not the base
        let (_, base_ignored) =
            SiteConfig::parse_with_ignored(&std::fs::read_to_string(&base).unwrap()).unwrap();
        assert!(base_ignored.is_empty());

        let (_, overlay_ignored) =
            SiteConfig::parse_with_ignored(&std::fs::read_to_string(&overlay).unwrap()).unwrap();
        assert!(overlay_ignored.iter().any(|f| f.contains("relativ_urls")));
    }

    #[test]
    fn test_dev_profile_reads_base_only() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("site.toml");
        std::fs::write(&base, "[site]\ntitle = \"t\"\n").unwrap();

        let config = SiteConfig::from_paths(&base, None).unwrap();
        assert!(config.site.relative_urls);
        assert!(!config.feeds.any_enabled());
    }
}
