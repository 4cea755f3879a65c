//! Init command implementation.
//!
//! Scaffolds the base config, the publish overlay, a content directory,
//! and ignore entries for the output directory.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::SiteConfig;
use crate::log;

/// Create a new site configuration
///
/// # Steps
/// 1. Refuse to overwrite existing config files
/// 2. Write site.toml and publish.toml
/// 3. Create the content directory
/// 4. Write .gitignore with the output directory
///
/// If `dry` is true, only prints the base template to stdout
pub fn new_site(config: &SiteConfig, name: Option<&Path>, dry: bool) -> Result<()> {
    if dry {
        print!("{}", base_template());
        return Ok(());
    }

    let root = config.get_root();

    for path in [&config.config_path, &config.overlay_path] {
        if path.exists() {
            log!("error"; "'{}' already exists, refusing to overwrite", path.display());
            std::process::exit(1);
        }
    }

    if name.is_some() {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    }

    write_file(&config.config_path, &base_template())?;
    write_file(&config.overlay_path, &overlay_template())?;

    fs::create_dir_all(config.root_join(&config.content.path))
        .context("Failed to create content directory")?;

    write_ignore_file(root, &config.content.output)?;

    log!("init"; "site configuration created in '{}'", root.display());
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write '{}'", path.display()))
}

/// Write .gitignore with the output directory pattern
fn write_ignore_file(root: &Path, output_dir: &Path) -> Result<()> {
    let output_pattern = Path::new("/").join(output_dir);
    let content = format!("{}/\n", output_pattern.display());

    let path = root.join(".gitignore");
    fs::write(&path, content)
        .with_context(|| format!("Failed to write '{}'", path.display()))
}

/// Generate the base (dev profile) config template
pub fn base_template() -> String {
    format!(
        r#"# siteconf base configuration (dev profile, v{version})

[site]
title = "My Site"
author = ""
# url = "https://example.com"
relative_urls = true
timezone = "America/New_York"
language = "en"
summary_max_length = 10

[content]
path = "content"
output = "output"
article_paths = ["blog"]
static_paths = ["images"]
clean_output = true

[theme]
path = "themes/default"

[pagination]
size = 10
order_by = "reversed-date"

[category]
default = "misc"
use_folder_as_category = false

[menu]
items = [["Home", "/"], ["Posts", "/posts"]]
display_pages = true
display_categories = false

[social]
links = [["github", "https://github.com/example"]]

[serve]
interface = "127.0.0.1"
port = 8000
"#,
        version = env!("CARGO_PKG_VERSION")
    )
}

/// Generate the publish overlay template
///
/// Keys declared here replace the base values when the publish
/// profile is selected.
pub fn overlay_template() -> String {
    r#"# siteconf publish overlay - keys here replace the base values

[site]
url = "https://example.github.io"
relative_urls = false

[feeds]
all_atom = "feeds/all.atom.xml"
category_atom = "feeds/{slug}.atom.xml"

[pagination]
order_by = "date"

[category]
use_folder_as_category = true
"#
    .to_string()
}
