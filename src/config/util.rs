//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/content/posts/  ← cwd
/// /home/user/site/site.toml       ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

/// Walk up from `start` looking for `config_name`.
pub fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    // First check if config_name is an absolute path
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("site.toml"), "[site]\ntitle = \"t\"").unwrap();

        let nested = root.join("content").join("blog");
        fs::create_dir_all(&nested).unwrap();

        let found = find_config_from(&nested, Path::new("site.toml")).unwrap();
        assert_eq!(found, root.join("site.toml"));
        assert!(found.exists());
    }

    #[test]
    fn test_find_config_prefers_nearest() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let nested = root.join("sub");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.join("site.toml"), "").unwrap();
        fs::write(nested.join("site.toml"), "").unwrap();

        let found = find_config_from(&nested, Path::new("site.toml")).unwrap();
        assert_eq!(found, nested.join("site.toml"));
    }

    #[test]
    fn test_find_config_missing() {
        let dir = tempfile::tempdir().unwrap();
        // Only search within the temp dir: an absolute name that doesn't exist
        let missing = dir.path().join("nonexistent.toml");
        assert_eq!(find_config_from(dir.path(), &missing), None);
    }

    #[test]
    fn test_find_config_absolute_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("publish.toml");
        fs::write(&path, "").unwrap();

        let found = find_config_from(Path::new("/"), &path).unwrap();
        assert_eq!(found, path);
    }
}
