//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Returns the absolute path to the config file if found
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Find `config_name` in `start` or any of its ancestors.
///
/// # Example
/// ```text
/// /home/user/site/scripts/     ← start
/// /home/user/site/postbuild.toml  ← found!
/// ```
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_ancestor() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("postbuild.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("postbuild.toml")).unwrap();
        assert_eq!(found, dir.path().join("postbuild.toml"));
    }

    #[test]
    fn test_nearest_config_wins() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("site");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("postbuild.toml"), "").unwrap();
        fs::write(nested.join("postbuild.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("postbuild.toml")).unwrap();
        assert_eq!(found, nested.join("postbuild.toml"));
    }

    #[test]
    fn test_absolute_config_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        assert_eq!(find_config_file_from(dir.path(), &path), None);

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file_from(Path::new("/"), &path), Some(path));
    }
}
