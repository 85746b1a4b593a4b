//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/content/        ← cwd
/// /home/user/site/folio.toml      ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Walk up from `start` looking for `config_name`.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

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
    use tempfile::TempDir;

    #[test]
    fn test_finds_config_in_ancestor() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("content/drafts");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("folio.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("folio.toml")).unwrap();
        assert_eq!(found, dir.path().join("folio.toml"));
    }

    #[test]
    fn test_missing_config() {
        let dir = TempDir::new().unwrap();
        assert!(find_config_file_from(dir.path(), Path::new("no-such-folio.toml")).is_none());
    }

    #[test]
    fn test_absolute_config_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, "").unwrap();

        assert_eq!(find_config_file_from(Path::new("/"), &path), Some(path));
    }
}
