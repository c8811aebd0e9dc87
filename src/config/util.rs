//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Expand a leading `~` in a user-supplied config path.
pub fn expand_tilde(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`
/// Returns the path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/content/posts/  ← start
/// /home/user/site/site.toml       ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    // Absolute paths are taken as-is
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
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
