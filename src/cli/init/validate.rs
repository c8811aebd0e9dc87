//! Pre-initialization validation.
//!
//! Validates the target before writing `site.toml`.

use anyhow::{Result, bail};
use std::path::Path;

/// Validate the config file target for initialization.
///
/// # Rules
/// - the config file must not exist yet
/// - the parent, if it exists, must be a directory
pub fn validate_target(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        bail!(
            "'{}' already exists.\n\
             Remove it first or initialize into another directory.",
            config_path.display()
        );
    }
    if let Some(parent) = config_path.parent()
        && parent.exists()
        && !parent.is_dir()
    {
        bail!("'{}' is not a directory", parent.display());
    }
    Ok(())
}
