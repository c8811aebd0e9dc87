//! Site initialization module.
//!
//! Writes the default `site.toml` into a directory.

mod validate;

use crate::{config::CONFIG_FILE, embed, log};
use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Write the default config into `dir`, creating the directory if needed.
///
/// Returns the path of the written file.
pub fn new_site(dir: &Path) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE);
    validate::validate_target(&config_path)?;

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;
    fs::write(&config_path, embed::SITE_TOML)
        .with_context(|| format!("Failed to write '{}'", config_path.display()))?;

    log!("init"; "wrote {}", config_path.display());
    Ok(config_path)
}
