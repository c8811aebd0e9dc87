//! Process-wide config handle.
//!
//! The record is installed once at startup and only ever read afterwards.
//! Readers get `&'static SiteConfig`, so no lock is taken on access.

use crate::config::{ConfigError, SiteConfig};
use std::sync::OnceLock;

/// Global config storage.
static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Access the installed config, `None` before `init_config`.
#[inline]
pub fn cfg() -> Option<&'static SiteConfig> {
    CONFIG.get()
}

/// Install the validated config for the rest of the process.
///
/// Fails with [`ConfigError::AlreadyInitialized`] on a second call; the
/// first record stays in place.
pub fn init_config(config: SiteConfig) -> Result<&'static SiteConfig, ConfigError> {
    CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    CONFIG.get().ok_or(ConfigError::AlreadyInitialized)
}
