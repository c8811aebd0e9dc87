//! `sitemeta show` - print the validated site config.

use super::args::ShowFormat;
use crate::config::SiteConfig;
use anyhow::{Context, Result};

/// Serialize the record with the same keys as `site.toml`.
pub fn render(config: &SiteConfig, format: ShowFormat, pretty: bool) -> Result<String> {
    let out = match (format, pretty) {
        (ShowFormat::Toml, false) => toml::to_string(config)?,
        (ShowFormat::Toml, true) => toml::to_string_pretty(config)?,
        (ShowFormat::Json, false) => serde_json::to_string(config)?,
        (ShowFormat::Json, true) => serde_json::to_string_pretty(config)?,
    };
    Ok(out)
}

/// Print the record to stdout.
pub fn print_config(config: &SiteConfig, format: ShowFormat, pretty: bool) -> Result<()> {
    let out = render(config, format, pretty).context("Failed to serialize site config")?;
    println!("{}", out.trim_end());
    Ok(())
}
