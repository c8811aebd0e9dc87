//! sitemeta - validated site metadata for static site builds.
//!
//! One `site.toml` record (title, author, social links, web app manifest
//! fields) is loaded and checked in a single pass, then installed as a
//! read-only, process-wide [`SiteConfig`] for page rendering, head tags and
//! manifest generation to read.
//!
//! ```ignore
//! use sitemeta::config::{ConfigSource, SiteConfig, init_config};
//!
//! let config = init_config(SiteConfig::load(&ConfigSource::file("site.toml"))?)?;
//! assert!(config.manifest_short_name.chars().count() <= 12);
//! ```

pub mod cli;
pub mod config;
pub mod embed;
pub mod logger;

pub use config::{ConfigError, ConfigSource, SiteConfig, cfg, init_config};
