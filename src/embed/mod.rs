//! Embedded static resources.
//!
//! - `SITE_TOML` - the default site record, used by `--embedded` and `init`

/// Default `site.toml`, compiled into the binary.
pub const SITE_TOML: &str = include_str!("site.toml");
