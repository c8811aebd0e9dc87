//! `sitemeta check` - report whether the site config is valid.

use crate::{
    config::{ConfigSource, SiteConfig},
    debug, log,
};

/// Report a config that already passed validation.
///
/// Validation failures never reach this point: loading aborts startup and
/// the diagnostics are printed by `main`.
pub fn report(source: &ConfigSource, config: &SiteConfig) {
    log!("ok"; "{} is valid", source);
    debug!(
        "check";
        "{} social link(s), display {}, language {}",
        config.author_social_links.len(),
        config.manifest_display,
        config.site_language
    );
}
