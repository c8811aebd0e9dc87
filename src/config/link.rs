//! Site link and author social links.

use macros::Config;
use serde::Serialize;

/// Extra `<link rel=".." href="..">` for the site head, e.g. `rel = "me"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Config)]
pub struct SiteLink {
    pub rel: String,
    pub href: String,
}

/// One entry of `authorSocialLinks`, rendered in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Config)]
pub struct SocialLink {
    /// Unique key, also used to pick an icon (`github`, `twitter`, ...).
    pub name: String,
    pub url: String,
}
