//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Used with `#[derive(Config)]` to generate compile-time checked
/// field path accessors.
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(rename_all = "camelCase")]
/// pub struct SiteConfig {
///     pub site_url: String,
/// }
///
/// // Generated:
/// impl SiteConfig {
///     pub const FIELDS: SiteConfigFields = ...;
/// }
///
/// // Usage:
/// diag.error(SiteConfig::FIELDS.site_url, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Path of a nested key, e.g. `siteLink` + `href` -> `siteLink.href`.
    pub fn child(&self, key: FieldPath) -> String {
        format!("{}.{}", self.0, key.0)
    }

    /// Path of a sequence element, e.g. `authorSocialLinks[1]`.
    pub fn index(&self, index: usize) -> String {
        format!("{}[{}]", self.0, index)
    }

    /// Path of a key inside a sequence element, e.g. `authorSocialLinks[1].url`.
    pub fn item(&self, index: usize, key: FieldPath) -> String {
        format!("{}.{}", self.index(index), key.0)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
