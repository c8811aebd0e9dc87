//! Site configuration management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── check      # Field-level format checks (URL, color, language, ...)
//! ├── link       # siteLink / authorSocialLinks entries
//! ├── manifest   # ManifestDisplay
//! ├── raw        # Lenient deserialization shape + validation pass
//! ├── source     # ConfigSource (embedded or file)
//! ├── types/     # ConfigError, ConfigDiagnostics, FieldPath, global handle
//! └── mod.rs     # SiteConfig (this file)
//! ```
//!
//! # Loading
//!
//! One pass: parse TOML, collect unknown keys, check every field, then
//! either return the complete record or every violation at once.
//!
//! ```ignore
//! let config = SiteConfig::load(&ConfigSource::file("site.toml"))?;
//! let config = init_config(config)?;
//! render_head(config);
//! ```

mod check;
mod link;
mod manifest;
mod raw;
mod source;
pub mod types;
pub(crate) mod util;

pub use link::{SiteLink, SocialLink};
pub use manifest::{ManifestDisplay, UnknownDisplay};
pub use raw::MANIFEST_SHORT_NAME_MAX;
pub use source::{CONFIG_FILE, ConfigSource};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};

use crate::debug;
use macros::Config;
use raw::RawSiteConfig;
use serde::Serialize;
use std::str::FromStr;

// ============================================================================
// root configuration
// ============================================================================

/// Validated site metadata, read by page rendering, manifest and head-tag
/// generation.
///
/// Built by [`SiteConfig::load`] (or `parse`/`FromStr`) only after every
/// field has passed validation; shared by reference afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Config)]
#[serde(rename_all = "camelCase")]
#[config(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Full site title, used as `<title>` of the home page.
    pub site_title: String,
    /// Suffix of every other page title.
    pub short_site_title: String,
    pub site_description: String,
    /// Absolute site URL without trailing slash.
    pub site_url: String,
    /// Empty, or a path starting with `/` for subdirectory deployments.
    pub path_prefix: String,
    /// Default social preview image, relative to the site root.
    pub site_image: String,
    /// ISO 639-1 code.
    pub site_language: String,

    pub author_name: String,
    /// Handle without the leading `@`.
    pub author_twitter_account: String,

    pub header_title: String,
    pub header_sub_title: String,

    pub manifest_name: String,
    /// At most [`MANIFEST_SHORT_NAME_MAX`] characters.
    pub manifest_short_name: String,
    pub manifest_start_url: String,
    pub manifest_background_color: String,
    pub manifest_theme_color: String,
    pub manifest_display: ManifestDisplay,

    /// Optional extra `<link>` in the site head.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_link: Option<SiteLink>,
    /// Ordered, unique by name.
    pub author_social_links: Vec<SocialLink>,
}

impl SiteConfig {
    /// Load and validate the record, printing any warnings.
    pub fn load(source: &ConfigSource) -> Result<Self, ConfigError> {
        let (config, diag) = Self::load_with_warnings(source)?;
        diag.print_warnings();
        Ok(config)
    }

    /// Load and validate the record, returning warnings instead of printing them.
    pub fn load_with_warnings(
        source: &ConfigSource,
    ) -> Result<(Self, ConfigDiagnostics), ConfigError> {
        let content = source.read()?;
        let loaded = Self::parse(&content)?;
        debug!("config"; "loaded {}", source);
        Ok(loaded)
    }

    /// The default record compiled into the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::parse(crate::embed::SITE_TOML).map(|(config, _)| config)
    }

    /// Validate TOML content.
    ///
    /// `Ok` carries the record plus warnings only; `Err(Validation)` carries
    /// every error and warning found.
    pub fn parse(content: &str) -> Result<(Self, ConfigDiagnostics), ConfigError> {
        let (raw, ignored) = Self::parse_with_ignored(content)?;

        let mut diag = ConfigDiagnostics::new();
        for field in ignored {
            diag.warn(field, "unknown key, ignored");
        }

        let config = raw.validate(&mut diag);
        if diag.has_errors() {
            return Err(ConfigError::Validation(diag));
        }
        Ok((config, diag))
    }

    /// Parse TOML content, collecting any unknown keys.
    fn parse_with_ignored(content: &str) -> Result<(RawSiteConfig, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let raw = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((raw, ignored))
    }

    // ========================================================================
    // read-only helpers for collaborators
    // ========================================================================

    /// Absolute URL of a site path, honoring `pathPrefix`.
    ///
    /// ```ignore
    /// config.url_for("/posts/hello/") // https://example.com/blog/posts/hello/
    /// ```
    pub fn url_for(&self, path: &str) -> String {
        let mut url = self.site_url.trim_end_matches('/').to_string();
        let prefix = self.path_prefix.trim_matches('/');
        if !prefix.is_empty() {
            url.push('/');
            url.push_str(prefix);
        }
        url.push('/');
        url.push_str(path.trim_start_matches('/'));
        url
    }

    /// `<title>` for a page: `"{page} - {shortSiteTitle}"`, or `siteTitle`
    /// for the home page.
    pub fn title_for(&self, page_title: Option<&str>) -> String {
        match page_title {
            Some(title) if !title.trim().is_empty() => {
                format!("{title} - {}", self.short_site_title)
            }
            _ => self.site_title.clone(),
        }
    }

    /// Twitter handle with its `@`, for `twitter:creator`.
    pub fn twitter_handle(&self) -> String {
        format!("@{}", self.author_twitter_account)
    }

    /// Absolute URL of the default preview image.
    pub fn image_url(&self) -> String {
        self.url_for(&self.site_image)
    }

    /// Social link by name.
    pub fn social_link(&self, name: &str) -> Option<&SocialLink> {
        self.author_social_links.iter().find(|link| link.name == name)
    }
}

impl FromStr for SiteConfig {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Self::parse(content).map(|(config, _)| config)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// The embedded record with `key` set to the raw TOML `value`.
///
/// Keys absent from the record are inserted before the social link tables,
/// so they stay top-level.
#[cfg(test)]
pub fn test_config_with(key: &str, value: &str) -> String {
    let line = format!("{key} = {value}");
    let mut replaced = false;
    let mut out: Vec<String> = crate::embed::SITE_TOML
        .lines()
        .map(|l| {
            if l.starts_with(&format!("{key} =")) {
                replaced = true;
                line.clone()
            } else {
                l.to_string()
            }
        })
        .collect();
    if !replaced {
        let at = out
            .iter()
            .position(|l| l.starts_with("[[authorSocialLinks]]"))
            .unwrap_or(out.len());
        out.insert(at, line);
    }
    out.join("\n")
}

/// The embedded record without the top-level `key`.
#[cfg(test)]
pub fn test_config_without(key: &str) -> String {
    crate::embed::SITE_TOML
        .lines()
        .filter(|l| !l.starts_with(&format!("{key} =")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The embedded record with the social link tables replaced by `links`.
#[cfg(test)]
pub fn test_config_links(links: &str) -> String {
    let head = crate::embed::SITE_TOML
        .split("[[authorSocialLinks]]")
        .next()
        .unwrap_or_default();
    format!("{head}{links}")
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn errors(content: &str) -> ConfigDiagnostics {
        match SiteConfig::parse(content) {
            Err(ConfigError::Validation(diag)) => diag,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_embedded_record_loads_unchanged() {
        let config = SiteConfig::embedded().unwrap();

        assert_eq!(config.site_title, "Luke Oliff");
        assert_eq!(config.short_site_title, "Luke Oliff");
        assert_eq!(config.site_description, "Luke Oliff.");
        assert_eq!(config.site_url, "https://lukeoliff.com");
        assert_eq!(config.path_prefix, "");
        assert_eq!(config.site_image, "preview.jpg");
        assert_eq!(config.site_language, "en");
        assert_eq!(config.author_name, "Luke Oliff");
        assert_eq!(config.author_twitter_account, "mroliff");
        assert_eq!(config.header_title, "Luke Oliff");
        assert_eq!(
            config.header_sub_title,
            "technical writer, security advocate, guy who talks on Slack too much"
        );
        assert_eq!(config.manifest_name, "Luke Oliff");
        assert_eq!(config.manifest_short_name, "Luke Oliff");
        assert_eq!(config.manifest_start_url, "/index.html");
        assert_eq!(config.manifest_background_color, "white");
        assert_eq!(config.manifest_theme_color, "#666");
        assert_eq!(config.manifest_display, ManifestDisplay::Standalone);
        assert_eq!(config.site_link, None);
        assert_eq!(
            config.author_social_links,
            vec![
                SocialLink {
                    name: "github".into(),
                    url: "https://github.com/lukeoliff".into(),
                },
                SocialLink {
                    name: "twitter".into(),
                    url: "https://twitter.com/mroliff".into(),
                },
            ]
        );
    }

    #[test]
    fn test_values_are_not_transformed() {
        let content = test_config_with("siteDescription", "\"  padded  description \"");
        let config: SiteConfig = content.parse().unwrap();
        assert_eq!(config.site_description, "  padded  description ");
    }

    #[test]
    fn test_valid_record_has_no_warnings() {
        let (_, diag) = SiteConfig::parse(crate::embed::SITE_TOML).unwrap();
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_missing_field_is_named() {
        for key in [
            "siteTitle",
            "shortSiteTitle",
            "siteDescription",
            "siteUrl",
            "pathPrefix",
            "siteImage",
            "siteLanguage",
            "authorName",
            "authorTwitterAccount",
            "headerTitle",
            "headerSubTitle",
            "manifestName",
            "manifestShortName",
            "manifestStartUrl",
            "manifestBackgroundColor",
            "manifestThemeColor",
            "manifestDisplay",
        ] {
            let diag = errors(&test_config_without(key));
            assert!(diag.has_error_for(key), "{key}: {diag}");
            assert_eq!(diag.len(), 1, "{key}: {diag}");
        }
    }

    #[test]
    fn test_missing_social_links() {
        let diag = errors(&test_config_links(""));
        assert!(diag.has_error_for("authorSocialLinks"));
    }

    #[test]
    fn test_empty_social_links_allowed() {
        let content = test_config_links("authorSocialLinks = []\n");
        let config: SiteConfig = content.parse().unwrap();
        assert!(config.author_social_links.is_empty());
    }

    #[test]
    fn test_empty_path_prefix_allowed_but_other_blanks_rejected() {
        let config: SiteConfig = test_config_with("pathPrefix", "\"\"").parse().unwrap();
        assert_eq!(config.path_prefix, "");

        let diag = errors(&test_config_with("siteTitle", "\"  \""));
        assert!(diag.has_error_for("siteTitle"));
    }

    #[test]
    fn test_manifest_short_name_over_limit() {
        let diag = errors(&test_config_with(
            "manifestShortName",
            "\"Luke Oliff Extended Name\"",
        ));
        assert_eq!(diag.len(), 1);
        assert!(diag.has_error_for("manifestShortName"));
        assert!(diag.to_string().contains("manifestShortName"));
    }

    #[test]
    fn test_manifest_short_name_at_limit() {
        let config: SiteConfig = test_config_with("manifestShortName", "\"Luke Oliff!!\"")
            .parse()
            .unwrap();
        assert_eq!(config.manifest_short_name.chars().count(), MANIFEST_SHORT_NAME_MAX);
    }

    #[test]
    fn test_manifest_display_values() {
        for mode in ["standalone", "fullscreen", "minimal-ui", "browser"] {
            let config: SiteConfig = test_config_with("manifestDisplay", &format!("\"{mode}\""))
                .parse()
                .unwrap();
            assert_eq!(config.manifest_display.as_str(), mode);
        }

        for bad in ["window", "Standalone", "minimal_ui", ""] {
            let diag = errors(&test_config_with("manifestDisplay", &format!("\"{bad}\"")));
            assert!(diag.has_error_for("manifestDisplay"), "{bad}");
        }
    }

    #[test]
    fn test_duplicate_social_link_names() {
        let diag = errors(&test_config_links(
            r#"[[authorSocialLinks]]
name = "github"
url = "https://github.com/lukeoliff"

[[authorSocialLinks]]
name = "twitter"
url = "https://twitter.com/mroliff"

[[authorSocialLinks]]
name = "github"
url = "https://github.com/someone-else"
"#,
        ));
        assert_eq!(diag.len(), 1);
        assert!(diag.has_error_for("authorSocialLinks[2].name"));
        assert_eq!(
            diag.errors()[0].hint.as_deref(),
            Some("already used by authorSocialLinks[0].name")
        );
    }

    #[test]
    fn test_social_link_url_checked() {
        let diag = errors(&test_config_links(
            "[[authorSocialLinks]]\nname = \"github\"\nurl = \"github.com/lukeoliff\"\n",
        ));
        assert!(diag.has_error_for("authorSocialLinks[0].url"));
    }

    #[test]
    fn test_site_link() {
        let config: SiteConfig = test_config_with(
            "siteLink",
            "{ rel = \"me\", href = \"https://mastodon.social/@lukeoliff\" }",
        )
        .parse()
        .unwrap();
        assert_eq!(
            config.site_link,
            Some(SiteLink {
                rel: "me".into(),
                href: "https://mastodon.social/@lukeoliff".into(),
            })
        );

        let diag = errors(&test_config_with("siteLink", "{ rel = \"\", href = \"nope\" }"));
        assert!(diag.has_error_for("siteLink.rel"));
        assert!(diag.has_error_for("siteLink.href"));
    }

    #[test]
    fn test_all_violations_reported_at_once() {
        let content = test_config_with("manifestShortName", "\"Luke Oliff Extended Name\"");
        let content = content
            .replace("manifestDisplay = \"standalone\"", "manifestDisplay = \"window\"")
            .replace("siteUrl = \"https://lukeoliff.com\"", "siteUrl = \"lukeoliff.com\"")
            .replace("manifestThemeColor = \"#666\"", "manifestThemeColor = \"#66\"")
            .replace("siteLanguage = \"en\"", "siteLanguage = \"english\"")
            .replace("authorTwitterAccount = \"mroliff\"", "authorTwitterAccount = \"@mroliff\"")
            .replace("manifestStartUrl = \"/index.html\"", "manifestStartUrl = \"index.html\"")
            .replace("pathPrefix = \"\"", "pathPrefix = \"blog\"");
        let diag = errors(&content);

        for field in [
            "siteUrl",
            "pathPrefix",
            "siteLanguage",
            "authorTwitterAccount",
            "manifestShortName",
            "manifestStartUrl",
            "manifestThemeColor",
            "manifestDisplay",
        ] {
            assert!(diag.has_error_for(field), "{field}: {diag}");
        }
        assert_eq!(diag.len(), 8);
    }

    #[test]
    fn test_unknown_keys_are_warnings() {
        let content = test_config_with("siteAuthor", "\"someone\"");
        let (_, diag) = SiteConfig::parse(&content).unwrap();
        assert!(diag.warnings().iter().any(|(field, _)| field.contains("siteAuthor")));
    }

    #[test]
    fn test_soft_limits_are_warnings() {
        let long = "x".repeat(61);
        let content = test_config_with("shortSiteTitle", &format!("\"{long}\""))
            .replace("siteUrl = \"https://lukeoliff.com\"", "siteUrl = \"https://lukeoliff.com/\"");
        let (config, diag) = SiteConfig::parse(&content).unwrap();
        assert_eq!(config.short_site_title, long);
        assert_eq!(config.site_url, "https://lukeoliff.com/");
        assert_eq!(diag.warnings().len(), 2);
    }

    #[test]
    fn test_invalid_toml() {
        let err = SiteConfig::parse("siteTitle = \"unterminated").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
        let message = err.to_string();
        assert!(message.starts_with("failed to parse config: "));
        assert!(message.contains("line 1"), "{message}");
    }

    #[test]
    fn test_wrong_types_are_reported_with_other_errors() {
        let content = test_config_with("siteTitle", "42")
            .replace("manifestShortName = \"Luke Oliff\"", "manifestShortName = \"Luke Oliff Extended Name\"")
            .replace("manifestDisplay = \"standalone\"", "manifestDisplay = \"window\"");
        let diag = errors(&content);

        assert!(diag.has_error_for("siteTitle"));
        assert!(diag.has_error_for("manifestShortName"));
        assert!(diag.has_error_for("manifestDisplay"));
        assert_eq!(diag.len(), 3);
        let title = diag.errors().iter().find(|e| e.field == "siteTitle").unwrap();
        assert_eq!(title.message, "expected a string, found integer");
    }

    #[test]
    fn test_wrong_types_in_tables_and_lists() {
        let content = test_config_with("siteLink", "\"https://mastodon.social/@lukeoliff\"")
            .replace("manifestDisplay = \"standalone\"", "manifestDisplay = true");
        let diag = errors(&content);
        assert!(diag.has_error_for("siteLink"));
        assert!(diag.has_error_for("manifestDisplay"));
        assert_eq!(diag.len(), 2);

        let diag = errors(&test_config_links("authorSocialLinks = \"github\"\n"));
        assert!(diag.has_error_for("authorSocialLinks"));

        let diag = errors(&test_config_links(
            "authorSocialLinks = [\"github\", { name = \"x\", url = 7 }]\n",
        ));
        assert!(diag.has_error_for("authorSocialLinks[0]"));
        assert!(diag.has_error_for("authorSocialLinks[1].url"));
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_unknown_keys_in_nested_tables_are_warnings() {
        let content = test_config_with(
            "siteLink",
            "{ rel = \"me\", href = \"https://mastodon.social/@lukeoliff\", title = \"x\" }",
        )
        .replace("url = \"https://github.com/lukeoliff\"", "url = \"https://github.com/lukeoliff\"\nicon = \"gh\"");
        let (config, diag) = SiteConfig::parse(&content).unwrap();
        assert!(config.site_link.is_some());
        let fields: Vec<&str> = diag.warnings().iter().map(|(field, _)| field.as_str()).collect();
        assert_eq!(fields, ["siteLink.title", "authorSocialLinks[0].icon"]);
    }

    #[test]
    fn test_load_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, crate::embed::SITE_TOML).unwrap();

        let source = ConfigSource::file(&path);
        let first = SiteConfig::load(&source).unwrap();
        let second = SiteConfig::load(&source).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, SiteConfig::load(&ConfigSource::Embedded).unwrap());
    }

    #[test]
    fn test_load_missing_file() {
        let err = SiteConfig::load(&ConfigSource::file("/nonexistent/site.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_field_paths_use_source_keys() {
        assert_eq!(SiteConfig::FIELDS.manifest_short_name.as_str(), "manifestShortName");
        assert_eq!(SiteConfig::FIELDS.header_sub_title.as_str(), "headerSubTitle");
        assert_eq!(SiteConfig::FIELDS.author_social_links.as_str(), "authorSocialLinks");
        assert_eq!(SocialLink::FIELDS.url.as_str(), "url");
    }

    #[test]
    fn test_url_for() {
        let mut config = SiteConfig::embedded().unwrap();
        assert_eq!(
            config.url_for("/posts/hello/"),
            "https://lukeoliff.com/posts/hello/"
        );
        assert_eq!(config.url_for(""), "https://lukeoliff.com/");
        assert_eq!(config.image_url(), "https://lukeoliff.com/preview.jpg");

        config.path_prefix = "/blog".into();
        assert_eq!(
            config.url_for("posts/hello/"),
            "https://lukeoliff.com/blog/posts/hello/"
        );
    }

    #[test]
    fn test_title_and_handle_helpers() {
        let config = SiteConfig::embedded().unwrap();
        assert_eq!(config.title_for(Some("Hello")), "Hello - Luke Oliff");
        assert_eq!(config.title_for(None), "Luke Oliff");
        assert_eq!(config.title_for(Some("  ")), "Luke Oliff");
        assert_eq!(config.twitter_handle(), "@mroliff");
        assert_eq!(
            config.social_link("github").map(|l| l.url.as_str()),
            Some("https://github.com/lukeoliff")
        );
        assert!(config.social_link("mastodon").is_none());
    }

    #[test]
    fn test_serialize_round_trip_through_validation() {
        let config = SiteConfig::embedded().unwrap();
        let toml = toml::to_string(&config).unwrap();
        let reparsed: SiteConfig = toml.parse().unwrap();
        assert_eq!(config, reparsed);
    }
}
