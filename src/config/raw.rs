//! Lenient deserialization shape of `site.toml`.
//!
//! Every key is optional and kept as a plain TOML value, so a missing key,
//! a value of the wrong type or an unknown display mode becomes a diagnostic
//! next to all the others instead of aborting deserialization on the first
//! one. Only broken TOML syntax fails before validation.

use super::{ConfigDiagnostics, FieldPath, ManifestDisplay, SiteConfig, SiteLink, SocialLink, check};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use toml::{Table, Value};

/// Soft limit for `shortSiteTitle`, which is appended to every page title.
const SHORT_TITLE_SOFT_LIMIT: usize = 60;

/// Hard limit for `manifestShortName` (launcher labels).
pub const MANIFEST_SHORT_NAME_MAX: usize = 12;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RawSiteConfig {
    site_title: Option<Value>,
    short_site_title: Option<Value>,
    site_description: Option<Value>,
    site_url: Option<Value>,
    site_link: Option<Value>,
    path_prefix: Option<Value>,
    site_image: Option<Value>,
    site_language: Option<Value>,
    author_name: Option<Value>,
    author_twitter_account: Option<Value>,
    header_title: Option<Value>,
    header_sub_title: Option<Value>,
    manifest_name: Option<Value>,
    manifest_short_name: Option<Value>,
    manifest_start_url: Option<Value>,
    manifest_background_color: Option<Value>,
    manifest_theme_color: Option<Value>,
    manifest_display: Option<Value>,
    author_social_links: Option<Value>,
}

/// Report a missing key or a non-string value. Strings are returned untouched.
fn present(diag: &mut ConfigDiagnostics, field: &str, value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s),
        Some(other) => {
            diag.error(field, format!("expected a string, found {}", other.type_str()));
            None
        }
        None => {
            diag.error(field, "required field is missing");
            None
        }
    }
}

/// Report a missing, mistyped or blank key. Only non-blank strings are returned.
fn required(diag: &mut ConfigDiagnostics, field: &str, value: Option<Value>) -> Option<String> {
    present(diag, field, value).filter(|v| check::non_empty(diag, field, v))
}

/// Report a value that is not a table.
fn table(diag: &mut ConfigDiagnostics, field: &str, value: Value) -> Option<Table> {
    match value {
        Value::Table(table) => Some(table),
        other => {
            diag.error(field, format!("expected a table, found {}", other.type_str()));
            None
        }
    }
}

/// Warn about keys left over once every known key was taken out of `table`.
fn warn_unknown(diag: &mut ConfigDiagnostics, field: &str, table: Table) {
    for key in table.keys() {
        diag.warn(format!("{field}.{key}"), "unknown key, ignored");
    }
}

impl RawSiteConfig {
    /// Check every field and build the record.
    ///
    /// The returned record is only meaningful when `diag` has no errors:
    /// rejected fields are left at their defaults.
    pub(super) fn validate(self, diag: &mut ConfigDiagnostics) -> SiteConfig {
        let f = SiteConfig::FIELDS;

        let site_title = required(diag, f.site_title.as_str(), self.site_title);

        let short_site_title =
            required(diag, f.short_site_title.as_str(), self.short_site_title);
        if let Some(title) = &short_site_title
            && title.chars().count() > SHORT_TITLE_SOFT_LIMIT
        {
            diag.warn(
                f.short_site_title,
                format!("longer than {SHORT_TITLE_SOFT_LIMIT} characters, page titles may be cut off"),
            );
        }

        let site_description =
            required(diag, f.site_description.as_str(), self.site_description);

        let site_url = required(diag, f.site_url.as_str(), self.site_url);
        if let Some(url) = &site_url {
            check::http_url(diag, f.site_url.as_str(), url);
            if url.ends_with('/') {
                diag.warn(f.site_url, "should not have a trailing slash");
            }
        }

        let site_link = self
            .site_link
            .and_then(|value| validate_site_link(value, f.site_link, diag));

        let path_prefix = present(diag, f.path_prefix.as_str(), self.path_prefix);
        if let Some(prefix) = &path_prefix {
            check::path_prefix(diag, f.path_prefix.as_str(), prefix);
        }

        let site_image = required(diag, f.site_image.as_str(), self.site_image);
        if let Some(image) = &site_image {
            check::file_name(diag, f.site_image.as_str(), image);
        }

        let site_language = required(diag, f.site_language.as_str(), self.site_language);
        if let Some(language) = &site_language {
            check::language_code(diag, f.site_language.as_str(), language);
        }

        let author_name = required(diag, f.author_name.as_str(), self.author_name);

        let author_twitter_account = required(
            diag,
            f.author_twitter_account.as_str(),
            self.author_twitter_account,
        );
        if let Some(handle) = &author_twitter_account {
            check::twitter_handle(diag, f.author_twitter_account.as_str(), handle);
        }

        let header_title = required(diag, f.header_title.as_str(), self.header_title);
        let header_sub_title =
            required(diag, f.header_sub_title.as_str(), self.header_sub_title);

        let manifest_name = required(diag, f.manifest_name.as_str(), self.manifest_name);

        let manifest_short_name =
            required(diag, f.manifest_short_name.as_str(), self.manifest_short_name);
        if let Some(name) = &manifest_short_name {
            check::max_chars(
                diag,
                f.manifest_short_name.as_str(),
                name,
                MANIFEST_SHORT_NAME_MAX,
            );
        }

        let manifest_start_url =
            required(diag, f.manifest_start_url.as_str(), self.manifest_start_url);
        if let Some(start) = &manifest_start_url {
            check::absolute_path(diag, f.manifest_start_url.as_str(), start);
        }

        let manifest_background_color = required(
            diag,
            f.manifest_background_color.as_str(),
            self.manifest_background_color,
        );
        if let Some(color) = &manifest_background_color {
            check::css_color(diag, f.manifest_background_color.as_str(), color);
        }

        let manifest_theme_color =
            required(diag, f.manifest_theme_color.as_str(), self.manifest_theme_color);
        if let Some(color) = &manifest_theme_color {
            check::css_color(diag, f.manifest_theme_color.as_str(), color);
        }

        let manifest_display = present(diag, f.manifest_display.as_str(), self.manifest_display)
            .and_then(|value| match value.parse::<ManifestDisplay>() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    diag.error_with_hint(
                        f.manifest_display,
                        e.to_string(),
                        format!("use one of: {}", ManifestDisplay::allowed()),
                    );
                    None
                }
            });

        let author_social_links = match self.author_social_links {
            Some(links) => validate_social_links(links, f.author_social_links, diag),
            None => {
                diag.error_with_hint(
                    f.author_social_links,
                    "required field is missing",
                    "use `authorSocialLinks = []` for a site without social links",
                );
                Vec::new()
            }
        };

        SiteConfig {
            site_title: site_title.unwrap_or_default(),
            short_site_title: short_site_title.unwrap_or_default(),
            site_description: site_description.unwrap_or_default(),
            site_url: site_url.unwrap_or_default(),
            path_prefix: path_prefix.unwrap_or_default(),
            site_image: site_image.unwrap_or_default(),
            site_language: site_language.unwrap_or_default(),
            author_name: author_name.unwrap_or_default(),
            author_twitter_account: author_twitter_account.unwrap_or_default(),
            header_title: header_title.unwrap_or_default(),
            header_sub_title: header_sub_title.unwrap_or_default(),
            manifest_name: manifest_name.unwrap_or_default(),
            manifest_short_name: manifest_short_name.unwrap_or_default(),
            manifest_start_url: manifest_start_url.unwrap_or_default(),
            manifest_background_color: manifest_background_color.unwrap_or_default(),
            manifest_theme_color: manifest_theme_color.unwrap_or_default(),
            manifest_display: manifest_display.unwrap_or_default(),
            site_link,
            author_social_links,
        }
    }
}

fn validate_site_link(
    value: Value,
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Option<SiteLink> {
    let mut entry = table(diag, field.as_str(), value)?;
    let keys = SiteLink::FIELDS;

    let rel_field = field.child(keys.rel);
    let rel = required(diag, &rel_field, entry.remove(keys.rel.as_str()));

    let href_field = field.child(keys.href);
    let href = required(diag, &href_field, entry.remove(keys.href.as_str()));
    if let Some(href) = &href {
        check::http_url(diag, &href_field, href);
    }

    warn_unknown(diag, field.as_str(), entry);
    Some(SiteLink {
        rel: rel.unwrap_or_default(),
        href: href.unwrap_or_default(),
    })
}

fn validate_social_links(
    value: Value,
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Vec<SocialLink> {
    let links = match value {
        Value::Array(links) => links,
        other => {
            diag.error(
                field,
                format!("expected an array of tables, found {}", other.type_str()),
            );
            return Vec::new();
        }
    };
    let keys = SocialLink::FIELDS;

    // name -> index of first occurrence
    let mut seen: FxHashMap<String, usize> = FxHashMap::default();

    links
        .into_iter()
        .enumerate()
        .filter_map(|(i, value)| {
            let entry_field = field.index(i);
            let mut entry = table(diag, &entry_field, value)?;

            let name_field = field.item(i, keys.name);
            let name = required(diag, &name_field, entry.remove(keys.name.as_str()));
            if let Some(name) = &name {
                if let Some(first) = seen.get(name) {
                    diag.error_with_hint(
                        &name_field,
                        format!("duplicate social link name '{name}'"),
                        format!("already used by {}", field.item(*first, keys.name)),
                    );
                } else {
                    seen.insert(name.clone(), i);
                }
            }

            let url_field = field.item(i, keys.url);
            let url = required(diag, &url_field, entry.remove(keys.url.as_str()));
            if let Some(url) = &url {
                check::http_url(diag, &url_field, url);
            }

            warn_unknown(diag, &entry_field, entry);
            Some(SocialLink {
                name: name.unwrap_or_default(),
                url: url.unwrap_or_default(),
            })
        })
        .collect()
}
