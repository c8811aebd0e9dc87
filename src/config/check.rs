//! Field-level format checks.
//!
//! Each check reports into [`ConfigDiagnostics`] instead of returning early,
//! so one validation pass surfaces every problem in the file.

use super::ConfigDiagnostics;
use lightningcss::{traits::Parse, values::color::CssColor};
use regex::Regex;
use std::{path::Path, sync::LazyLock};

/// Twitter/X handles: 1-15 word characters, no leading `@`.
static TWITTER_HANDLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]{1,15}$").expect("valid regex"));

/// ISO 639-1 two-letter language codes (sorted for binary search).
const ISO_639_1: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg", "bi",
    "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv", "cy", "da", "de",
    "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi", "fj", "fo", "fr", "fy",
    "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr", "ht", "hu", "hy", "hz", "ia",
    "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja", "jv", "ka", "kg", "ki", "kj", "kk",
    "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw", "ky", "la", "lb", "lg", "li", "ln", "lo",
    "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my", "na", "nb", "nd",
    "ne", "ng", "nl", "nn", "no", "nr", "nv", "ny", "oc", "oj", "om", "or", "os", "pa", "pi", "pl",
    "ps", "pt", "qu", "rm", "rn", "ro", "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk", "sl",
    "sm", "sn", "so", "sq", "sr", "ss", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti", "tk",
    "tl", "tn", "to", "tr", "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa",
    "wo", "xh", "yi", "yo", "za", "zh", "zu",
];

/// Report a blank value. Returns `true` if the value is non-blank.
pub fn non_empty(diag: &mut ConfigDiagnostics, field: &str, value: &str) -> bool {
    if value.trim().is_empty() {
        diag.error(field, "must not be empty");
        return false;
    }
    true
}

/// Absolute `http`/`https` URL with a host.
pub fn http_url(diag: &mut ConfigDiagnostics, field: &str, value: &str) {
    match url::Url::parse(value) {
        Ok(parsed) => {
            // Must be http or https
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            }
            // Must have a valid host
            if parsed.host_str().is_none_or(str::is_empty) {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL '{value}': {e}"),
                "use format like https://example.com",
            );
        }
    }
}

/// Empty, or a path starting with `/`.
pub fn path_prefix(diag: &mut ConfigDiagnostics, field: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    if !value.starts_with('/') {
        diag.error_with_hint(
            field,
            format!("'{value}' must start with '/'"),
            format!("use \"/{}\" or leave it empty", value.trim_start_matches('/')),
        );
    } else if value.len() > 1 && value.ends_with('/') {
        diag.warn(field, "trailing '/' produces double slashes in generated URLs");
    }
}

/// Site-absolute path such as `/index.html`.
pub fn absolute_path(diag: &mut ConfigDiagnostics, field: &str, value: &str) {
    if !value.starts_with('/') {
        diag.error_with_hint(
            field,
            format!("'{value}' must be a path starting with '/'"),
            "e.g. \"/index.html\"",
        );
    }
}

/// Relative file name such as `preview.jpg`.
pub fn file_name(diag: &mut ConfigDiagnostics, field: &str, value: &str) {
    let path = Path::new(value);
    if path.is_absolute() || value.ends_with('/') || path.file_name().is_none() {
        diag.error_with_hint(
            field,
            format!("'{value}' is not a relative file name"),
            "e.g. \"preview.jpg\"",
        );
    }
}

/// Registered ISO 639-1 code.
pub fn language_code(diag: &mut ConfigDiagnostics, field: &str, value: &str) {
    if ISO_639_1.binary_search(&value).is_err() {
        diag.error_with_hint(
            field,
            format!("'{value}' is not an ISO 639-1 language code"),
            "use the two-letter lowercase code, e.g. \"en\"",
        );
    }
}

/// Handle without the leading `@`.
pub fn twitter_handle(diag: &mut ConfigDiagnostics, field: &str, value: &str) {
    if TWITTER_HANDLE.is_match(value) {
        return;
    }
    match value.strip_prefix('@') {
        Some(bare) => diag.error_with_hint(
            field,
            format!("'{value}' must not start with '@'"),
            format!("use \"{bare}\""),
        ),
        None => diag.error(
            field,
            format!("'{value}' is not a handle (1-15 letters, digits or '_')"),
        ),
    }
}

/// Any CSS color except `currentcolor`, which has no meaning outside a stylesheet.
pub fn css_color(diag: &mut ConfigDiagnostics, field: &str, value: &str) {
    match CssColor::parse_string(value) {
        Ok(CssColor::CurrentColor) => {
            diag.error(field, "'currentcolor' cannot be used outside a stylesheet");
        }
        Ok(_) => {}
        Err(_) => {
            diag.error_with_hint(
                field,
                format!("'{value}' is not a valid CSS color"),
                "e.g. \"white\", \"#666\" or \"rgb(102 102 102)\"",
            );
        }
    }
}

/// At most `max` characters (Unicode scalar values).
pub fn max_chars(diag: &mut ConfigDiagnostics, field: &str, value: &str, max: usize) {
    let count = value.chars().count();
    if count > max {
        diag.error(
            field,
            format!("'{value}' is {count} characters long, at most {max} allowed"),
        );
    }
}
