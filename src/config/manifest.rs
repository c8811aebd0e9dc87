//! Web app manifest display mode.

use serde::Serialize;
use std::{fmt, str::FromStr};

/// `display` member of a web app manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ManifestDisplay {
    #[default]
    Standalone,
    Fullscreen,
    MinimalUi,
    Browser,
}

impl ManifestDisplay {
    pub const ALL: [Self; 4] = [
        Self::Standalone,
        Self::Fullscreen,
        Self::MinimalUi,
        Self::Browser,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standalone => "standalone",
            Self::Fullscreen => "fullscreen",
            Self::MinimalUi => "minimal-ui",
            Self::Browser => "browser",
        }
    }

    /// Allowed values, for hints.
    pub fn allowed() -> String {
        Self::ALL
            .iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl fmt::Display for ManifestDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized `display` value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported display mode '{0}'")]
pub struct UnknownDisplay(pub String);

impl FromStr for ManifestDisplay {
    type Err = UnknownDisplay;

    /// Exact match only; `Standalone` or ` standalone` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownDisplay(s.to_string()))
    }
}
