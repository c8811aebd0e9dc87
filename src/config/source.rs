//! Where the site record comes from.

use super::ConfigError;
use std::{
    borrow::Cow,
    fmt, fs,
    path::{Path, PathBuf},
};

/// Default config filename, looked up at the project root.
pub const CONFIG_FILE: &str = "site.toml";

/// Static source of the site record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// The default record compiled into the binary.
    Embedded,
    /// A TOML file on the local filesystem.
    File(PathBuf),
}

impl ConfigSource {
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    /// Read the raw TOML text.
    pub fn read(&self) -> Result<Cow<'static, str>, ConfigError> {
        match self {
            Self::Embedded => Ok(Cow::Borrowed(crate::embed::SITE_TOML)),
            Self::File(path) => {
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path.clone()));
                }
                fs::read_to_string(path)
                    .map(Cow::Owned)
                    .map_err(|err| ConfigError::Io(path.clone(), err))
            }
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => f.write_str("embedded site.toml"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
