//! Settings file loading.

use std::env;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::Settings;
use crate::error::{Error, Result};

pub fn load(path: &Path) -> Result<Settings> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(Error::SettingsRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    toml::from_str(&data).map_err(|source| Error::SettingsParse {
        path: path.to_path_buf(),
        source,
    })
}

#[inline]
pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passform/settings.toml")
}
