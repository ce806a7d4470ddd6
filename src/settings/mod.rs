//! User defaults for the form.

mod file;

use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::Result;
use crate::form::{GenerationConfig, LENGTH_MAX, LENGTH_MIN};
use crate::pass::{CharacterClass, ClassSet};

pub use file::default_path;

/// Initial length and class toggles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    #[serde(deserialize_with = "clamped_length")]
    pub length: u8,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Settings {
    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file gives the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => file::load(path),
            None => file::load(&default_path()),
        }
    }

    pub fn classes(&self) -> ClassSet {
        let mut set = ClassSet::empty();
        set.set(CharacterClass::Lowercase, self.lowercase);
        set.set(CharacterClass::Uppercase, self.uppercase);
        set.set(CharacterClass::Digits, self.digits);
        set.set(CharacterClass::Symbols, self.symbols);
        set
    }

    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig::new(self.classes(), self.length)
    }
}

/// Any integer is accepted and pulled into the length range.
fn clamped_length<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(raw.clamp(LENGTH_MIN as i64, LENGTH_MAX as i64) as u8)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: LENGTH_MIN,
            lowercase: false,
            uppercase: false,
            digits: false,
            symbols: false,
        }
    }
}
