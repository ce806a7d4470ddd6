use std::path::PathBuf;

use clap::Parser;

use crate::form::{GenerationConfig, LENGTH_MAX, LENGTH_MIN};
use crate::pass::{CharacterClass, ClassSet};
use crate::settings::Settings;

/// Password generator with an interactive form.
///
/// Run without generation flags to open the form; any of -l, -n, -b or a
/// class flag generates directly instead.
#[derive(Debug, Parser)]
#[command(name = "passform", version)]
pub struct Args {
    /// Password length
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(LENGTH_MIN as i64..=LENGTH_MAX as i64))]
    pub length: Option<u8>,

    /// Include lowercase letters
    #[arg(long)]
    pub lowercase: bool,

    /// Include uppercase letters
    #[arg(long)]
    pub uppercase: bool,

    /// Include numbers
    #[arg(long)]
    pub digits: bool,

    /// Include symbols
    #[arg(long)]
    pub symbols: bool,

    /// Number of passwords to print
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub number: Option<u32>,

    /// Copy the password to the clipboard instead of printing it
    #[arg(short = 'b', long = "board", conflicts_with = "number")]
    pub board: bool,

    /// Suppress warnings and strength output
    #[arg(short, long)]
    pub quiet: bool,

    /// Settings file (default: ~/.config/passform/settings.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,
}

impl Args {
    fn class_flags(&self) -> ClassSet {
        let mut set = ClassSet::empty();
        set.set(CharacterClass::Lowercase, self.lowercase);
        set.set(CharacterClass::Uppercase, self.uppercase);
        set.set(CharacterClass::Digits, self.digits);
        set.set(CharacterClass::Symbols, self.symbols);
        set
    }

    /// True when any flag asks for direct generation.
    pub fn is_one_shot(&self) -> bool {
        self.length.is_some()
            || self.number.is_some()
            || self.board
            || !self.class_flags().is_empty()
    }

    /// Flags layered over settings. Class flags replace the saved classes
    /// as a whole.
    pub fn generation_config(&self, settings: &Settings) -> GenerationConfig {
        let flags = self.class_flags();
        let classes = if flags.is_empty() {
            settings.classes()
        } else {
            flags
        };
        GenerationConfig::new(classes, self.length.unwrap_or(settings.length))
    }
}
