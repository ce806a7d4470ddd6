//! Character pool assembly for password generation.

use std::fmt;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!#$%&()*+,-./:;<=>?@[]^_{|}~";

/// One of the four fixed character categories.
///
/// Each class maps to a literal set; the sets never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// Canonical order used when concatenating the pool.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    /// The literal characters this class contributes.
    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    /// Label shown next to the toggle.
    pub fn title(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "Include Lowercase Letters",
            CharacterClass::Uppercase => "Include Uppercase Letters",
            CharacterClass::Digits => "Include Numbers",
            CharacterClass::Symbols => "Include Symbols",
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of enabled character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassSet(u8);

impl ClassSet {
    pub fn empty() -> Self {
        Self(0)
    }

    #[cfg(test)]
    pub fn all() -> Self {
        CharacterClass::ALL.into_iter().collect()
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharacterClass) {
        self.0 &= !class.bit();
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        if enabled {
            self.insert(class);
        } else {
            self.remove(class);
        }
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Enabled classes in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.contains(*class))
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

/// Ordered pool of characters eligible for sampling.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    /// Entropy in bits of a password of `length` uniform draws from this pool.
    pub fn entropy_bits(&self, length: usize) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        length as f64 * (self.0.len() as f64).log2()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Build the character pool from the enabled classes.
///
/// Disabled classes are skipped; an empty set gives an empty alphabet.
pub fn build(classes: &ClassSet) -> Alphabet {
    let capacity = classes.iter().map(|class| class.chars().len()).sum();
    let mut chars = Vec::with_capacity(capacity);

    for class in classes.iter() {
        chars.extend(class.chars().chars());
    }

    Alphabet(chars)
}
