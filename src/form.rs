//! Form state: class toggles, length, and the last generated password.

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::pass::{
    self, CharacterClass, ClassSet, Classify, Draw, GeneratedPassword, Sampler, Strength, Zxcvbn,
};

pub const LENGTH_MIN: u8 = 1;
pub const LENGTH_MAX: u8 = 21;

/// Enabled classes plus the requested length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub classes: ClassSet,
    length: u8,
}

impl GenerationConfig {
    pub fn new(classes: ClassSet, length: u8) -> Self {
        Self {
            classes,
            length: length.clamp(LENGTH_MIN, LENGTH_MAX),
        }
    }

    pub fn length(&self) -> u8 {
        self.length
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(ClassSet::empty(), LENGTH_MIN)
    }
}

/// Owns the generation config and the last password.
///
/// `D` draws characters, `C` scores them, `B` receives copies.
pub struct Form<D = Sampler<rand::rngs::OsRng>, C = Zxcvbn, B = SystemClipboard> {
    config: GenerationConfig,
    password: Option<GeneratedPassword>,
    rng: D,
    classifier: C,
    clipboard: B,
}

impl Form {
    /// Form wired to the OS RNG, zxcvbn and the system clipboard.
    pub fn system(config: GenerationConfig) -> Self {
        Form::new(config, Sampler::os(), Zxcvbn, SystemClipboard::new())
    }
}

impl<D: Draw, C: Classify, B: Clipboard> Form<D, C, B> {
    pub fn new(config: GenerationConfig, rng: D, classifier: C, clipboard: B) -> Self {
        Self {
            config,
            password: None,
            rng,
            classifier,
            clipboard,
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn password(&self) -> Option<&GeneratedPassword> {
        self.password.as_ref()
    }

    pub fn clipboard(&self) -> &B {
        &self.clipboard
    }

    /// Presented strength of the current password.
    pub fn strength(&self) -> Option<Strength> {
        self.password.as_ref().map(|p| pass::present(p.score()))
    }

    pub fn toggle_class(&mut self, class: CharacterClass, enabled: bool) {
        self.config.classes.set(class, enabled);
    }

    /// Store a new length.
    ///
    /// The slider clamps drags but not track clicks, so the value is pulled
    /// into range here to keep the config valid.
    pub fn set_length(&mut self, value: u32) {
        let clamped = value.clamp(LENGTH_MIN as u32, LENGTH_MAX as u32) as u8;
        if clamped as u32 != value {
            tracing::debug!(value, clamped, "length outside range");
        }
        self.config.length = clamped;
    }

    pub fn can_submit(&self) -> bool {
        !self.config.classes.is_empty()
    }

    pub fn can_copy(&self) -> bool {
        self.password.is_some()
    }

    /// Generate a new password, replacing the previous one.
    ///
    /// No-op when no class is enabled. Returns whether a password was made.
    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }

        let alphabet = pass::charset::build(&self.config.classes);
        let length = self.config.length as usize;
        let password = pass::generate(&alphabet, length, &mut self.rng, &self.classifier);

        tracing::debug!(
            score = password.score(),
            length,
            alphabet = alphabet.len(),
            bits = alphabet.entropy_bits(length),
            "generated password"
        );

        self.password = Some(password);
        true
    }

    /// Hand the current password to the clipboard.
    ///
    /// No-op before the first generation. Returns whether anything was sent.
    pub fn copy(&mut self) -> bool {
        let Some(password) = self.password.as_ref() else {
            return false;
        };
        self.clipboard.write_text(password.value());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::Recorder;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    type TestForm = Form<Sampler<StdRng>, Zxcvbn, Recorder>;

    fn form() -> TestForm {
        Form::new(
            GenerationConfig::default(),
            Sampler::new(StdRng::seed_from_u64(7)),
            Zxcvbn,
            Recorder::default(),
        )
    }

    #[test]
    fn test_submit_guarded_without_classes() {
        let mut form = form();
        form.set_length(8);

        assert!(!form.can_submit());
        assert!(!form.submit());
        assert!(form.password().is_none());
        assert!(form.strength().is_none());
    }

    #[test]
    fn test_lowercase_and_numbers_length_eight() {
        let mut form = form();
        form.toggle_class(CharacterClass::Lowercase, true);
        form.toggle_class(CharacterClass::Digits, true);
        form.set_length(8);

        assert!(form.submit());
        let password = form.password().unwrap();
        assert_eq!(password.value().len(), 8);
        assert!(
            password
                .value()
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
        assert_eq!(form.strength().unwrap(), pass::present(password.score()));
    }

    #[test]
    fn test_submit_replaces_password() {
        let mut form = form();
        form.toggle_class(CharacterClass::Symbols, true);
        form.set_length(21);

        form.submit();
        let first = form.password().unwrap().value().to_string();
        form.submit();
        let second = form.password().unwrap().value().to_string();

        assert_ne!(first, second);
    }

    #[test]
    fn test_toggle_does_not_generate() {
        let mut form = form();
        form.toggle_class(CharacterClass::Uppercase, true);
        assert!(form.can_submit());
        assert!(form.password().is_none());

        form.toggle_class(CharacterClass::Uppercase, false);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_disabling_all_classes_keeps_last_password() {
        let mut form = form();
        form.toggle_class(CharacterClass::Digits, true);
        form.submit();
        form.toggle_class(CharacterClass::Digits, false);

        assert!(!form.submit());
        assert!(form.password().is_some());
    }

    #[test]
    fn test_copy_guarded_until_generated() {
        let mut form = form();
        let log = form.clipboard().clone();

        assert!(!form.can_copy());
        assert!(!form.copy());
        assert!(log.0.borrow().is_empty());

        form.toggle_class(CharacterClass::Lowercase, true);
        form.submit();
        assert!(form.copy());

        let expected = form.password().unwrap().value().to_string();
        assert_eq!(*log.0.borrow(), vec![expected]);
    }

    #[test]
    fn test_set_length_clamps() {
        let mut form = form();
        form.set_length(0);
        assert_eq!(form.config().length(), LENGTH_MIN);
        form.set_length(40);
        assert_eq!(form.config().length(), LENGTH_MAX);
        form.set_length(11);
        assert_eq!(form.config().length(), 11);
    }

    #[test]
    fn test_config_new_clamps() {
        assert_eq!(GenerationConfig::new(ClassSet::all(), 0).length(), 1);
        assert_eq!(GenerationConfig::new(ClassSet::all(), 99).length(), 21);
        assert_eq!(GenerationConfig::default().length(), LENGTH_MIN);
    }
}
