//! Password generation.

use std::fmt;

use rand::Rng;
use rand::rngs::OsRng;
use zeroize::Zeroizing;

use super::charset::Alphabet;

/// Draws `count` characters from an alphabet.
///
/// Implementations must sample indices uniformly and independently, with
/// replacement.
pub trait Draw {
    fn draw(&mut self, alphabet: &Alphabet, count: usize) -> Zeroizing<String>;
}

/// Scores a password from 0 (very weak) to 4 (very strong).
///
/// Must be deterministic for a given input.
pub trait Classify {
    fn score(&self, password: &str) -> u8;
}

/// [`Draw`] over any `rand` generator.
#[derive(Debug, Clone)]
pub struct Sampler<R>(R);

impl<R: Rng> Sampler<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl Sampler<OsRng> {
    /// Sampler backed by the operating system CSPRNG.
    pub fn os() -> Self {
        Self::new(OsRng)
    }
}

impl<R: Rng> Draw for Sampler<R> {
    fn draw(&mut self, alphabet: &Alphabet, count: usize) -> Zeroizing<String> {
        let chars = alphabet.as_slice();
        let mut out = Zeroizing::new(String::with_capacity(count));
        for _ in 0..count {
            out.push(chars[self.0.gen_range(0..chars.len())]);
        }
        out
    }
}

/// [`Classify`] using the zxcvbn estimator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zxcvbn;

impl Classify for Zxcvbn {
    fn score(&self, password: &str) -> u8 {
        u8::from(zxcvbn::zxcvbn(password, &[]).score())
    }
}

/// A generated password and its strength score.
///
/// Replaced wholesale by the next generation; the value is wiped on drop.
#[derive(Clone)]
pub struct GeneratedPassword {
    value: Zeroizing<String>,
    score: u8,
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedPassword")
            .field("value", &"<redacted>")
            .field("score", &self.score)
            .finish()
    }
}

impl GeneratedPassword {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }
}

/// Generate a password of `length` characters drawn from `alphabet`.
///
/// Callers guarantee a non-empty alphabet and `length >= 1`.
pub fn generate<D, C>(
    alphabet: &Alphabet,
    length: usize,
    rng: &mut D,
    classifier: &C,
) -> GeneratedPassword
where
    D: Draw + ?Sized,
    C: Classify + ?Sized,
{
    debug_assert!(!alphabet.is_empty(), "generate called with an empty alphabet");
    debug_assert!(length >= 1, "generate called with zero length");

    let value = rng.draw(alphabet, length);
    let score = classifier.score(&value).min(4);

    GeneratedPassword { value, score }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::{self, CharacterClass, ClassSet};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct ByLength;

    impl Classify for ByLength {
        fn score(&self, password: &str) -> u8 {
            (password.len() / 5) as u8
        }
    }

    fn seeded() -> Sampler<StdRng> {
        Sampler::new(StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_length_and_membership() {
        let alphabet = charset::build(&ClassSet::all());
        let mut rng = seeded();

        for length in 1..=21 {
            let password = generate(&alphabet, length, &mut rng, &ByLength);
            assert_eq!(password.len(), length);
            for c in password.value().chars() {
                assert!(alphabet.contains(c), "{c:?} not in alphabet");
            }
        }
    }

    #[test]
    fn test_lowercase_and_digits_scenario() {
        let set: ClassSet = [CharacterClass::Lowercase, CharacterClass::Digits]
            .into_iter()
            .collect();
        let alphabet = charset::build(&set);
        let password = generate(&alphabet, 8, &mut seeded(), &Zxcvbn);

        assert_eq!(password.value().len(), 8);
        assert!(
            password
                .value()
                .chars()
                .all(|c| "abcdefghijklmnopqrstuvwxyz0123456789".contains(c))
        );
        assert!(password.score() <= 4);
    }

    #[test]
    fn test_draws_reach_every_character() {
        let alphabet = charset::build(&[CharacterClass::Digits].into_iter().collect());
        let mut rng = seeded();
        let drawn = rng.draw(&alphabet, 500);
        let mut seen: Vec<char> = drawn.chars().collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 10, "500 draws should cover all ten digits");
    }

    #[test]
    fn test_draws_cover_alphabet_evenly() {
        let alphabet = charset::build(&[CharacterClass::Digits].into_iter().collect());
        let drawn = seeded().draw(&alphabet, 10_000);

        let mut counts = [0usize; 10];
        for c in drawn.chars() {
            counts[c.to_digit(10).unwrap() as usize] += 1;
        }
        for (digit, count) in counts.iter().enumerate() {
            assert!(
                (800..1200).contains(count),
                "digit {digit} drawn {count} times out of 10000"
            );
        }
    }

    #[test]
    fn test_same_seed_same_password() {
        let alphabet = charset::build(&ClassSet::all());
        let a = generate(&alphabet, 16, &mut seeded(), &ByLength);
        let b = generate(&alphabet, 16, &mut seeded(), &ByLength);
        assert_eq!(a.value(), b.value());
        assert_eq!(a.score(), 3);
    }

    #[test]
    fn test_classifier_score_is_capped() {
        let alphabet = charset::build(&ClassSet::all());
        let password = generate(&alphabet, 30, &mut seeded(), &ByLength);
        assert_eq!(password.score(), 4);
    }

    #[test]
    fn test_zxcvbn_is_deterministic_and_ordered() {
        let weak = Zxcvbn.score("password");
        let strong = Zxcvbn.score("q7$Lw!2zR#v9@Xk&m4Tp");
        assert_eq!(weak, Zxcvbn.score("password"));
        assert_eq!(weak, 0);
        assert!(strong > weak);
        assert!(strong <= 4);
    }

    #[test]
    fn test_os_sampler() {
        let alphabet = charset::build(&ClassSet::all());
        let password = generate(&alphabet, 21, &mut Sampler::os(), &Zxcvbn);
        assert_eq!(password.len(), 21);
    }
}
