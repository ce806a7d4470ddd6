//! Password generation and strength presentation.

pub mod charset;
mod generate;
pub mod strength;

pub use charset::{CharacterClass, ClassSet};
pub use generate::{Classify, Draw, GeneratedPassword, Sampler, Zxcvbn, generate};
pub use strength::{Strength, present};
