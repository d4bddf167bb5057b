//! Validated input words.

use core::fmt;
use core::ops::Deref;
use core::str::Chars;

use unicode_general_category::{get_general_category, GeneralCategory};

use super::error::TrieError;

/// A word accepted by [`PrefixTree`](super::PrefixTree).
///
/// Construction checks once that the string is non-empty and made only of
/// letters (Unicode general categories `Lu`, `Ll`, `Lt`, `Lm` and `Lo`).
/// Letter numbers and combining marks are not letters. Holding a `Word`
/// is proof of that, so the tree never validates it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word<'a>(&'a str);

impl<'a> Word<'a> {
    /// Validates `word`.
    ///
    /// # Errors
    /// Returns [`TrieError::InvalidInput`] if `word` is empty or contains a
    /// character that is not alphabetic.
    pub fn new(word: &'a str) -> Result<Self, TrieError> {
        if is_alphabetic(word) {
            Ok(Self(word))
        } else {
            Err(TrieError::InvalidInput)
        }
    }

    /// The validated string.
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Iterates over the letters of the word.
    pub fn chars(&self) -> Chars<'a> {
        self.0.chars()
    }
}

/// Whole-string check: an empty string is not alphabetic.
fn is_alphabetic(word: &str) -> bool {
    !word.is_empty() && word.chars().all(is_letter)
}

fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

impl<'a> TryFrom<&'a str> for Word<'a> {
    type Error = TrieError;

    fn try_from(word: &'a str) -> Result<Self, Self::Error> {
        Self::new(word)
    }
}

impl Deref for Word<'_> {
    type Target = str;

    fn deref(&self) -> &str {
        self.0
    }
}

impl AsRef<str> for Word<'_> {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl fmt::Display for Word<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
