//! Alphabet resolution for the Caesar cipher.
//!
//! Two fixed lowercase alphabets are supported: the 33-letter Russian set
//! (including `ё`) and the 26-letter English set. When no language is given
//! explicitly, the alphabet is detected from the first character of the
//! input text; a text starting with anything outside the Cyrillic set falls
//! back to English.

use crate::cli::Language;
use crate::domain::error::{CifraError, Result};
use log::debug;

const CYRILLIC: [char; 33] = [
    'а', 'б', 'в', 'г', 'д', 'е', 'ё', 'ж', 'з', 'и', 'й', 'к', 'л', 'м', 'н', 'о', 'п', 'р',
    'с', 'т', 'у', 'ф', 'х', 'ц', 'ч', 'ш', 'щ', 'ъ', 'ы', 'ь', 'э', 'ю', 'я',
];

const LATIN: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Fixed ordered lowercase letter set used for index-based substitution.
#[derive(Debug)]
pub struct Alphabet {
    language: Language,
    letters: &'static [char],
}

impl Alphabet {
    pub fn for_language(language: Language) -> Self {
        let letters: &'static [char] = match language {
            Language::Ru => &CYRILLIC,
            Language::En => &LATIN,
        };
        Alphabet { language, letters }
    }

    /// Resolves the alphabet from the first character of `text`.
    ///
    /// A lowercased first character inside the Cyrillic set selects Russian;
    /// everything else (Latin letters, digits, punctuation) selects English.
    pub fn detect(text: &str) -> Result<Self> {
        let first = text.chars().next().ok_or(CifraError::EmptyInput)?;
        let lowered = lowercase_char(first);
        let language = if CYRILLIC.contains(&lowered) {
            Language::Ru
        } else {
            Language::En
        };
        debug!("detected {:?} alphabet from first character '{}'", language, first);
        Ok(Alphabet::for_language(language))
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Human-readable alphabet name for error messages.
    pub fn name(&self) -> &'static str {
        match self.language {
            Language::Ru => "russian",
            Language::En => "english",
        }
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Position of a lowercase letter, or `None` for characters outside the set.
    pub fn position(&self, ch: char) -> Option<usize> {
        self.letters.iter().position(|letter| *letter == ch)
    }

    /// Letter at `index`. Callers keep indices inside `0..len()`.
    pub fn letter_at(&self, index: usize) -> char {
        self.letters[index]
    }
}

/// First scalar of the lowercase mapping; identity for caseless characters.
pub fn lowercase_char(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

/// First scalar of the uppercase mapping; identity for caseless characters.
pub fn uppercase_char(ch: char) -> char {
    ch.to_uppercase().next().unwrap_or(ch)
}
