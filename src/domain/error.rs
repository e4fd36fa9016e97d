//! Error taxonomy shared by all cifra services.

use thiserror::Error;

/// Errors produced by the cipher, password and numeral services.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CifraError {
    /// The input text has no characters to resolve an alphabet from.
    #[error("input text is empty, cannot resolve an alphabet from it")]
    EmptyInput,

    /// The shift amount does not fit the resolved alphabet.
    #[error("shift {shift} is out of range for a {alphabet_len}-letter alphabet (must be 0..{alphabet_len})")]
    ShiftOutOfRange { shift: u32, alphabet_len: usize },

    /// An alphabetic character that is not part of the resolved alphabet.
    #[error("character '{ch}' is not part of the {language} alphabet")]
    ForeignCharacter { ch: char, language: &'static str },

    /// Requested password length cannot satisfy the enabled classes.
    #[error("password length {length} is invalid, need at least {minimum}")]
    InvalidPasswordLength { length: usize, minimum: usize },

    /// No character class enabled for password generation.
    #[error("no character classes enabled, password would be empty")]
    EmptyCharacterPool,

    /// Arabic value outside the representable Roman range.
    #[error("{0} cannot be written as a Roman numeral (supported range is 1..=3999)")]
    NumberOutOfRomanRange(i64),

    /// Unknown symbol in a Roman numeral.
    #[error("'{ch}' is not a Roman numeral digit")]
    InvalidRomanDigit { ch: char },

    /// A value that should be an Arabic number but does not parse as one.
    #[error("'{value}' is not a valid Arabic number")]
    InvalidArabicNumber { value: String },

    /// Blank entry in a comma-separated numeral list.
    #[error("empty value in numeral list")]
    EmptyNumeralValue,
}

/// Convenience alias used throughout the service layer.
pub type Result<T> = std::result::Result<T, CifraError>;
