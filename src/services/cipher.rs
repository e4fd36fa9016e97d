//! Caesar shift engine with case restoration.
//!
//! The whole run is described by an immutable [`CipherRequest`]; the
//! transformation itself is pure, so both halves are unit-testable without
//! touching the CLI. Non-alphabetic characters pass through verbatim,
//! alphabetic ones are looked up case-insensitively in the resolved
//! alphabet, shifted, and re-cased against the original text.
//!
//! Both directions wrap with modular arithmetic, so a shift in
//! `0..alphabet_len` always round-trips. Shifts outside that range are
//! rejected up front.

use crate::cli::{Direction, Language};
use crate::domain::error::{CifraError, Result};
use crate::domain::models::{CipherRequest, Mode};
use crate::services::alphabet::{lowercase_char, uppercase_char, Alphabet};
use log::debug;

/// Runs the full pipeline: resolve alphabet, validate the shift, shift each
/// letter, restore the original casing. Returns the resolved language along
/// with the transformed text.
pub fn transform(request: &CipherRequest) -> Result<(Language, String)> {
    if request.text.is_empty() {
        return Err(CifraError::EmptyInput);
    }
    let alphabet = match request.language {
        Some(language) => Alphabet::for_language(language),
        None => Alphabet::detect(&request.text)?,
    };
    if (request.shift as usize) >= alphabet.len() {
        return Err(CifraError::ShiftOutOfRange {
            shift: request.shift,
            alphabet_len: alphabet.len(),
        });
    }
    let forward = steps_forward(request.mode, request.direction);
    debug!(
        "{:?} over {} alphabet, shift {}, {}",
        request.mode,
        alphabet.name(),
        request.shift,
        if forward { "forward" } else { "backward" }
    );
    let shifted = shift_text(&request.text, &alphabet, request.shift as usize, forward)?;
    Ok((alphabet.language(), restore_case(&request.text, &shifted)))
}

/// Whether the run moves forward through the alphabet.
///
/// Encryption moves in the configured direction; decryption inverts it.
fn steps_forward(mode: Mode, direction: Direction) -> bool {
    matches!(
        (mode, direction),
        (Mode::Encrypt, Direction::Right) | (Mode::Decrypt, Direction::Left)
    )
}

/// New position of a letter index, wrapping at both alphabet bounds.
/// Callers guarantee `index < len` and `shift < len`.
fn shifted_index(index: usize, shift: usize, len: usize, forward: bool) -> usize {
    if forward {
        (index + shift) % len
    } else {
        (index + len - shift) % len
    }
}

/// Shifts every alphabetic character, emitting lowercase letters; everything
/// else passes through unchanged. One output character per input character.
fn shift_text(text: &str, alphabet: &Alphabet, shift: usize, forward: bool) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if !ch.is_alphabetic() {
            out.push(ch);
            continue;
        }
        let index = alphabet
            .position(lowercase_char(ch))
            .ok_or(CifraError::ForeignCharacter {
                ch,
                language: alphabet.name(),
            })?;
        out.push(alphabet.letter_at(shifted_index(index, shift, alphabet.len(), forward)));
    }
    Ok(out)
}

/// Reapplies the original per-character capitalization: positions that were
/// uppercase in `original` become uppercase in the output when the
/// transformed character is alphabetic.
fn restore_case(original: &str, transformed: &str) -> String {
    original
        .chars()
        .zip(transformed.chars())
        .map(|(orig, out)| {
            if orig.is_uppercase() && out.is_alphabetic() {
                uppercase_char(out)
            } else {
                out
            }
        })
        .collect()
}
