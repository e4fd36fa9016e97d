use crate::cli::{Direction, Language};
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Cipher operation selected by subcommand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Encrypt,
    Decrypt,
}

/// Immutable description of one cipher run.
///
/// `language: None` means the alphabet is detected from the first
/// character of `text`.
#[derive(Debug, Clone)]
pub struct CipherRequest {
    pub text: String,
    pub mode: Mode,
    pub shift: u32,
    pub direction: Direction,
    pub language: Option<Language>,
}

#[derive(Serialize)]
pub struct CipherReport {
    pub mode: Mode,
    pub language: Language,
    pub shift: u32,
    pub direction: Direction,
    pub output: String,
}

/// Character classes and length for one password request.
#[derive(Debug, Clone, Copy)]
pub struct PasswordSpec {
    pub length: usize,
    pub lower: bool,
    pub upper: bool,
    pub digits: bool,
    pub special: bool,
}

#[derive(Serialize)]
pub struct PasswordReport {
    pub length: usize,
    pub classes: Vec<&'static str>,
    pub password: String,
}

#[derive(Serialize)]
pub struct ConversionItem {
    pub input: String,
    pub output: String,
}
