//! Optional user defaults from `~/.config/cifra/config.toml`.
//!
//! All keys are optional; a missing file means built-in defaults. CLI
//! flags always override config values.

use crate::cli::{Direction, Language};
use serde::Deserialize;
use std::path::PathBuf;

/// Built-in password length when neither flag nor config provide one.
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub cipher: CipherDefaults,
    #[serde(default)]
    pub password: PasswordDefaults,
}

#[derive(Debug, Deserialize, Default)]
pub struct CipherDefaults {
    pub language: Option<Language>,
    pub direction: Option<Direction>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PasswordDefaults {
    pub length: Option<usize>,
}

pub fn load_config() -> anyhow::Result<ConfigFile> {
    let home = std::env::var("HOME")?;
    let path = PathBuf::from(home).join(".config/cifra/config.toml");
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sections_are_optional() {
        let config: ConfigFile = toml::from_str("").expect("empty config");
        assert!(config.cipher.language.is_none());
        assert!(config.cipher.direction.is_none());
        assert!(config.password.length.is_none());
    }

    #[test]
    fn values_deserialize_lowercase() {
        let config: ConfigFile = toml::from_str(
            "[cipher]\nlanguage = \"ru\"\ndirection = \"left\"\n\n[password]\nlength = 24\n",
        )
        .expect("config");
        assert_eq!(config.cipher.language, Some(Language::Ru));
        assert_eq!(config.cipher.direction, Some(Direction::Left));
        assert_eq!(config.password.length, Some(24));
    }
}
