use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "cifra", version, about = "Caesar cipher and text utility CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt text with a Caesar shift over the detected or given alphabet
    Encrypt {
        text: String,
        #[arg(long, help = "Shift amount, must be smaller than the alphabet length")]
        shift: u32,
        #[arg(long, value_enum, help = "Shift direction (default: right)")]
        direction: Option<Direction>,
        #[arg(
            long,
            value_enum,
            help = "Alphabet language (default: detect from first character)"
        )]
        lang: Option<Language>,
    },
    /// Decrypt text previously encrypted with the same shift and direction
    Decrypt {
        text: String,
        #[arg(long, help = "Shift amount, must be smaller than the alphabet length")]
        shift: u32,
        #[arg(long, value_enum, help = "Shift direction used at encryption time")]
        direction: Option<Direction>,
        #[arg(
            long,
            value_enum,
            help = "Alphabet language (default: detect from first character)"
        )]
        lang: Option<Language>,
    },
    /// Generate a random password from the enabled character classes
    Password {
        #[arg(long, help = "Password length (default: 16, or config value)")]
        length: Option<usize>,
        #[arg(long, help = "Include lowercase letters a-z")]
        lower: bool,
        #[arg(long, help = "Include uppercase letters A-Z")]
        upper: bool,
        #[arg(long, help = "Include digits 0-9")]
        digits: bool,
        #[arg(long, help = "Include printable special characters")]
        special: bool,
        #[arg(long, help = "Fixed PRNG seed for reproducible output")]
        seed: Option<u64>,
    },
    /// Convert between Roman and Arabic numerals
    Numeral {
        #[command(subcommand)]
        command: NumeralCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum NumeralCommands {
    /// Convert Arabic numbers (1..=3999) to Roman numerals
    ToRoman {
        #[arg(required = true, help = "Numbers; each argument may be a comma-separated list")]
        values: Vec<String>,
    },
    /// Convert Roman numerals to Arabic numbers
    ToArabic {
        #[arg(required = true, help = "Numerals; each argument may be a comma-separated list")]
        values: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ru,
    En,
}
