use crate::cli::{Direction, Language};
use crate::domain::models::{CipherReport, CipherRequest, Mode};
use crate::services::cipher;
use crate::services::config::ConfigFile;
use crate::services::output::print_one;

#[allow(clippy::too_many_arguments)]
pub fn handle_cipher_command(
    json: bool,
    config: &ConfigFile,
    mode: Mode,
    text: String,
    shift: u32,
    direction: Option<Direction>,
    lang: Option<Language>,
) -> anyhow::Result<()> {
    let request = CipherRequest {
        text,
        mode,
        shift,
        direction: direction
            .or(config.cipher.direction)
            .unwrap_or(Direction::Right),
        language: lang.or(config.cipher.language),
    };
    let (language, output) = cipher::transform(&request)?;
    let report = CipherReport {
        mode,
        language,
        shift,
        direction: request.direction,
        output,
    };
    print_one(json, report, |r| r.output.clone())
}
