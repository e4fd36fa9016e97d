use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};
use domain::models::Mode;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = services::config::load_config()?;

    match cli.command {
        Commands::Encrypt {
            text,
            shift,
            direction,
            lang,
        } => commands::handle_cipher_command(
            cli.json,
            &config,
            Mode::Encrypt,
            text,
            shift,
            direction,
            lang,
        ),
        Commands::Decrypt {
            text,
            shift,
            direction,
            lang,
        } => commands::handle_cipher_command(
            cli.json,
            &config,
            Mode::Decrypt,
            text,
            shift,
            direction,
            lang,
        ),
        Commands::Password {
            length,
            lower,
            upper,
            digits,
            special,
            seed,
        } => commands::handle_password_command(
            cli.json, &config, length, lower, upper, digits, special, seed,
        ),
        Commands::Numeral { command } => commands::handle_numeral_commands(cli.json, &command),
    }
}
