//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `cipher.rs` — encrypt/decrypt handlers.
//! - `password.rs` — password generation handler.
//! - `numeral.rs` — Roman/Arabic conversion handlers.
//!
//! ## Principles
//! - Parse/match CLI inputs here, apply config-file fallbacks.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod cipher;
pub mod numeral;
pub mod password;

pub use cipher::handle_cipher_command;
pub use numeral::handle_numeral_commands;
pub use password::handle_password_command;
