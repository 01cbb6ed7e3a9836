//! CLI client for the suitup library.
//!
//! - `setup.rs`: clap argument definitions
//! - `commands.rs`: dispatch and per-command handlers
//! - `print.rs`: terminal rendering of structured results
//! - `mask.rs`: Brazilian input masks (phone, CEP, CNPJ)

mod commands;
mod mask;
mod print;
mod setup;

pub use commands::run;
