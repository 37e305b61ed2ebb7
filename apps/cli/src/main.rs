#![allow(clippy::print_stdout)]

pub mod handlers;
pub mod models;

use crate::handlers::{decode, groups, list, mask, validate};
use crate::models::args::{Cli, Commands};

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use szflags::kernel::config::load_settings;
use szflags_logger::Logger;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let settings =
        load_settings(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    let _log = Logger::from_settings(env!("CARGO_BIN_NAME"), &settings.logging, cli.verbose)?;

    let catalog = szflags::standard::catalog();
    tracing::debug!(command = ?cli.command, "Dispatching command");

    match cli.command {
        Commands::Mask { flags } => mask::print_mask(catalog, &flags)?,
        Commands::Decode { mask, group } => decode::decode_mask(catalog, &mask, group.as_deref())?,
        Commands::List { group, aggregates } => {
            list::list_flags(catalog, group.as_deref(), aggregates)?;
        },
        Commands::Groups {} => groups::list_groups(catalog),
        Commands::Validate { metadata } => {
            let path = metadata.or_else(|| settings.metadata.path.clone());
            let report = validate::run(path.as_deref(), &settings.validation)?;
            if !report.is_clean() {
                return Ok(ExitCode::FAILURE);
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}
