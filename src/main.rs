mod cli;
mod config;
mod error;
mod models;
mod tracker;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;
    log::debug!("loaded config: {:?}", config);

    match cli.command {
        Some(Commands::Session { quiet }) => {
            handlers::handle_session(&config, quiet)?;
        }
        Some(Commands::Topics) => {
            handlers::handle_topics()?;
        }
        Some(Commands::Config { reset }) => {
            handlers::handle_config(&config, reset)?;
        }
        // No subcommand → launch TUI
        None => {
            tui::app::run(config)?;
        }
    }

    Ok(())
}
