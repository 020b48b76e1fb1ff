//! rcorridas library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use crate::cli::commands as c;

    match &cli.command {
        Commands::Init => c::init::handle(cli),
        Commands::Config { .. } => c::config::handle(&cli.command, cfg),
        Commands::Db { .. } => c::db::handle(&cli.command, cfg),
        Commands::Log { .. } => c::log::handle(&cli.command, cfg),
        Commands::Add { .. } => c::add::handle(&cli.command, cfg),
        Commands::Edit { .. } => c::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => c::del::handle(&cli.command, cfg),
        Commands::List { .. } => c::list::handle(&cli.command, cfg),
        Commands::Dashboard { .. } => c::dashboard::handle(&cli.command, cfg),
        Commands::Vehicle { .. } => c::vehicle::handle(&cli.command, cfg),
        Commands::Estimate { .. } => c::estimate::handle(&cli.command, cfg),
        Commands::Recover { .. } => c::recover::handle(&cli.command, cfg),
        Commands::Backup { .. } => c::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => c::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // In test mode the user's config file is never read.
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
