//! bjjdb library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Position { .. } => cli::commands::position::handle(&cli.command, cfg),
        Commands::Move { .. } => cli::commands::moves::handle(&cli.command, cfg),
        Commands::Drill { .. } => cli::commands::drill::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Session { .. } => cli::commands::session::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Config is loaded once; BJJDB_DATABASE is applied inside load().
    let mut cfg = Config::load()?;

    // --db wins over both the config file and the environment
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_database(custom_db);
    }

    dispatch(&cli, &cfg)
}
