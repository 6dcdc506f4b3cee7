use crate::cli::commands::{hold_duration, record_file};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{Session, SessionSettings};
use crate::errors::AppResult;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Session { hold } = cmd {
        let settings = SessionSettings {
            database: cfg.database.clone(),
            positions_file: record_file(&None, &cfg.positions_file),
            moves_file: record_file(&None, &cfg.moves_file),
            hold: hold_duration(*hold, cfg),
        };

        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut out = io::stdout();

        Session::new(settings).run(&mut input, &mut out)?;
    }

    Ok(())
}
