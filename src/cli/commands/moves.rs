use crate::cli::commands::record_file;
use crate::cli::parser::{Commands, MoveAction, MoveFields};
use crate::config::Config;
use crate::core::persist::{PersistLogic, SaveTarget};
use crate::errors::AppResult;
use crate::models::moves::Move;
use crate::models::record::Record;
use crate::ui::messages::{info, json, success};

impl MoveFields {
    /// Build the record at submission time: fresh guid, current timestamp.
    pub fn to_move(&self) -> Move {
        Move::from_fields([
            self.from_pos.clone(),
            self.from_tb.clone(),
            self.to_pos.clone(),
            self.to_tb.clone(),
            self.category.clone(),
            self.name.clone(),
            self.code.clone(),
            self.infos.clone(),
            self.step1.clone(),
            self.step2.clone(),
            self.step3.clone(),
            self.counter1.clone(),
            self.counter2.clone(),
            self.counter3.clone(),
            self.family.clone(),
            self.level.clone(),
        ])
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Move { action } = cmd {
        match action {
            MoveAction::Add { fields, save } => {
                let mv = fields.to_move();
                let file = record_file(&save.file, &cfg.moves_file);

                PersistLogic::save(&mv, save.target, &file, &cfg.database)?;

                json(&mv);
                match save.target {
                    SaveTarget::File => success(format!("Move saved to {}", file.display())),
                    SaveTarget::Db => success(format!("Move saved to table '{}'", Move::TABLE)),
                }
            }
            MoveAction::List { file } => {
                let file = record_file(file, &cfg.moves_file);
                let moves: Vec<Move> = PersistLogic::read_json_lines(&file)?;

                if moves.is_empty() {
                    info(format!("No moves in {}", file.display()));
                }
                for m in &moves {
                    println!("{}", m.summary());
                }
            }
        }
    }

    Ok(())
}
