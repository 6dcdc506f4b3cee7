use crate::cli::commands::record_file;
use crate::cli::parser::{Commands, PositionAction, PositionFields};
use crate::config::Config;
use crate::core::persist::{PersistLogic, SaveTarget};
use crate::errors::AppResult;
use crate::models::position::Position;
use crate::models::record::Record;
use crate::ui::messages::{info, json, success};

impl PositionFields {
    /// Build the record at submission time: fresh guid, current timestamp.
    pub fn to_position(&self) -> Position {
        Position {
            class: self.class.clone(),
            family: self.family.clone(),
            name: self.name.clone(),
            id: self.id.clone(),
            code: self.code.clone(),
            btg_top: self.btg_top.clone(),
            btg_pass: self.btg_pass.clone(),
            btg_dom: self.btg_dom.clone(),
            variant: self.variant.clone(),
            specifics: self.specifics.clone(),
            level: self.level.clone(),
            alt_names: self.alt_names.clone(),
            ..Position::new(self.realm)
        }
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Position { action } = cmd {
        match action {
            PositionAction::Add { fields, save } => {
                let position = fields.to_position();
                let file = record_file(&save.file, &cfg.positions_file);

                PersistLogic::save(&position, save.target, &file, &cfg.database)?;

                json(&position);
                match save.target {
                    SaveTarget::File => success(format!("Position saved to {}", file.display())),
                    SaveTarget::Db => success(format!(
                        "Position saved to table '{}'",
                        Position::TABLE
                    )),
                }
            }
            PositionAction::List { file } => {
                let file = record_file(file, &cfg.positions_file);
                let positions: Vec<Position> = PersistLogic::read_json_lines(&file)?;

                if positions.is_empty() {
                    info(format!("No positions in {}", file.display()));
                }
                for p in &positions {
                    println!("{}", p.summary());
                }
            }
        }
    }

    Ok(())
}
