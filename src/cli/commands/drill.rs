use crate::cli::commands::hold_duration;
use crate::cli::parser::{Commands, DrillAction};
use crate::config::Config;
use crate::core::drill::DrillLogic;
use crate::db::log::audit;
use crate::db::tables::insert_row;
use crate::errors::AppResult;
use crate::models::drill::DRILLS_TABLE;
use crate::ui::messages::{header, success};
use rusqlite::types::Value;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Drill { action } = cmd {
        match action {
            DrillAction::Categories => {
                let drills = DrillLogic::load(&cfg.database)?;
                for c in DrillLogic::categories(&drills) {
                    println!("{}", c);
                }
            }
            DrillAction::Random { category, hold } => {
                let drills = DrillLogic::load(&cfg.database)?;
                let drill = DrillLogic::pick(&drills, category, &mut rand::thread_rng())?;

                header("drill");
                println!("from: {}", drill.from);
                println!("do: {}", drill.instruction);

                std::thread::sleep(hold_duration(*hold, cfg));
            }
            DrillAction::Add {
                class,
                from,
                to,
                instruction,
            } => {
                let row = [
                    ("class", Value::Text(class.clone())),
                    ("from_desc", Value::Text(from.clone())),
                    ("to_desc", Value::Text(to.clone())),
                    ("do_desc", Value::Text(instruction.clone())),
                ];
                insert_row(&cfg.database, DRILLS_TABLE, &row)?;
                audit(&cfg.database, "add", DRILLS_TABLE, &format!("Drill '{}' added", class));
                success(format!("Drill added to '{}'", DRILLS_TABLE));
            }
        }
    }

    Ok(())
}
