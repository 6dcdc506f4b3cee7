use crate::db::log::audit;
use crate::db::tables::insert_row;
use crate::errors::{AppError, AppResult};
use crate::models::record::Record;
use clap::ValueEnum;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Where a confirmed record goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SaveTarget {
    /// Append one JSON line to the record file
    File,
    /// Insert one row into the record table
    Db,
}

pub struct PersistLogic;

impl PersistLogic {
    /// Append `record` as a single JSON line. The line is written with one
    /// `write_all`, so concurrent appenders interleave lines, never bytes
    /// within a line.
    pub fn append_json_line<R: Record>(path: &Path, record: &R) -> AppResult<()> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Read every record of a JSON-lines file. Blank lines are skipped.
    /// A missing file is an empty catalogue.
    pub fn read_json_lines<R: Record>(path: &Path) -> AppResult<Vec<R>> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(path)?);
        let mut out = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let rec = serde_json::from_str(&line).map_err(|e| AppError::InvalidRecordLine {
                path: path.display().to_string(),
                line: idx + 1,
                reason: e.to_string(),
            })?;
            out.push(rec);
        }

        Ok(out)
    }

    /// Insert `record` into its table and leave an audit line.
    pub fn insert_into_db<R: Record>(db_path: &str, record: &R) -> AppResult<()> {
        insert_row(db_path, R::TABLE, &record.to_row())?;
        audit(
            db_path,
            "add",
            R::TABLE,
            &format!("{} {} saved", R::LABEL, record.guid()),
        );
        Ok(())
    }

    /// Persist to the chosen target.
    pub fn save<R: Record>(
        record: &R,
        target: SaveTarget,
        file: &Path,
        db_path: &str,
    ) -> AppResult<()> {
        match target {
            SaveTarget::File => Self::append_json_line(file, record),
            SaveTarget::Db => Self::insert_into_db(db_path, record),
        }
    }
}
