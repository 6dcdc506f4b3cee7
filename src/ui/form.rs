//! Interactive forms for positions and moves.
//!
//! A record is built from the answers only once every field has been read.
//! `created_at` is stamped again when the save is confirmed.

use crate::errors::AppResult;
use crate::models::moves::{MOVE_FIELDS, Move};
use crate::models::position::{POSITION_FIELDS, Position};
use crate::models::realm::Realm;
use crate::ui::prompt::prompt_line;
use std::io::{BufRead, Write};

/// Read the answers for `labels`; `None` if input ends early.
fn read_fields<R: BufRead, W: Write, const N: usize>(
    input: &mut R,
    out: &mut W,
    labels: &[&str; N],
) -> AppResult<Option<[String; N]>> {
    let mut values: [String; N] = std::array::from_fn(|_| String::new());
    for (slot, label) in values.iter_mut().zip(labels) {
        match prompt_line(input, out, label)? {
            Some(v) => *slot = v,
            None => return Ok(None),
        }
    }
    Ok(Some(values))
}

fn read_realm<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> AppResult<Option<Realm>> {
    let options: Vec<String> = Realm::ALL
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{}={}", i + 1, r))
        .collect();
    let label = format!("Realm ({})", options.join(", "));

    loop {
        let Some(answer) = prompt_line(input, out, &label)? else {
            return Ok(None);
        };
        match Realm::from_input(&answer) {
            Some(r) => return Ok(Some(r)),
            None => writeln!(out, "Unknown realm '{}'", answer.trim())?,
        }
    }
}

pub fn position_form<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> AppResult<Option<Position>> {
    writeln!(out, "\n-- Position --")?;
    let Some(realm) = read_realm(input, out)? else {
        return Ok(None);
    };
    let Some(fields) = read_fields(input, out, &POSITION_FIELDS)? else {
        return Ok(None);
    };
    Ok(Some(Position::from_fields(realm, fields)))
}

pub fn move_form<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> AppResult<Option<Move>> {
    writeln!(out, "\n-- Move --")?;
    let Some(fields) = read_fields(input, out, &MOVE_FIELDS)? else {
        return Ok(None);
    };
    Ok(Some(Move::from_fields(fields)))
}
