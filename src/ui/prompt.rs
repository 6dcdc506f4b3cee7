//! Line-based prompts. Generic over reader/writer so the interactive
//! session can be driven from tests.

use crate::errors::AppResult;
use std::io::{self, BufRead, Write};

/// Print `label: ` and read one line. `None` on end of input.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> AppResult<Option<String>> {
    write!(out, "{}: ", label)?;
    out.flush()?;

    let mut s = String::new();
    if input.read_line(&mut s)? == 0 {
        return Ok(None);
    }
    Ok(Some(s.trim_end_matches(['\r', '\n']).to_string()))
}

/// Yes/no question; anything but "y"/"yes" (or end of input) is a no.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> AppResult<bool> {
    let answer = prompt_line(input, out, &format!("{} [y/N]", prompt))?;
    Ok(matches!(
        answer.map(|a| a.trim().to_lowercase()).as_deref(),
        Some("y") | Some("yes")
    ))
}

/// Ask a yes/no confirmation on the terminal.
pub fn ask_confirmation(prompt: &str) -> bool {
    crate::ui::messages::warning(prompt);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    confirm(&mut input, &mut out, "Confirm").unwrap_or(false)
}
