//! Interactive two-page session: "home" (position and move forms) and
//! "drills" (random drill by category).
//!
//! The current page is a field of `Session`; it starts at `Page::Home` and
//! only changes through `navigate`, which redraws the new page at once.

use crate::core::drill::{ALL_CATEGORIES, DrillLogic};
use crate::core::persist::PersistLogic;
use crate::errors::AppResult;
use crate::models::drill::Drill;
use crate::models::record::Record;
use crate::ui::form::{move_form, position_form};
use crate::ui::prompt::{confirm, prompt_line};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Drills,
}

/// Everything the session needs to persist and to read drills.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub database: String,
    pub positions_file: PathBuf,
    pub moves_file: PathBuf,
    pub hold: Duration,
}

pub struct Session {
    page: Page,
    settings: SessionSettings,
    drills: Vec<Drill>,
    category: String,
}

/// What the input loop should do after one command.
enum Flow {
    Continue,
    Quit,
}

impl Session {
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            page: Page::Home,
            settings,
            drills: Vec::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Switch page and redraw.
    pub fn navigate<W: Write>(&mut self, page: Page, out: &mut W) -> AppResult<()> {
        self.page = page;
        if page == Page::Drills {
            self.enter_drills(out)?;
        }
        self.render(out)
    }

    /// Run until "q" or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> AppResult<()> {
        self.render(out)?;

        loop {
            let Some(cmd) = prompt_line(input, out, ">")? else {
                break;
            };

            let flow = match self.page {
                Page::Home => self.home_command(cmd.trim(), input, out)?,
                Page::Drills => self.drills_command(cmd.trim(), input, out)?,
            };

            if let Flow::Quit = flow {
                break;
            }
        }

        writeln!(out, "Bye.")?;
        Ok(())
    }

    fn render<W: Write>(&self, out: &mut W) -> AppResult<()> {
        match self.page {
            Page::Home => {
                writeln!(out, "\n=== BJJ positions & moves ===")?;
                writeln!(out, "[p] new position  [m] new move  [d] drills  [q] quit")?;
            }
            Page::Drills => {
                writeln!(out, "\n=== drills ===")?;
                writeln!(
                    out,
                    "categories: {}",
                    DrillLogic::categories(&self.drills).join(", ")
                )?;
                writeln!(out, "current: {}", self.category)?;
                writeln!(out, "[r] random drill  [c] category  [h] home  [q] quit")?;
            }
        }
        Ok(())
    }

    fn home_command<R: BufRead, W: Write>(
        &mut self,
        cmd: &str,
        input: &mut R,
        out: &mut W,
    ) -> AppResult<Flow> {
        match cmd {
            "p" => {
                if let Some(p) = position_form(input, out)? {
                    self.confirm_and_append(p, &self.settings.positions_file, input, out)?;
                }
            }
            "m" => {
                if let Some(m) = move_form(input, out)? {
                    self.confirm_and_append(m, &self.settings.moves_file, input, out)?;
                }
            }
            "d" => self.navigate(Page::Drills, out)?,
            "q" => return Ok(Flow::Quit),
            "" => {}
            other => writeln!(out, "Unknown command '{}'", other)?,
        }
        Ok(Flow::Continue)
    }

    fn drills_command<R: BufRead, W: Write>(
        &mut self,
        cmd: &str,
        input: &mut R,
        out: &mut W,
    ) -> AppResult<Flow> {
        match cmd {
            "r" => match DrillLogic::pick(&self.drills, &self.category, &mut rand::thread_rng()) {
                Ok(d) => {
                    writeln!(out, "from: {}", d.from)?;
                    writeln!(out, "do: {}", d.instruction)?;
                    out.flush()?;
                    std::thread::sleep(self.settings.hold);
                }
                Err(e) => writeln!(out, "{}", e)?,
            },
            "c" => {
                let Some(answer) = prompt_line(input, out, "category")? else {
                    return Ok(Flow::Quit);
                };
                let answer = answer.trim();
                if DrillLogic::categories(&self.drills).iter().any(|c| c == answer) {
                    self.category = answer.to_string();
                    writeln!(out, "current: {}", self.category)?;
                } else {
                    writeln!(out, "Unknown category '{}'", answer)?;
                }
            }
            "h" => self.navigate(Page::Home, out)?,
            "q" => return Ok(Flow::Quit),
            "" => {}
            other => writeln!(out, "Unknown command '{}'", other)?,
        }
        Ok(Flow::Continue)
    }

    /// Load drills when the drills page opens. A database failure is shown
    /// on the page and leaves an empty population.
    fn enter_drills<W: Write>(&mut self, out: &mut W) -> AppResult<()> {
        match DrillLogic::load(&self.settings.database) {
            Ok(drills) => self.drills = drills,
            Err(e) => {
                self.drills.clear();
                writeln!(out, "Cannot load drills: {}", e)?;
            }
        }
        self.category = ALL_CATEGORIES.to_string();
        Ok(())
    }

    fn confirm_and_append<T: Record, R: BufRead, W: Write>(
        &self,
        mut record: T,
        file: &Path,
        input: &mut R,
        out: &mut W,
    ) -> AppResult<()> {
        if !confirm(input, out, &format!("Save {}?", T::LABEL.to_lowercase()))? {
            writeln!(out, "Discarded.")?;
            return Ok(());
        }
        record.stamp();

        match PersistLogic::append_json_line(file, &record) {
            Ok(()) => {
                writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?;
                writeln!(out, "{} saved to {}", T::LABEL, file.display())?;
            }
            Err(e) => writeln!(out, "{} not saved: {}", T::LABEL, e)?,
        }
        Ok(())
    }
}
