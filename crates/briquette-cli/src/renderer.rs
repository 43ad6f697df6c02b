//! Terminal output for estimates and logistics plans.
//!
//! Everything the CLI prints is markdown. Rich output styles headers and
//! inline emphasis with termimad; plain output (`--no-color`) writes the
//! markdown untouched so it can be piped or diffed.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const HEADER_STYLE: &str = "\x1b[1;32m";
const HINT_STYLE: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Writes a markdown block to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        if self.rich_enabled {
            for line in markdown.lines() {
                match styled_header(line) {
                    Some(header) => writeln!(stdout, "{header}")?,
                    None => writeln!(stdout, "{}", self.skin.inline(line))?,
                }
            }
        } else {
            write!(stdout, "{markdown}")?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// Writes a one-line prompt for the next command, dimmed in rich mode.
    pub fn hint(&self, text: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        if self.rich_enabled {
            writeln!(stdout, "{HINT_STYLE}{}{RESET}", text.trim_end())?;
        } else {
            write!(stdout, "{text}")?;
        }
        stdout.flush()?;
        Ok(())
    }
}

/// Headers keep their hash marks so sections stand out in scrollback.
fn styled_header(line: &str) -> Option<String> {
    line.starts_with('#').then(|| format!("{HEADER_STYLE}{line}{RESET}"))
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
