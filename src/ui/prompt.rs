//! Validating console prompts
//!
//! Every prompt loops until it has valid input, so callers never see a
//! validation failure. The only errors that escape are I/O failures and
//! [`Error::InputClosed`] when the input stream ends.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::entry::{is_valid_title, ChestTable};
use crate::ui::{acknowledge_line, banner_line, error_line, render_table, retry_line, theme, Theme};
use crate::{Error, Result};

const MENU_PROMPT: &str = "What would you like to do?";
const TITLE_PROMPT: &str =
    "Please type in the video title. Letters, digits, '_', '.' and '-' are allowed: ";
const UPDATE_ID_PROMPT: &str =
    "Please provide the id number of the video you want to update the chest count for: ";
const UPDATE_COUNT_PROMPT: &str = "Please provide the updated chest count: ";
const DELETE_ID_PROMPT: &str = "Please provide the id number of the entry you want to delete: ";

/// Terminal front-end over any line reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    theme: Theme,
    clear_screen: bool,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process terminal, clearing the screen before
    /// every table render.
    pub fn stdio() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
            theme: theme().clone(),
            clear_screen: true,
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Plain, non-clearing console (scripted input, tests)
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            theme: Theme::plain(),
            clear_screen: false,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Clear the screen and print the banner followed by the table
    pub fn render_table(&mut self, table: &ChestTable) -> Result<()> {
        if self.clear_screen {
            console::Term::stdout().clear_screen()?;
        }
        writeln!(self.output, "{}", banner_line(&self.theme))?;
        writeln!(self.output, "{}", render_table(table))?;
        self.output.flush()?;
        Ok(())
    }

    /// Show the numbered options and return the code of a valid choice
    pub fn prompt_menu(&mut self, options: &[(i64, &str)]) -> Result<i64> {
        let mut prompt = String::from(MENU_PROMPT);
        for (code, label) in options {
            prompt.push_str(&format!("\n{}. {}", code, label));
        }
        prompt.push('\n');

        loop {
            let line = self.read_line(&prompt)?;
            match parse_int(&line) {
                Some(code) if options.iter().any(|(c, _)| *c == code) => return Ok(code),
                _ => {
                    tracing::debug!("Rejected menu input {:?}", line);
                    self.retry("Invalid selection. You must choose one of the given options")?;
                }
            }
        }
    }

    /// Read a video title, trimmed and validated
    pub fn prompt_new_title(&mut self) -> Result<String> {
        loop {
            let title = self.read_line(TITLE_PROMPT)?;
            if is_valid_title(&title) {
                return Ok(title);
            }
            self.retry("Invalid input.")?;
        }
    }

    /// Read `(id, new_count)`; either one failing restarts both prompts
    pub fn prompt_update(&mut self) -> Result<(i64, i64)> {
        loop {
            let id = parse_int(&self.read_line(UPDATE_ID_PROMPT)?);
            let Some(id) = id else {
                self.retry("ID and Chest Count must be an integer.")?;
                continue;
            };
            match parse_int(&self.read_line(UPDATE_COUNT_PROMPT)?) {
                Some(count) => return Ok((id, count)),
                None => self.retry("ID and Chest Count must be an integer.")?,
            }
        }
    }

    /// Read the id of the entry to delete
    pub fn prompt_delete(&mut self) -> Result<i64> {
        loop {
            match parse_int(&self.read_line(DELETE_ID_PROMPT)?) {
                Some(id) => return Ok(id),
                None => self.retry("ID must be an integer.")?,
            }
        }
    }

    /// Print `Error: <message>` for a failed action
    pub fn report_error(&mut self, error: &Error) -> Result<()> {
        writeln!(self.output, "{}", error_line(&self.theme, &error.to_string()))?;
        Ok(())
    }

    /// Wait for the user to press enter
    pub fn acknowledge(&mut self) -> Result<()> {
        let prompt = acknowledge_line(&self.theme);
        self.read_line(&prompt)?;
        Ok(())
    }

    fn retry(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", retry_line(&self.theme, message))?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

/// Parse a whole-line integer with an optional sign
fn parse_int(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}
