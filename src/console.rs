//! Interactive prompts over any line-based input and writer.
//!
//! End of input always reads as a blank answer, so none of the prompts can
//! loop forever when stdin is closed or piped.

use crate::discovery::FileEntry;
use crate::emission::DEFAULT_OUTPUT_NAME;
use crate::selection::parse_indices;
use log::debug;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

pub const ENTER_EXTENSIONS_PROMPT: &str = "Enter file extensions separated by spaces: ";
pub const CONFIRM_EXTRACT_PROMPT: &str = "Do you want to extract content? (y/n): ";
pub const SELECT_INDICES_PROMPT: &str =
    "Enter the indices of the files you want to collect (separated by spaces), or press Enter for 'all': ";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }

    /// Writes the question and reads one line, trimmed. `None` on end of input.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn show_files(&mut self, entries: &[FileEntry]) -> io::Result<()> {
        for (i, entry) in entries.iter().enumerate() {
            writeln!(self.output, "[{}] {}", i, entry.display_path())?;
        }
        Ok(())
    }

    pub fn prompt_extensions(&mut self, possible: &[String]) -> io::Result<Vec<String>> {
        self.say(format_args!("Possible extensions: {}", possible.join(" ")))?;
        let answer = self.ask(ENTER_EXTENSIONS_PROMPT)?.unwrap_or_default();
        Ok(answer.split_whitespace().map(str::to_string).collect())
    }

    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.ask(question)?.unwrap_or_default();
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    /// Re-prompts until the answer parses into indices within `[0, count)`.
    pub fn prompt_indices(&mut self, count: usize) -> io::Result<Vec<usize>> {
        loop {
            let answer = self.ask(SELECT_INDICES_PROMPT)?.unwrap_or_default();
            match parse_indices(&answer, count) {
                Ok(indices) => return Ok(indices),
                Err(err) => {
                    debug!("Rejected selection input {:?}: {}", answer, err);
                    self.say(format_args!("Invalid selection: {}. Please try again.", err))?;
                }
            }
        }
    }

    /// `None` when the user accepts the default name.
    pub fn prompt_output_name(&mut self) -> io::Result<Option<String>> {
        let question = format!("Enter output file name (press Enter for '{}'): ", DEFAULT_OUTPUT_NAME);
        Ok(self.ask(&question)?.filter(|name| !name.is_empty()))
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
