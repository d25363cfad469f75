//! # Prompt I/O
//!
//! Line-oriented input/output over any `BufRead` + `Write` pair, so the
//! menu can run against stdin/stdout or against in-memory buffers in tests.

use std::io::{BufRead, Write};

use crate::error::{ConsoleError, ConsoleResult};

const INVALID_NUMBER: &str = "Invalid input. Please enter a valid number: ";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Gives back the output sink (used by tests to inspect the transcript).
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line.
    pub fn say(&mut self, line: &str) -> ConsoleResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Writes each item on its own line, or `empty` if there are none.
    pub fn list<I>(&mut self, items: I, empty: &str) -> ConsoleResult<()>
    where
        I: IntoIterator<Item = String>,
    {
        let mut any = false;
        for item in items {
            any = true;
            self.say(&item)?;
        }
        if !any {
            self.say(empty)?;
        }
        Ok(())
    }

    /// Prints `prompt` and reads one line, trimmed.
    ///
    /// Returns `InputClosed` at end of input.
    pub fn ask(&mut self, prompt: &str) -> ConsoleResult<String> {
        write!(self.output, "{}", prompt)?;
        self.read_line()
    }

    /// Prints `prompt` and reads an integer, re-prompting until one parses.
    pub fn ask_int(&mut self, prompt: &str) -> ConsoleResult<i64> {
        self.ask_parsed(prompt)
    }

    /// Prints `prompt` and reads a decimal number, re-prompting until one
    /// parses.
    pub fn ask_f64(&mut self, prompt: &str) -> ConsoleResult<f64> {
        self.ask_parsed(prompt)
    }

    /// Asks a Y/N question; anything but `y`/`Y` is a no.
    pub fn confirm(&mut self, prompt: &str) -> ConsoleResult<bool> {
        Ok(self.ask(prompt)?.eq_ignore_ascii_case("y"))
    }

    /// Waits for the user to press Enter.
    pub fn pause(&mut self) -> ConsoleResult<()> {
        self.ask("\nPress Enter to continue...")?;
        Ok(())
    }

    fn ask_parsed<T: std::str::FromStr>(&mut self, prompt: &str) -> ConsoleResult<T> {
        write!(self.output, "{}", prompt)?;
        loop {
            let line = self.read_line()?;
            match line.parse() {
                Ok(value) => return Ok(value),
                Err(_) => write!(self.output, "{}", INVALID_NUMBER)?,
            }
        }
    }

    fn read_line(&mut self) -> ConsoleResult<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}
