//! Line-oriented console used by every handler.
//!
//! Generic over its input and output so handlers can be driven from an
//! in-memory buffer in tests and from stdin/stdout in the binary.

use std::fmt::Display;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use thiserror::Error;

/// Errors talking to the user.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("console I/O error: {0}")]
    Io(#[from] io::Error),

    /// Standard input reached end of file.
    #[error("input closed")]
    Closed,
}

/// Prompt/response console over a line reader and a writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    verbose: bool,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console over the process's standard input and output.
    pub fn stdio(verbose: bool) -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout(), verbose)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, verbose: bool) -> Self {
        Self {
            input,
            output,
            verbose,
        }
    }

    /// Prints one line.
    pub fn say(&mut self, line: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Prints a prompt and reads one line of input.
    ///
    /// The prompt is written without a trailing newline. The returned line
    /// has its line ending removed but is otherwise untouched, except that
    /// bytes which are not valid UTF-8 become U+FFFD.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Closed` when input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            writeln!(self.output)?;
            return Err(ConsoleError::Closed);
        }

        if raw.ends_with(b"\n") {
            raw.pop();
            if raw.ends_with(b"\r") {
                raw.pop();
            }
        }
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }

    /// Asks until `validate` accepts the answer, printing each rejection.
    pub fn ask_until<T, E, F>(&mut self, prompt: &str, mut validate: F) -> Result<T, ConsoleError>
    where
        E: Display,
        F: FnMut(&str) -> Result<T, E>,
    {
        loop {
            let answer = self.ask(prompt)?;
            match validate(&answer) {
                Ok(value) => return Ok(value),
                Err(rejection) => self.say(rejection)?,
            }
        }
    }

    /// Prints a diagnostic to stderr when running verbosely.
    pub fn trace(&self, message: impl Display) {
        if self.verbose {
            eprintln!("  {}", message);
        }
    }

    /// Consumes the console, returning its writer.
    pub fn into_output(self) -> W {
        self.output
    }
}
