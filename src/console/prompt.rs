//! Line-oriented prompting over any reader and writer.
//!
//! The [`Prompter`] is the request/response boundary between the session and
//! the terminal: it writes a prompt, reads one line, and hands the line to a
//! parser, re-prompting while the parser reports a recoverable error.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{GrantError, GrantResult};

/// Writes prompts to `W` and reads answers from `R`.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use tuition_grants::console::Prompter;
///
/// let mut prompter = Prompter::new(Cursor::new("x\n7\n"), Vec::new());
/// let value: u32 = prompter
///     .ask_until("Number: ", "Try again.", |raw| {
///         raw.parse::<u32>().map_err(|_| tuition_grants::error::GrantError::InvalidInputFormat {
///             field: "number".to_string(),
///             input: raw.to_string(),
///         })
///     })
///     .unwrap();
///
/// assert_eq!(value, 7);
/// let output = String::from_utf8(prompter.into_output()).unwrap();
/// assert_eq!(output, "Number: Try again.\nNumber: ");
/// ```
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given input and output.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output writer.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the prompter and returns the output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line, stripping only the line terminator.
    ///
    /// Returns [`GrantError::InputClosed`] at end of input.
    pub fn read_line(&mut self) -> GrantResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GrantError::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Writes `prompt` without a newline and reads the answer.
    pub fn ask(&mut self, prompt: &str) -> GrantResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prompts until `parse` accepts the answer.
    ///
    /// Recoverable errors print `retry_message` and prompt again; any other
    /// error is returned.
    pub fn ask_until<T, F>(&mut self, prompt: &str, retry_message: &str, mut parse: F) -> GrantResult<T>
    where
        F: FnMut(&str) -> GrantResult<T>,
    {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_recoverable() => {
                    debug!(error = %e, "Input rejected, prompting again");
                    writeln!(self.output, "{}", retry_message)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Writes the continue prompt and waits for one line.
    pub fn pause(&mut self) -> GrantResult<()> {
        write!(self.output, "\n\nPress Enter to continue...\n")?;
        self.output.flush()?;
        self.read_line().map(|_| ())
    }
}
