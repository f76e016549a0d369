use std::io::{self, BufRead, Write};

use crate::{
    interpreter::evaluator::core::evaluate_expression,
    util::format::{DEFAULT_PRECISION, format_value},
};

/// Prompt printed before each batch of input in interactive mode.
pub const DEFAULT_PROMPT: &str = "Calc> ";

/// Terminates a statement.
pub const STATEMENT_TERMINATOR: char = ';';

/// Settings for a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Text written before reading input. May be empty.
    pub prompt:    String,
    /// Digits printed after the decimal point of each result.
    pub precision: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { prompt:    DEFAULT_PROMPT.to_string(),
               precision: DEFAULT_PRECISION, }
    }
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// A statement asked to `quit`.
    Quit,
    /// The input ran out.
    EndOfInput,
}

/// A read-evaluate-print loop over `;`-terminated statements.
///
/// Statements may span several lines, and one line may hold several
/// statements. Results go to `output`; errors go to `errors`, after which the
/// rest of the failing statement is dropped and the session carries on.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use calcium::interpreter::session::{Session, SessionConfig, SessionOutcome};
///
/// let input = Cursor::new("1 + 2;\n(4 - 1) *\n 3; quit;\n");
/// let mut output = Vec::new();
/// let mut errors = Vec::new();
/// let config = SessionConfig { prompt: String::new(), ..SessionConfig::default() };
///
/// let outcome = Session::new(input, &mut output, &mut errors, config).run().unwrap();
///
/// assert_eq!(outcome, SessionOutcome::Quit);
/// assert_eq!(String::from_utf8(output).unwrap(), "3.00\n9.00\n");
/// assert!(errors.is_empty());
/// ```
pub struct Session<R, W, E> {
    input:   R,
    output:  W,
    errors:  E,
    config:  SessionConfig,
    pending: String,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    /// Creates a session reading from `input`.
    pub const fn new(input: R, output: W, errors: E, config: SessionConfig) -> Self {
        Self { input,
               output,
               errors,
               config,
               pending: String::new() }
    }

    /// Runs statements until `quit` or the end of input.
    ///
    /// A final statement without a terminator is still evaluated when the
    /// input ends.
    ///
    /// # Errors
    /// Returns any I/O error from reading input or writing results.
    pub fn run(&mut self) -> io::Result<SessionOutcome> {
        log::info!("session started");
        loop {
            self.prompt()?;
            let more = self.fill()?;

            while let Some(end) = self.pending.find(STATEMENT_TERMINATOR) {
                let statement: String = self.pending.drain(..=end).collect();
                if self.execute(&statement[..end])? {
                    return Ok(Self::finish(SessionOutcome::Quit));
                }
            }

            if !more {
                let rest = std::mem::take(&mut self.pending);
                if !rest.trim().is_empty() && self.execute(&rest)? {
                    return Ok(Self::finish(SessionOutcome::Quit));
                }
                return Ok(Self::finish(SessionOutcome::EndOfInput));
            }
        }
    }

    /// Evaluates one statement and reports its result.
    ///
    /// Returns `true` if the statement asked to quit.
    fn execute(&mut self, statement: &str) -> io::Result<bool> {
        log::debug!("statement {statement:?}");
        match evaluate_expression(statement) {
            Ok(value) => {
                writeln!(self.output, "{}", format_value(value, self.config.precision))?;
                Ok(false)
            },
            Err(e) if e.is_quit() => Ok(true),
            Err(e) => {
                log::warn!("discarding statement {statement:?}: {e}");
                writeln!(self.errors, "{e}")?;
                Ok(false)
            },
        }
    }

    /// Reads lines until a terminator is buffered.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD, which the lexer then
    /// rejects like any other unknown character.
    ///
    /// Returns `false` once the input is exhausted.
    fn fill(&mut self) -> io::Result<bool> {
        let mut line = Vec::new();
        loop {
            if self.pending.contains(STATEMENT_TERMINATOR) {
                return Ok(true);
            }
            line.clear();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(false);
            }
            self.pending.push_str(&String::from_utf8_lossy(&line));
        }
    }

    fn prompt(&mut self) -> io::Result<()> {
        if self.config.prompt.is_empty() {
            return Ok(());
        }
        write!(self.output, "{}", self.config.prompt)?;
        self.output.flush()
    }

    fn finish(outcome: SessionOutcome) -> SessionOutcome {
        log::info!("session ended: {outcome:?}");
        outcome
    }
}
