//! The interactive read-evaluate-print loop.
//!
//! A session owns no contacts; the caller constructs the `AddressBook` and
//! lends it for the lifetime of the loop. Input and output are generic so the
//! loop can run against stdin/stdout or in-memory buffers.

use crate::commands::{dispatch, handler_for, parse_input, Command};
use crate::config::Config;
use crate::repositories::AddressBook;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const FAREWELL: &str = "Good bye!";

/// Whether the loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// What one line of input produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub state: SessionState,
}

/// Evaluate a single input line against the book.
pub fn evaluate(line: &str, book: &mut AddressBook) -> Reply {
    let parsed = parse_input(line);

    let Some(command) = Command::from_token(&parsed.command) else {
        debug!(command = %parsed.command, "unrecognized command");
        return Reply {
            text: format!(
                "'{}' is an unrecognized command. Please provide a valid command.",
                parsed.command
            ),
            state: SessionState::Running,
        };
    };

    let Some(handler) = handler_for(command) else {
        return Reply {
            text: FAREWELL.to_string(),
            state: SessionState::Terminated,
        };
    };

    debug!(command = command.as_str(), args = parsed.args.len(), "dispatching");
    Reply {
        text: dispatch(handler, &parsed.arg_slices(), book),
        state: SessionState::Running,
    }
}

/// A prompt-driven session over arbitrary line input and text output.
pub struct Session<R, W> {
    input: R,
    output: W,
    prompt: String,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: &Config) -> Self {
        Self {
            input,
            output,
            prompt: config.prompt.clone(),
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run until `exit`/`close` or end of input.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading input or writing output. Command
    /// failures never surface here.
    pub fn run(&mut self, book: &mut AddressBook) -> io::Result<()> {
        writeln!(self.output, "{}", WELCOME)?;
        info!("session started");

        let mut buf = Vec::new();
        while self.state == SessionState::Running {
            write!(self.output, "{}", self.prompt)?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                // End of input ends the session like `exit`, on a fresh line.
                writeln!(self.output)?;
                writeln!(self.output, "{}", FAREWELL)?;
                self.state = SessionState::Terminated;
                break;
            }

            // Undecodable bytes only spoil this line, not the session.
            let line = String::from_utf8_lossy(&buf);
            let reply = evaluate(&line, book);
            writeln!(self.output, "{}", reply.text)?;
            self.state = reply.state;
        }

        self.output.flush()?;
        info!(contacts = book.len(), "session ended");
        Ok(())
    }

    /// Consume the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}
