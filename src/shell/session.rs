//! Shell session
//!
//! Reads command lines, executes them, and writes responses.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::engine::Database;
use crate::error::{KvError, Result};
use crate::protocol::{decode_command, encode_response, Command, Response};

/// Summary of one shell session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Lines that decoded to a command and were executed
    pub commands_executed: usize,

    /// Lines that failed to decode
    pub errors: usize,

    /// Whether the session stopped on END rather than end of input
    pub ended: bool,
}

/// Executes command lines against an owned database
pub struct Shell<W: Write> {
    /// The database commands run against
    database: Database,

    /// Where responses are written
    writer: W,

    /// Echo each input line before its response
    echo: bool,
}

impl<W: Write> Shell<W> {
    /// Create a shell over a database, honouring its `echo_commands` setting
    pub fn new(database: Database, writer: W) -> Self {
        let echo = database.config().echo_commands;
        Self {
            database,
            writer,
            echo,
        }
    }

    /// Run until END or end of input
    pub fn run<R: BufRead>(&mut self, reader: R) -> Result<SessionStats> {
        let mut stats = SessionStats::default();

        for raw in reader.split(b'\n') {
            let raw = raw?;
            let text = String::from_utf8_lossy(&raw);
            let trimmed = text.trim();
            if trimmed.is_empty() {
                continue;
            }

            if self.echo {
                writeln!(self.writer, "> {}", trimmed)?;
            }

            let command = match decode_line(&raw, trimmed) {
                Ok(command) => command,
                Err(e) => {
                    tracing::warn!("Rejected line {:?}: {}", trimmed, e);
                    stats.errors += 1;
                    self.send_response(&Response::error(&e.to_string()))?;
                    continue;
                }
            };

            tracing::trace!("Executing command: {:?}", command);

            if command == Command::End {
                stats.ended = true;
                break;
            }

            let response = self.execute_command(command);
            stats.commands_executed += 1;
            self.send_response(&response)?;
        }

        self.writer.flush()?;

        Ok(stats)
    }

    /// Run every line of a script file
    pub fn run_file(&mut self, path: &Path) -> Result<SessionStats> {
        let file = File::open(path)?;
        tracing::debug!("Running script {}", path.display());
        self.run(BufReader::new(file))
    }

    /// Execute a command and return a response
    fn execute_command(&mut self, command: Command) -> Response {
        match self.database.execute(command) {
            Ok(response) => response,
            Err(KvError::NoTransaction) => Response::NoTransaction,
            Err(e) => Response::error(&e.to_string()),
        }
    }

    /// Write a response line, if the response prints anything
    fn send_response(&mut self, response: &Response) -> Result<()> {
        if let Some(line) = encode_response(response) {
            writeln!(self.writer, "{}", line)?;
        }
        Ok(())
    }

    /// The database this shell drives
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Consume the shell, returning the database and writer
    pub fn into_parts(self) -> (Database, W) {
        (self.database, self.writer)
    }
}

/// Decode one raw input line; bytes that are not UTF-8 are a parse error
fn decode_line(raw: &[u8], trimmed: &str) -> Result<Command> {
    std::str::from_utf8(raw)
        .map_err(|e| KvError::Parse(format!("line is not valid UTF-8: {}", e)))?;
    decode_command(trimmed)
}
