//! Interactive prompt sequence
//!
//! Questions are asked through an [`InputSource`] handle passed in by the
//! caller, so the same sequence runs against a terminal, piped stdin, or a
//! scripted reader in tests.

use crate::error::{Error, Result};
use crate::types::{ProjectParameters, DEFAULT_PORT, DEFAULT_PROJECT_NAME};
use dialoguer::Input;
use std::io::{ErrorKind, Read, Write};
use tracing::debug;

/// Line-oriented source of answers
pub trait InputSource {
    /// Ask `question` and return the raw answer
    ///
    /// `hint` is the value used when the answer is blank. Implementations
    /// return the answer untrimmed and never substitute the hint themselves.
    fn ask(&mut self, question: &str, hint: &str) -> Result<String>;
}

/// Prompts on the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn ask(&mut self, question: &str, hint: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(format!("{} ({})", question, hint))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::prompt(e.to_string()))
    }
}

/// Reads one answer per line from any reader
///
/// The reader is consumed a byte at a time and never past the end of the
/// current line, so input after the last answer stays available to child
/// processes such as an interactive `npm init`. End of input counts as a
/// blank answer.
pub struct LineInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: Read, W: Write> LineInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = Vec::new();
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => break,
                Ok(_) => {
                    line.push(byte[0]);
                    if byte[0] == b'\n' {
                        break;
                    }
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(String::from_utf8_lossy(&line).into_owned())
    }
}

impl<R: Read, W: Write> InputSource for LineInput<R, W> {
    fn ask(&mut self, question: &str, hint: &str) -> Result<String> {
        write!(self.writer, "{} ({}): ", question, hint)?;
        self.writer.flush()?;
        self.read_line()
    }
}

/// Ask the three scaffolding questions in order
pub fn collect_parameters(input: &mut dyn InputSource) -> Result<ProjectParameters> {
    let name = input.ask("Project name", DEFAULT_PROJECT_NAME)?;
    let use_defaults = input.ask("Use npm init defaults? [Y/n]", "Y")?;
    let port = input.ask("Server port", &DEFAULT_PORT.to_string())?;

    let params = ProjectParameters::from_answers(&name, &use_defaults, &port)?;
    debug!(
        "Collected parameters: name={}, init_mode={}, port={}",
        params.name, params.init_mode, params.port
    );
    Ok(params)
}
