//! External command execution
//!
//! Every call into npm, npx or git goes through a [`CommandRunner`]. The
//! runner decides nothing about the workflow: a non-zero exit is always an
//! error, and the caller propagates it.

use crate::error::{Error, Result};
use async_trait::async_trait;
use camino::Utf8Path;
use std::fmt;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::debug;

/// One external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// Capture output instead of inheriting the terminal
    pub silent: bool,
}

impl Invocation {
    /// Create a silent invocation
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            silent: true,
        }
    }

    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Program followed by its arguments, space separated
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Executes external commands inside the project directory
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `invocation` with `cwd` as its working directory
    ///
    /// Returns an error if the program cannot be found or exits non-zero.
    async fn run(&self, invocation: &Invocation, cwd: &Utf8Path) -> Result<()>;
}

/// Runs commands as real child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, invocation: &Invocation, cwd: &Utf8Path) -> Result<()> {
        let program = which::which(&invocation.program)
            .map_err(|_| Error::command_not_found(&invocation.program))?;

        let mut cmd = Command::new(program);
        cmd.current_dir(cwd).args(&invocation.args);

        debug!("Running: {} (in {})", invocation, cwd);

        if invocation.silent {
            let output = cmd.stdin(Stdio::null()).output().await?;
            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                return Err(Error::command_failed(
                    invocation.command_line(),
                    exit_code(output.status),
                    stderr,
                ));
            }
        } else {
            let status = cmd.status().await?;
            if !status.success() {
                return Err(Error::command_failed(
                    invocation.command_line(),
                    exit_code(status),
                    "",
                ));
            }
        }

        debug!("Command succeeded: {}", invocation);
        Ok(())
    }
}

fn exit_code(status: ExitStatus) -> String {
    status
        .code()
        .map(|code| code.to_string())
        .unwrap_or_else(|| "terminated by signal".to_string())
}
