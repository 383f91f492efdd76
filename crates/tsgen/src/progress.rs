//! Command runner decorator that reports progress on the terminal

use async_trait::async_trait;
use camino::Utf8Path;
use tsgen_core::{CommandRunner, Invocation, Result};

use crate::output;

/// Shows a spinner while a silent command runs
///
/// Commands that inherit the terminal print their own output, so only a
/// header line is shown for them.
pub struct ProgressRunner<R> {
    inner: R,
    quiet: bool,
}

impl<R: CommandRunner> ProgressRunner<R> {
    pub fn new(inner: R, quiet: bool) -> Self {
        Self { inner, quiet }
    }
}

#[async_trait]
impl<R: CommandRunner> CommandRunner for ProgressRunner<R> {
    async fn run(&self, invocation: &Invocation, cwd: &Utf8Path) -> Result<()> {
        if self.quiet {
            return self.inner.run(invocation, cwd).await;
        }

        if !invocation.silent {
            output::info(&format!("Running {}", invocation));
            return self.inner.run(invocation, cwd).await;
        }

        let pb = output::spinner(&format!("Running {}", invocation));
        let result = self.inner.run(invocation, cwd).await;
        pb.finish_and_clear();

        if result.is_ok() {
            output::success(&invocation.command_line());
        }
        result
    }
}
