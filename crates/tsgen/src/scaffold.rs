//! Interactive scaffolding command

use anyhow::{Context, Result};
use camino::Utf8Path;
use std::io::{IsTerminal, Read};
use tsgen_core::{InputSource, LineInput, ScaffoldConfig, Scaffolder, SystemRunner, TerminalInput};

use crate::cli::Cli;
use crate::output;
use crate::progress::ProgressRunner;
use crate::utils::{current_dir, default_config_path};

/// Ask for the project parameters and generate the project
pub async fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let parent = current_dir()?;

    if !cli.quiet {
        output::header("Create TypeScript Project");
    }

    let runner = ProgressRunner::new(SystemRunner::new(), cli.quiet);
    let scaffolder = Scaffolder::new(&config, &runner)?;

    let mut input = input_source();
    let params = scaffolder.collect(input.as_mut())?;
    // Release stdin before npm may need it
    drop(input);

    if !cli.quiet {
        output::kv("Project name", &params.name);
        output::kv("npm init", &params.init_mode.to_string());
        output::kv("Port", &params.port.to_string());
        output::kv("Location", parent.join(&params.name).as_str());
        println!();
    }

    let report = scaffolder
        .scaffold(&params, &parent)
        .await
        .with_context(|| format!("Failed to scaffold project '{}'", params.name))?;

    for warning in &report.warnings {
        output::warning(warning);
    }

    if !cli.quiet {
        println!();
        output::success(&format!("Project '{}' created successfully", params.name));
        for file in &report.files {
            let relative = file.strip_prefix(&report.root).unwrap_or(file.as_path());
            output::kv("Created", relative.as_str());
        }

        println!();
        output::info("Next steps:");
        println!("   1. cd {}", params.name);
        println!("   2. npm run dev");
    }

    Ok(())
}

/// Load settings from `--config`, or the user config file if it exists
fn load_config(explicit: Option<&Utf8Path>) -> Result<ScaffoldConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            anyhow::bail!("Settings file not found: {}", path);
        }
        return ScaffoldConfig::load(Some(path))
            .with_context(|| format!("Failed to load settings from {}", path));
    }

    let default_path = default_config_path();
    ScaffoldConfig::load(default_path.as_deref()).context("Failed to load settings")
}

/// Terminal prompts when attended, plain line reading when stdin is piped
fn input_source() -> Box<dyn InputSource> {
    if std::io::stdin().is_terminal() {
        Box::new(TerminalInput::new())
    } else {
        tracing::debug!("stdin is not a terminal, reading answers line by line");
        Box::new(LineInput::new(unbuffered_stdin(), std::io::stderr()))
    }
}

/// Stdin without the process-wide buffer, so unread answers reach `npm init`
#[cfg(unix)]
fn unbuffered_stdin() -> Box<dyn Read> {
    use std::os::fd::AsFd;

    match std::io::stdin().as_fd().try_clone_to_owned() {
        Ok(fd) => Box::new(std::fs::File::from(fd)),
        Err(e) => {
            tracing::debug!("Could not duplicate stdin, reading it buffered: {}", e);
            Box::new(std::io::stdin())
        }
    }
}

#[cfg(not(unix))]
fn unbuffered_stdin() -> Box<dyn Read> {
    Box::new(std::io::stdin())
}
