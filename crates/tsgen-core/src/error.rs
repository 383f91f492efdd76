//! Error types for tsgen-core

use camino::Utf8PathBuf;
use thiserror::Error;

/// Result type alias using tsgen-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Port answer is not a number in 1-65535
    #[error("Invalid port: '{value}'. Expected a number between 1 and 65535")]
    InvalidPort { value: String },

    /// Project name cannot be used as a directory name
    #[error("Invalid project name: '{name}'. Must be a single directory name")]
    InvalidProjectName { name: String },

    /// Project directory could not be created
    #[error("Failed to create project directory {path}: {source}")]
    DirectoryCreate {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file inside the project could not be written
    #[error("Failed to write {path}: {source}")]
    FileWrite {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// External command exited with a non-zero status
    #[error("Command failed: {command} (exit code: {code}){}", format_stderr(.stderr))]
    CommandFailed {
        command: String,
        code: String,
        stderr: String,
    },

    /// External command is not on PATH
    #[error("Required command not found: {command}")]
    CommandNotFound { command: String },

    /// Reading an answer from the input source failed
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Settings file is unusable
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Template error from Tera
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n{}", trimmed)
    }
}

impl Error {
    /// Create an invalid port error
    pub fn invalid_port(value: impl Into<String>) -> Self {
        Self::InvalidPort {
            value: value.into(),
        }
    }

    /// Create an invalid project name error
    pub fn invalid_project_name(name: impl Into<String>) -> Self {
        Self::InvalidProjectName { name: name.into() }
    }

    /// Create a file write error
    pub fn file_write(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(
        command: impl Into<String>,
        code: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            command: command.into(),
            code: code.into(),
            stderr: stderr.into(),
        }
    }

    /// Create a command not found error
    pub fn command_not_found(command: impl Into<String>) -> Self {
        Self::CommandNotFound {
            command: command.into(),
        }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt(message.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
