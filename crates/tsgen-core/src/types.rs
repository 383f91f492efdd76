//! Project parameter types collected from the prompt sequence

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Project name used when the answer is blank
pub const DEFAULT_PROJECT_NAME: &str = "my-app";

/// Server port used when the answer is blank
pub const DEFAULT_PORT: u16 = 3000;

/// How the package manager creates the manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitMode {
    /// Accept every package manager default (`npm init -y`)
    #[default]
    Default,
    /// Let the package manager ask its own questions (`npm init`)
    Interactive,
}

impl InitMode {
    /// Interpret a yes/no answer to "use defaults?"
    ///
    /// Blank means yes. Anything starting with `n` means no.
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim().chars().next() {
            Some('n') | Some('N') => Self::Interactive,
            _ => Self::Default,
        }
    }
}

impl fmt::Display for InitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Interactive => write!(f, "interactive"),
        }
    }
}

/// TCP port the generated server falls back to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Port(u16);

impl Port {
    pub fn get(self) -> u16 {
        self.0
    }
}

impl Default for Port {
    fn default() -> Self {
        Self(DEFAULT_PORT)
    }
}

impl FromStr for Port {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.parse::<u16>() {
            Ok(0) | Err(_) => Err(Error::invalid_port(trimmed)),
            Ok(port) => Ok(Self(port)),
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inputs for one scaffolding run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectParameters {
    pub name: String,
    pub init_mode: InitMode,
    pub port: Port,
}

impl ProjectParameters {
    /// Build parameters from raw answers, substituting defaults for blanks
    pub fn from_answers(name: &str, use_defaults: &str, port: &str) -> Result<Self> {
        let name = name.trim();
        let name = if name.is_empty() {
            DEFAULT_PROJECT_NAME.to_string()
        } else {
            validate_project_name(name)?;
            name.to_string()
        };

        let port = port.trim();
        let port = if port.is_empty() {
            Port::default()
        } else {
            port.parse()?
        };

        Ok(Self {
            name,
            init_mode: InitMode::from_answer(use_defaults),
            port,
        })
    }
}

impl Default for ProjectParameters {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROJECT_NAME.to_string(),
            init_mode: InitMode::Default,
            port: Port::default(),
        }
    }
}

/// The name becomes a directory under the invocation directory
fn validate_project_name(name: &str) -> Result<()> {
    if name == "." || name == ".." || name.contains('/') || name.contains('\\') {
        return Err(Error::invalid_project_name(name));
    }
    Ok(())
}
