//! # tsgen-core
//!
//! Scaffolding library for the tsgen CLI providing:
//! - The interactive prompt sequence (project name, npm init mode, port)
//! - `package.json` script injection and `tsconfig.json` merging
//! - External tool invocation (npm, npx, git) behind a [`CommandRunner`] trait
//! - The ordered scaffolding workflow
//!
//! # Examples
//!
//! ## Scaffold a project without prompting
//!
//! ```no_run
//! use camino::Utf8Path;
//! use tsgen_core::{ProjectParameters, ScaffoldConfig, Scaffolder, SystemRunner};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ScaffoldConfig::default();
//! let runner = SystemRunner::new();
//! let scaffolder = Scaffolder::new(&config, &runner)?;
//!
//! let params = ProjectParameters::from_answers("demo", "", "8080")?;
//! let report = scaffolder.scaffold(&params, Utf8Path::new("/tmp")).await?;
//! println!("Created {}", report.root);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod deps;
pub mod entrypoint;
pub mod error;
pub mod manifest;
pub mod process;
pub mod prompt;
pub mod tsconfig;
pub mod types;
pub mod vcs;
pub mod watcher;
pub mod workdir;
pub mod workflow;

pub use config::ScaffoldConfig;
pub use error::{Error, Result};
pub use process::{CommandRunner, Invocation, SystemRunner};
pub use prompt::{collect_parameters, InputSource, LineInput, TerminalInput};
pub use types::{InitMode, Port, ProjectParameters};
pub use workdir::WorkingDirectory;
pub use workflow::{ScaffoldReport, Scaffolder, Stage, Step};
