//! Version-control bootstrap

use crate::config::ScaffoldConfig;
use crate::process::Invocation;

/// File name of the ignore-file
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Fixed ignore-file content
pub const GITIGNORE: &str = include_str!("../templates/gitignore");

/// `git init`
pub fn init_invocation(config: &ScaffoldConfig) -> Invocation {
    Invocation::new(&config.tools.vcs, ["init"]).silent(config.silent.vcs_init)
}
