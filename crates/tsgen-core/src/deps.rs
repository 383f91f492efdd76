//! Dependency installation

use crate::config::ScaffoldConfig;
use crate::process::Invocation;

/// The two install commands, runtime packages first
///
/// An empty package list produces no command.
pub fn install_invocations(config: &ScaffoldConfig) -> Vec<Invocation> {
    let npm = &config.tools.package_manager;
    let silent = config.silent.install;
    let mut invocations = Vec::with_capacity(2);

    if !config.dependencies.runtime.is_empty() {
        let args = std::iter::once("install".to_string())
            .chain(config.dependencies.runtime.iter().cloned());
        invocations.push(Invocation::new(npm, args).silent(silent));
    }

    if !config.dependencies.dev.is_empty() {
        let args = ["install".to_string(), "--save-dev".to_string()]
            .into_iter()
            .chain(config.dependencies.dev.iter().cloned());
        invocations.push(Invocation::new(npm, args).silent(silent));
    }

    invocations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_install_commands() {
        let invocations = install_invocations(&ScaffoldConfig::default());
        assert_eq!(invocations.len(), 2);
        assert_eq!(invocations[0].command_line(), "npm install express");
        assert_eq!(
            invocations[1].command_line(),
            "npm install --save-dev typescript tsx nodemon @types/node @types/express"
        );
    }

    #[test]
    fn test_empty_lists_are_skipped() {
        let mut config = ScaffoldConfig::default();
        config.dependencies.runtime.clear();

        let invocations = install_invocations(&config);
        assert_eq!(invocations.len(), 1);
        assert!(invocations[0].args.contains(&"--save-dev".to_string()));
    }
}
