//! CLI argument parsing with clap
//!
//! Project settings are never taken from flags; they are always asked for
//! interactively. Flags only control logging and the settings file.

use camino::Utf8PathBuf;
use clap::Parser;

/// tsgen - scaffold a TypeScript + Express starter project
#[derive(Parser, Debug)]
#[command(name = "tsgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to a settings file (defaults to the user config directory)
    #[arg(short, long)]
    pub config: Option<Utf8PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["tsgen"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["tsgen", "-vv", "--config", "/tmp/tsgen.yaml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config.as_deref().map(|p| p.as_str()), Some("/tmp/tsgen.yaml"));
    }

    #[test]
    fn test_positional_arguments_rejected() {
        assert!(Cli::try_parse_from(["tsgen", "demo"]).is_err());
    }
}
