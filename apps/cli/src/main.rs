mod commands;
mod core;
mod ui;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::commands::{CheckCommand, InstallCommand, ListCommand, StatusCommand};
use crate::core::CliError;

#[derive(Parser)]
#[command(name = "devenv")]
#[command(version, about = "Bootstrap your developer environment", long_about = None)]
struct Cli {
    /// Tool catalog (YAML, JSON or TOML)
    #[arg(long, short, global = true, env = "DEVENV_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Select tools and install them with their dependencies
    Install(InstallCommand),
    /// Show which catalog tools are present on this machine
    Status(StatusCommand),
    /// Report dangling dependencies and cycles in the catalog
    Check(CheckCommand),
    /// List the catalog grouped by category
    List(ListCommand),
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config.as_deref();
    let outcome = match cli.command {
        Commands::Install(cmd) => cmd.execute(config),
        Commands::Status(cmd) => cmd.execute(config),
        Commands::Check(cmd) => cmd.execute(config),
        Commands::List(cmd) => cmd.execute(config),
    };

    match outcome {
        Ok(code) => code,
        Err(err) => {
            report(err);
            ExitCode::FAILURE
        }
    }
}

/// Prints a failed command's error. Returns the `CliError` that was shown.
fn report(err: anyhow::Error) -> CliError {
    let cli_err = err
        .downcast::<CliError>()
        .unwrap_or_else(|other| CliError::Runtime(format!("{other:#}")));

    match &cli_err {
        CliError::Cancelled => {
            if let Err(e) = cliclack::outro_cancel("Cancelled") {
                tracing::debug!(error = %e, "could not draw cancel outro");
            }
        }
        shown => shown.render(),
    }
    cli_err
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_install_flags() {
        let cli = Cli::try_parse_from([
            "devenv", "-vv", "install", "--tool", "git", "-t", "jq", "--yes", "--skip-dependents",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Install(cmd) => {
                assert_eq!(cmd.tools, vec!["git", "jq"]);
                assert!(cmd.yes);
                assert!(cmd.skip_dependents);
                assert!(!cmd.skip_installed);
            }
            _ => panic!("expected install"),
        }
    }

    #[test]
    fn test_report_classifies_errors() {
        assert!(matches!(
            report(anyhow::Error::from(CliError::Cancelled)),
            CliError::Cancelled
        ));

        let other = anyhow::anyhow!("disk full").context("writing log");
        match report(other) {
            CliError::Runtime(message) => assert_eq!(message, "writing log: disk full"),
            err => panic!("unexpected {err:?}"),
        }
    }

    #[test]
    fn test_config_after_subcommand() {
        let cli = Cli::try_parse_from(["devenv", "status", "--config", "tools.yaml", "--paths"])
            .unwrap();
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("tools.yaml")));
        assert!(matches!(cli.command, Commands::Status(StatusCommand { paths: true })));
    }
}
