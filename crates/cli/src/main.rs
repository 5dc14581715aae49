//! nulib2 - command-line front end for NuFX (ShrinkIt) archives
//!
//! Usage: `nulib2 [--json] [--no-color] [--quiet] [--dry-run] -command[modifiers] archive [filename-list]`
//!
//! The long options are handled by clap. Everything from the first other
//! token onward is the archive command line, which has its own
//! single-letter grammar implemented in nl-core.

mod exit_code;
mod help;
mod ops;
mod output;
mod usage;

use anyhow::Context;
use clap::Parser as _;
use nl_core::{
    ArchiveOps as _, CapabilityTable, Config, ConfigManager, Error, Invocation, Parser, dispatch,
};
use tracing_subscriber::EnvFilter;

use crate::exit_code::ExitCode;
use crate::ops::StandaloneOps;
use crate::output::{Formatter, OutputConfig};
use crate::usage::{USAGE_REMINDER, usage_text};

/// Environment variable holding the log filter
const LOG_ENV: &str = "NULIB2_LOG";

/// Command-line front end for NuFX (ShrinkIt) archives
#[derive(clap::Parser, Debug)]
#[command(name = "nulib2", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Output JSON instead of human-readable text
    #[arg(long, env = "NULIB2_JSON")]
    json: bool,

    /// Disable colored output
    #[arg(long, env = "NULIB2_NO_COLOR")]
    no_color: bool,

    /// Only print errors
    #[arg(long, env = "NULIB2_QUIET")]
    quiet: bool,

    /// Validate the command line and print it instead of running it
    #[arg(long)]
    dry_run: bool,

    /// -command[modifiers] archive [filename-list]
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    args: Vec<String>,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::OperationFailed.into()
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = ConfigManager::new()
        .and_then(|manager| manager.load())
        .context("unable to load configuration")?;
    init_logging(&config)?;

    let output_config = OutputConfig::merge(&config.output, cli.json, cli.no_color, cli.quiet);
    let formatter = Formatter::new(output_config, program_name());
    if !formatter.colors_enabled() {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }
    let table = CapabilityTable::standard();
    let ops = StandaloneOps::new(&table, &formatter);

    let invocation = match Parser::new(&table, ops.features()).parse(&cli.args) {
        Ok(invocation) => invocation,
        Err(e) => return Ok(report(&e, &formatter, &ops)),
    };

    if let Some(state) = invocation.state() {
        for warning in state.warnings() {
            formatter.warning(&warning.to_string());
        }
    }

    if cli.dry_run {
        formatter.output(&invocation);
        return Ok(ExitCode::Success);
    }

    Ok(execute(&invocation, &table, &ops, &formatter))
}

fn execute(
    invocation: &Invocation,
    table: &CapabilityTable,
    ops: &StandaloneOps<'_>,
    formatter: &Formatter,
) -> ExitCode {
    match dispatch(invocation, table, ops) {
        Ok(()) => ExitCode::Success,
        Err(e) => report(&e, formatter, ops),
    }
}

/// Print a failure the way its class requires and pick the exit code
fn report(error: &Error, formatter: &Formatter, ops: &StandaloneOps<'_>) -> ExitCode {
    let code = ExitCode::from_error(error);

    match error {
        Error::Parse(parse) if parse.shows_general_usage() && !formatter.is_json() => {
            print!("{}", usage_text(formatter.program(), &ops.features()));
        }
        Error::Parse(_) => {
            formatter.error(&error.to_string());
            formatter.hint(USAGE_REMINDER);
        }
        _ if error.is_internal() => {
            formatter.error(&error.to_string());
        }
        _ => {
            formatter.error(&error.to_string());
            formatter.println("Failed.");
        }
    }

    tracing::debug!(code = code.code(), "Exiting");
    code
}

/// Program name from argv[0], without its directory
fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(std::path::Path::new)
        .and_then(|p| p.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "nulib2".to_string())
}

/// Log filter: `NULIB2_LOG`, then the config file, then `warn`.
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let filter = match std::env::var(LOG_ENV) {
        Ok(directives) => EnvFilter::try_new(directives),
        Err(_) => EnvFilter::try_new(config.log.level.as_deref().unwrap_or("warn")),
    }
    .context("invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser as _;

    #[test]
    fn test_cli_passes_grammar_through() {
        let cli = Cli::try_parse_from(["nulib2", "-aee", "archive.shk", "f1"]).unwrap();
        assert_eq!(cli.args, ["-aee", "archive.shk", "f1"]);
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_global_options_before_command() {
        let cli = Cli::try_parse_from(["nulib2", "--json", "--dry-run", "-h"]).unwrap();
        assert!(cli.json);
        assert!(cli.dry_run);
        assert_eq!(cli.args, ["-h"]);
    }

    #[test]
    fn test_cli_options_after_command_belong_to_grammar() {
        let cli = Cli::try_parse_from(["nulib2", "t", "--json", "a.shk"]).unwrap();
        assert!(!cli.json);
        assert_eq!(cli.args, ["t", "--json", "a.shk"]);
    }

    #[test]
    fn test_report_exit_codes() {
        let table = CapabilityTable::standard();
        let formatter = Formatter::new(
            OutputConfig {
                quiet: true,
                no_color: true,
                ..Default::default()
            },
            "nulib2",
        );
        let ops = StandaloneOps::new(&table, &formatter);

        let err = Error::from(nl_core::ParseError::MissingFilespec(nl_core::Command::Delete));
        assert_eq!(report(&err, &formatter, &ops), ExitCode::UsageError);

        let err = Error::Unsupported("add".to_string());
        assert_eq!(report(&err, &formatter, &ops), ExitCode::OperationFailed);
    }
}
