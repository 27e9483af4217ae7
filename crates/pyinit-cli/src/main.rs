//! `pyinit`: create a ready-to-use Python project.
//!
//! Exit codes:
//!
//! | Code | Meaning                                         |
//! |------|-------------------------------------------------|
//! |  0   | success                                         |
//! |  1   | filesystem or external tool failure, internal   |
//! |  2   | bad arguments, invalid name, existing directory |
//! |  3   | unknown template                                |
//! |  4   | configuration problem                           |

use std::{io::IsTerminal as _, process::ExitCode};

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands, ConfigCommands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A missing .env is the normal case.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version are reported as "errors" on stdout.
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("pyinit: {e:#}");
        return ExitCode::from(1);
    }

    let verbose = cli.global.verbose > 0;
    debug!(verbose = cli.global.verbose, quiet = cli.global.quiet, "Arguments parsed");

    // `config init` is what creates the file, so never require it here.
    let config = if matches!(cli.command, Commands::Config(ConfigCommands::Init { .. })) {
        AppConfig::default()
    } else {
        match AppConfig::load(cli.global.config.as_deref()) {
            Ok(config) => config,
            Err(e) => return report(CliError::from(e), verbose),
        }
    };

    let output = OutputManager::new(&cli.global, &config);
    debug!(format = ?output.format(), color = output.supports_color(), "Output configured");

    match dispatch(cli, &config, &output) {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(e) => report(e, verbose),
    }
}

#[instrument(skip_all)]
fn dispatch(cli: Cli, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Init(args) => commands::init::execute(args, config, output),
        Commands::Templates(args) => commands::templates::execute(args, config, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, &cli.global, config, output),
    }
}

/// Print `err` on stderr and turn it into the process exit code.
fn report(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    let rendered = if std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{rendered}");

    ExitCode::from(err.exit_code())
}
