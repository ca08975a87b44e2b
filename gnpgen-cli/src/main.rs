//! CLI entry point for the gnpgen random graph generator.
//!
//! Parses `VERTICES PROBABILITY SEED` with clap, generates the G(n, p)
//! graph, writes it as DIMACS, and maps errors to exit codes. Logging is
//! initialised first so every later step can emit structured diagnostics
//! via `tracing`.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use gnpgen_cli::{
    cli::{Cli, CliError, run_cli, write_output},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse CLI arguments, generate the graph, and write it out.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let output = cli.output.clone();
    let summary = run_cli(cli).context("failed to generate graph")?;
    write_output(&summary, output.as_deref()).context("failed to write graph")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = err
            .downcast_ref::<CliError>()
            .and_then(|cli_error| match cli_error {
                CliError::Generator(generator) => Some(generator.code()),
                _ => None,
            });
        let code_field = code.map(|code| field::display(code.as_str()));

        error!(error = %format!("{err:#}"), code = code_field, "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
