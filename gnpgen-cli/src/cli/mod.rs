//! Command-line interface for the gnpgen generator.
//!
//! Takes `VERTICES PROBABILITY SEED` positionally, validates them, draws the
//! graph, and writes it as DIMACS to stdout or to `--output`.

mod commands;

pub use commands::{Cli, CliError, GenerationSummary, render_summary, run_cli, write_output};

#[cfg(test)]
mod test_helpers;
