//! Small helpers shared across CLI tests.

use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn cli(vertices: usize, probability: f64, seed: i64) -> Cli {
    Cli {
        vertices,
        probability,
        seed,
        output: None,
        comment: false,
    }
}

pub(super) fn cli_writing_to(path: PathBuf, comment: bool) -> Cli {
    Cli {
        output: Some(path),
        comment,
        ..cli(5, 1.0, 3)
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
