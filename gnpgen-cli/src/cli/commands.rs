//! Argument parsing and command execution for the gnpgen CLI.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use gnpgen_core::{
    GeneratorError, GnpParams, Graph, generate, write_dimacs, write_dimacs_with_comment,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Command-line options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "gnpgen",
    about = "Generate an Erdős–Rényi G(n, p) random graph in DIMACS edge format."
)]
pub struct Cli {
    /// Number of vertices.
    #[arg(value_name = "VERTICES")]
    pub vertices: usize,

    /// Probability that each pair of vertices is joined, in [0, 1].
    #[arg(value_name = "PROBABILITY", allow_negative_numbers = true)]
    pub probability: f64,

    /// Seed for the pseudorandom number generator.
    #[arg(value_name = "SEED", allow_negative_numbers = true)]
    pub seed: i64,

    /// Write the graph to this file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Prefix the output with a DIMACS comment describing the parameters.
    #[arg(long)]
    pub comment: bool,
}

/// Errors surfaced while executing the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// The requested parameters were rejected before generation.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    /// The output file could not be created.
    #[error("failed to create `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Writing the DIMACS stream failed.
    #[error("failed to write graph: {0}")]
    Write(#[source] io::Error),
}

/// Outcome of a generation run, ready to be rendered.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    /// Validated parameters the graph was drawn from.
    pub params: GnpParams,
    /// The generated graph.
    pub graph: Graph,
    /// Comment emitted ahead of the problem line, if requested.
    pub header: Option<String>,
}

/// Validates the parameters in `cli` and generates the graph.
///
/// # Errors
/// Returns [`CliError::Generator`] when the probability is not a finite value
/// in `[0, 1]`.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use gnpgen_cli::cli::{Cli, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     vertices: 4,
///     probability: 1.0,
///     seed: 7,
///     output: None,
///     comment: false,
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.graph.edge_count(), 6);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(
        vertices = cli.vertices,
        probability = cli.probability,
        seed = cli.seed,
        comment = cli.comment,
    ),
)]
pub fn run_cli(cli: Cli) -> Result<GenerationSummary, CliError> {
    let params = GnpParams::new(cli.vertices, cli.probability, cli.seed)?;
    info!(
        candidate_pairs = params.candidate_pairs(),
        "parameters accepted"
    );
    let graph = generate(&params);
    let header = cli.comment.then(|| describe(&params));
    info!(edges = graph.edge_count(), "graph generated");
    Ok(GenerationSummary {
        params,
        graph,
        header,
    })
}

/// Renders `summary` as DIMACS text to `writer`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use gnpgen_cli::cli::{GenerationSummary, render_summary};
/// # use gnpgen_core::{GnpParams, generate};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let params = GnpParams::new(2, 1.0, 0)?;
/// let summary = GenerationSummary {
///     params,
///     graph: generate(&params),
///     header: None,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(buffer, b"p edge 2 1\ne 1 2\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &GenerationSummary, writer: impl Write) -> io::Result<()> {
    match summary.header.as_deref() {
        Some(header) => write_dimacs_with_comment(&summary.graph, header, writer),
        None => write_dimacs(&summary.graph, writer),
    }
}

/// Renders `summary` to `output`, or to stdout when no path is given.
///
/// # Errors
/// Returns [`CliError::Io`] if the output file cannot be created and
/// [`CliError::Write`] if writing or flushing fails.
#[instrument(
    name = "cli.write_output",
    err,
    skip(summary),
    fields(destination = field::Empty),
)]
pub fn write_output(summary: &GenerationSummary, output: Option<&Path>) -> Result<(), CliError> {
    let span = Span::current();
    match output {
        Some(path) => {
            span.record("destination", field::display(path.display()));
            let file = File::create(path).map_err(|source| CliError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            write_buffered(summary, file)
        }
        None => {
            span.record("destination", field::display("<stdout>"));
            write_buffered(summary, io::stdout().lock())
        }
    }
}

fn write_buffered(summary: &GenerationSummary, sink: impl Write) -> Result<(), CliError> {
    let mut writer = BufWriter::new(sink);
    render_summary(summary, &mut writer).map_err(CliError::Write)?;
    writer.flush().map_err(CliError::Write)
}

fn describe(params: &GnpParams) -> String {
    format!(
        "Random graph, n {}, p {}, s {}",
        params.vertex_count(),
        params.probability(),
        params.seed()
    )
}
