//! DIMACS edge-list serialisation.
//!
//! The problem line `p edge <n> <m>` is followed by one `e <u> <w>` line per
//! edge with one-indexed endpoints. Optional `c` comment lines precede the
//! problem line.

use std::io::{self, Write};

use crate::generator::Graph;

/// Writes `graph` in DIMACS edge format.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// use gnpgen_core::{GnpParams, generate, write_dimacs};
///
/// let params = GnpParams::new(3, 1.0, 0).expect("parameters are valid");
/// let mut out = Vec::new();
/// write_dimacs(&generate(&params), &mut out).expect("writing to a Vec succeeds");
/// assert_eq!(out, b"p edge 3 3\ne 1 2\ne 1 3\ne 2 3\n");
/// ```
pub fn write_dimacs(graph: &Graph, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "p edge {} {}", graph.vertex_count(), graph.edge_count())?;
    for edge in graph.edges() {
        writeln!(writer, "e {} {}", edge.u() + 1, edge.w() + 1)?;
    }
    Ok(())
}

/// Writes `graph` preceded by one `c` line per line of `comment`.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
pub fn write_dimacs_with_comment(
    graph: &Graph,
    comment: &str,
    mut writer: impl Write,
) -> io::Result<()> {
    for line in comment.lines() {
        if line.is_empty() {
            writeln!(writer, "c")?;
        } else {
            writeln!(writer, "c {line}")?;
        }
    }
    write_dimacs(graph, writer)
}
