//! Minimal DIMACS edge-format reader for asserting generator output.
//!
//! The reader is strict: it accepts `c` comment lines before the problem
//! line, exactly one `p edge <n> <m>` line, and `e <u> <w>` lines after it.
//! Anything else is reported so tests fail loudly on malformed output.

use std::num::ParseIntError;

use thiserror::Error;

/// Parsed contents of a DIMACS edge file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimacsInstance {
    /// Comment lines without the leading `c` marker.
    pub comments: Vec<String>,
    /// Vertex count declared on the problem line.
    pub vertex_count: usize,
    /// Edge count declared on the problem line.
    pub declared_edges: usize,
    /// Edge lines in file order, one-indexed as written.
    pub edges: Vec<(usize, usize)>,
}

/// Errors raised while reading DIMACS text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DimacsParseError {
    /// No `p edge` line was found.
    #[error("missing `p edge` problem line")]
    MissingProblemLine,
    /// A line did not match the expected shape.
    #[error("line {line}: unexpected content `{content}`")]
    UnexpectedLine {
        /// One-based line number.
        line: usize,
        /// The offending line.
        content: String,
    },
    /// A numeric field failed to parse.
    #[error("line {line}: invalid number: {source}")]
    InvalidNumber {
        /// One-based line number.
        line: usize,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },
}

impl DimacsInstance {
    /// Parses `text` as a DIMACS edge file.
    ///
    /// # Errors
    /// Returns [`DimacsParseError`] when the text is not well-formed.
    ///
    /// # Examples
    /// ```
    /// use gnpgen_test_support::dimacs::DimacsInstance;
    ///
    /// let instance = DimacsInstance::parse("p edge 2 1\ne 1 2\n").expect("valid DIMACS");
    /// assert_eq!(instance.edges, vec![(1, 2)]);
    /// ```
    pub fn parse(text: &str) -> Result<Self, DimacsParseError> {
        let mut comments = Vec::new();
        let mut header: Option<(usize, usize)> = None;
        let mut edges = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let unexpected = || DimacsParseError::UnexpectedLine {
                line,
                content: raw.to_owned(),
            };
            let mut tokens = raw.split(' ');
            match (tokens.next(), header) {
                (Some("c"), None) => {
                    let rest = raw.strip_prefix("c").unwrap_or_default();
                    comments.push(rest.strip_prefix(' ').unwrap_or(rest).to_owned());
                    continue;
                }
                (Some("p"), None) => {
                    if tokens.next() != Some("edge") {
                        return Err(unexpected());
                    }
                    let (n, m) = read_pair(&mut tokens, line).ok_or_else(unexpected)??;
                    header = Some((n, m));
                }
                (Some("e"), Some(_)) => {
                    let pair = read_pair(&mut tokens, line).ok_or_else(unexpected)??;
                    edges.push(pair);
                }
                _ => return Err(unexpected()),
            }
            if tokens.next().is_some() {
                return Err(unexpected());
            }
        }

        let (vertex_count, declared_edges) = header.ok_or(DimacsParseError::MissingProblemLine)?;
        Ok(Self {
            comments,
            vertex_count,
            declared_edges,
            edges,
        })
    }
}

fn read_pair<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line: usize,
) -> Option<Result<(usize, usize), DimacsParseError>> {
    let first = tokens.next()?;
    let second = tokens.next()?;
    let parse = |token: &str| {
        token
            .parse::<usize>()
            .map_err(|source| DimacsParseError::InvalidNumber { line, source })
    };
    Some(parse(first).and_then(|a| parse(second).map(|b| (a, b))))
}
