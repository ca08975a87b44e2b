//! gnpgen core library.
//!
//! Samples Erdős–Rényi G(n, p) graphs from an explicitly seeded PRNG and
//! serialises them as DIMACS edge lists. Identical `(n, p, seed)` triples
//! always yield byte-identical output.

mod dimacs;
mod error;
mod generator;
mod params;

pub use crate::{
    dimacs::{write_dimacs, write_dimacs_with_comment},
    error::{GeneratorError, GeneratorErrorCode, Result},
    generator::{Edge, Graph, generate, generate_edges},
    params::GnpParams,
};
