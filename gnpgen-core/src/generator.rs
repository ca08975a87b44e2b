//! Erdős–Rényi G(n, p) edge sampling.
//!
//! Every unordered vertex pair `(u, w)` with `u < w` is visited in
//! lexicographic order and receives exactly one uniform draw from
//! `[0.0, 1.0)`. The pair becomes an edge when the draw is strictly below
//! `p`. The visit order is part of the output contract: reordering the draws
//! changes which edges a given seed produces.

use rand::Rng;
use tracing::{Span, field, instrument};

use crate::params::GnpParams;

/// One undirected edge between zero-indexed vertices `u < w`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    u: usize,
    w: usize,
}

impl Edge {
    /// Creates an edge, normalising the endpoints so the lower one comes first.
    ///
    /// # Examples
    /// ```
    /// use gnpgen_core::Edge;
    ///
    /// let edge = Edge::new(3, 1);
    /// assert_eq!((edge.u(), edge.w()), (1, 3));
    /// ```
    #[must_use]
    pub const fn new(a: usize, b: usize) -> Self {
        if a <= b { Self { u: a, w: b } } else { Self { u: b, w: a } }
    }

    /// Lower endpoint.
    #[must_use]
    pub const fn u(&self) -> usize {
        self.u
    }

    /// Upper endpoint.
    #[must_use]
    pub const fn w(&self) -> usize {
        self.w
    }
}

/// A generated graph: the vertex set `{0, …, n-1}` and its edges in
/// generation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Wraps an edge sequence produced for `vertex_count` vertices.
    #[must_use]
    pub const fn from_edges(vertex_count: usize, edges: Vec<Edge>) -> Self {
        Self {
            vertex_count,
            edges,
        }
    }

    /// Number of vertices `n`.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of edges `m`.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges in generation order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Samples a G(n, p) graph from `params`, seeding a fresh PRNG.
///
/// Identical parameters produce identical graphs for a given build and
/// platform. The stream comes from `SmallRng`, whose output may differ between
/// 32- and 64-bit targets and between `rand` releases.
///
/// # Examples
/// ```
/// use gnpgen_core::{GnpParams, generate};
///
/// let params = GnpParams::new(4, 1.0, 42).expect("parameters are valid");
/// let graph = generate(&params);
/// assert_eq!(graph.edge_count(), 6);
/// ```
#[instrument(
    name = "generator.generate",
    skip(params),
    fields(
        vertices = params.vertex_count(),
        probability = params.probability(),
        seed = params.seed(),
        edges = field::Empty,
    ),
)]
#[must_use]
pub fn generate(params: &GnpParams) -> Graph {
    let mut rng = params.rng();
    let edges = generate_edges(params.vertex_count(), params.probability(), &mut rng);
    Span::current().record("edges", edges.len());
    Graph::from_edges(params.vertex_count(), edges)
}

/// Draws the edge sequence for `vertex_count` vertices from `rng`.
///
/// `probability` is not validated: values at or below zero (and `NaN`) never
/// include an edge, values above one always do.
pub fn generate_edges<R: Rng + ?Sized>(
    vertex_count: usize,
    probability: f64,
    rng: &mut R,
) -> Vec<Edge> {
    let mut edges = Vec::new();
    for u in 0..vertex_count {
        for w in (u + 1)..vertex_count {
            let draw: f64 = rng.r#gen();
            if draw < probability {
                edges.push(Edge { u, w });
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    fn pairs(graph: &Graph) -> Vec<(usize, usize)> {
        graph.edges().iter().map(|edge| (edge.u(), edge.w())).collect()
    }

    #[rstest]
    #[case::seed_zero(0)]
    #[case::seed_negative(-17)]
    #[case::seed_large(i64::MAX)]
    fn zero_probability_yields_no_edges(#[case] seed: i64) {
        let params = GnpParams::new(5, 0.0, seed).expect("parameters are valid");
        let graph = generate(&params);
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 0);
    }

    #[rstest]
    #[case::seed_zero(0)]
    #[case::seed_negative(-17)]
    #[case::seed_large(i64::MAX)]
    fn unit_probability_yields_complete_graph(#[case] seed: i64) {
        let params = GnpParams::new(4, 1.0, seed).expect("parameters are valid");
        let graph = generate(&params);
        assert_eq!(
            pairs(&graph),
            vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
        );
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn fewer_than_two_vertices_yield_no_edges(#[case] n: usize) {
        let params = GnpParams::new(n, 1.0, 9).expect("parameters are valid");
        assert_eq!(generate(&params).edge_count(), 0);
    }

    #[test]
    fn identical_parameters_are_deterministic() {
        let params = GnpParams::new(40, 0.3, 1234).expect("parameters are valid");
        assert_eq!(generate(&params), generate(&params));
    }

    #[test]
    fn different_seeds_produce_different_graphs() {
        let first = GnpParams::new(60, 0.5, 1).expect("parameters are valid");
        let second = GnpParams::new(60, 0.5, 2).expect("parameters are valid");
        assert_ne!(generate(&first).edges(), generate(&second).edges());
    }

    #[test]
    fn consumes_one_draw_per_candidate_pair() {
        let params = GnpParams::new(7, 0.5, 99).expect("parameters are valid");
        let mut rng = params.rng();
        let _ = generate_edges(params.vertex_count(), params.probability(), &mut rng);

        let mut reference = params.rng();
        for _ in 0..params.candidate_pairs() {
            let _: f64 = reference.r#gen();
        }
        assert_eq!(rng.r#gen::<u64>(), reference.r#gen::<u64>());
    }

    #[test]
    fn edges_follow_draw_order() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut draws = SmallRng::seed_from_u64(5);
        let edges = generate_edges(6, 0.4, &mut rng);

        let mut expected = Vec::new();
        for u in 0..6 {
            for w in (u + 1)..6 {
                let draw: f64 = draws.r#gen();
                if draw < 0.4 {
                    expected.push(Edge::new(u, w));
                }
            }
        }
        assert_eq!(edges, expected);
    }

    #[rstest]
    #[case::negative(-0.5, 0)]
    #[case::nan(f64::NAN, 0)]
    #[case::above_one(2.0, 10)]
    fn unvalidated_probabilities_degenerate(#[case] probability: f64, #[case] expected: usize) {
        let mut rng = SmallRng::seed_from_u64(3);
        assert_eq!(generate_edges(5, probability, &mut rng).len(), expected);
    }

    #[test]
    fn edge_new_orders_endpoints() {
        assert_eq!(Edge::new(4, 2), Edge::new(2, 4));
        assert_eq!(Edge::new(4, 2).u(), 2);
    }
}
