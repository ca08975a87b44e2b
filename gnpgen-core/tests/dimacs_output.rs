//! Properties of the DIMACS text produced for generated graphs.

use gnpgen_core::{GnpParams, generate, write_dimacs, write_dimacs_with_comment};
use gnpgen_test_support::dimacs::DimacsInstance;
use proptest::prelude::*;
use rstest::rstest;

fn render(n: usize, p: f64, seed: i64) -> String {
    let params = GnpParams::new(n, p, seed).expect("parameters are valid");
    let mut out = Vec::new();
    write_dimacs(&generate(&params), &mut out).expect("writing to a Vec succeeds");
    String::from_utf8(out).expect("DIMACS output is ASCII")
}

#[rstest]
#[case::seed_one(1)]
#[case::seed_negative(-42)]
fn zero_probability_emits_only_problem_line(#[case] seed: i64) {
    assert_eq!(render(5, 0.0, seed), "p edge 5 0\n");
}

#[rstest]
#[case::seed_one(1)]
#[case::seed_negative(-42)]
fn unit_probability_emits_every_pair(#[case] seed: i64) {
    assert_eq!(
        render(4, 1.0, seed),
        "p edge 4 6\ne 1 2\ne 1 3\ne 1 4\ne 2 3\ne 2 4\ne 3 4\n"
    );
}

#[rstest]
fn distinct_seeds_change_the_edge_set() {
    let first = DimacsInstance::parse(&render(80, 0.5, 7)).expect("valid DIMACS");
    let second = DimacsInstance::parse(&render(80, 0.5, 8)).expect("valid DIMACS");
    assert_ne!(first.edges, second.edges);
}

#[rstest]
fn comment_header_is_readable() {
    let params = GnpParams::new(3, 1.0, 5).expect("parameters are valid");
    let mut out = Vec::new();
    write_dimacs_with_comment(&generate(&params), "Random graph, n 3, p 1, s 5", &mut out)
        .expect("writing to a Vec succeeds");
    let text = String::from_utf8(out).expect("DIMACS output is ASCII");
    let instance = DimacsInstance::parse(&text).expect("valid DIMACS");
    assert_eq!(instance.comments, vec!["Random graph, n 3, p 1, s 5".to_owned()]);
    assert_eq!(instance.declared_edges, 3);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn output_is_deterministic(n in 0_usize..40, p in 0.0_f64..=1.0, seed in any::<i64>()) {
        prop_assert_eq!(render(n, p, seed), render(n, p, seed));
    }

    #[test]
    fn output_is_well_formed(n in 0_usize..40, p in 0.0_f64..=1.0, seed in any::<i64>()) {
        let instance = DimacsInstance::parse(&render(n, p, seed))
            .map_err(|err| TestCaseError::fail(err.to_string()))?;

        prop_assert_eq!(instance.vertex_count, n);
        prop_assert_eq!(instance.declared_edges, instance.edges.len());
        for &(u, w) in &instance.edges {
            prop_assert!(u >= 1 && w <= n, "edge ({}, {}) outside [1, {}]", u, w, n);
            prop_assert!(u < w, "edge ({}, {}) is not normalised", u, w);
        }
        // Strictly increasing order rules out duplicates as well.
        for pair in instance.edges.windows(2) {
            prop_assert!(pair[0] < pair[1], "edges out of order: {:?}", pair);
        }
    }
}
