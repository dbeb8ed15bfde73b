//! Integration tests for the colouring engines.

use online_colouring::{
    cbip, cbip_ordered, cbip_with_rng, degeneracy_ordering, first_fit, first_fit_degree,
    first_fit_random, first_fit_seeded, first_fit_smallest_last, generate_k_colourable,
    random_order, smallest_last_order, validate_coloring, Colouring, Error, Graph,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ─── Fixtures ─────────────────────────────────────────────────

fn graph_from(n: usize, edges: &[(usize, usize)]) -> Graph {
    let mut g = Graph::new(n);
    for &(u, v) in edges {
        g.add_edge(u, v).unwrap();
    }
    g
}

fn triangle() -> Graph {
    graph_from(3, &[(1, 2), (2, 3), (3, 1)])
}

fn k33() -> Graph {
    let mut g = Graph::new(6);
    for u in 1..=3 {
        for v in 4..=6 {
            g.add_edge(u, v).unwrap();
        }
    }
    g
}

fn path5() -> Graph {
    graph_from(5, &[(1, 2), (2, 3), (3, 4), (4, 5)])
}

fn all_first_fit(g: &Graph, seed: u64) -> Vec<Colouring> {
    vec![
        first_fit_seeded(g, Some(seed)),
        first_fit_degree(g),
        first_fit_smallest_last(g),
    ]
}

fn assert_proper(g: &Graph, c: &Colouring) {
    assert!(c.is_total());
    let verdict = validate_coloring(g, c);
    assert!(verdict.is_valid(), "{}", verdict);
}

// ─── Scenarios ────────────────────────────────────────────────

#[test]
fn triangle_needs_three_colours() {
    let g = triangle();
    for seed in 0..10 {
        for c in all_first_fit(&g, seed) {
            assert_proper(&g, &c);
            assert_eq!(3, c.max_colour());
        }
    }
}

#[test]
fn triangle_is_not_bipartite() {
    let g = triangle();
    for seed in 0..10 {
        match cbip(&g, Some(seed)) {
            Err(Error::NotBipartite { vertex }) => assert!((1..=3).contains(&vertex)),
            other => panic!("expected NotBipartite, got {:?}", other),
        }
    }
}

#[test]
fn complete_bipartite_k33() {
    let g = k33();
    assert_eq!(9, g.num_edges());

    for seed in 0..20 {
        let c = cbip(&g, Some(seed)).unwrap();
        assert_proper(&g, &c);
        assert_eq!(2, c.max_colour());

        for c in all_first_fit(&g, seed) {
            assert_proper(&g, &c);
            assert!(c.max_colour() <= 4);
        }
    }
}

#[test]
fn path_of_five() {
    // The path is 2-colourable, but FirstFit may need a third colour for some
    // presentation orders.
    let g = path5();
    for seed in 0..20 {
        for c in all_first_fit(&g, seed) {
            assert_proper(&g, &c);
            assert!(c.max_colour() <= 3);
        }
    }
}

// ─── Properties ───────────────────────────────────────────────

#[test]
fn engines_produce_proper_colourings() {
    let mut rng = StdRng::seed_from_u64(2024);
    for &(n, k) in &[(30, 2), (40, 3), (50, 4), (60, 5)] {
        let (g, _) = generate_k_colourable(n, k, 0.4, &mut rng).unwrap();
        assert_proper(&g, &first_fit_random(&g, &mut rng));
        assert_proper(&g, &first_fit_degree(&g));
        assert_proper(&g, &first_fit_smallest_last(&g));
    }
}

#[test]
fn cbip_colours_random_bipartite_graphs() {
    let mut rng = StdRng::seed_from_u64(7);
    for &n in &[10, 50, 100] {
        for &p in &[0.05, 0.3] {
            let (g, _) = generate_k_colourable(n, 2, p, &mut rng).unwrap();
            let c = cbip_with_rng(&g, &mut rng).unwrap();
            assert_proper(&g, &c);

            // CBIP needs at most 2 (floor(log2 n) + 1) colours on bipartite graphs
            let bound = 2 * (usize::BITS - n.leading_zeros()) as usize;
            assert!(c.max_colour() >= 2);
            assert!(c.max_colour() <= bound, "{} > {}", c.max_colour(), bound);
        }
    }
}

#[test]
fn cbip_rejects_odd_cycles_in_every_order() {
    let mut rng = StdRng::seed_from_u64(99);
    // Two even cycles joined, plus one odd cycle 7-8-9
    let g = graph_from(
        9,
        &[(1, 2), (2, 3), (3, 4), (4, 1), (4, 5), (5, 6), (6, 7), (7, 8), (8, 9), (9, 7)],
    );
    for _ in 0..50 {
        let order = random_order(&g, &mut rng);
        match cbip_ordered(&g, &order) {
            Err(Error::NotBipartite { vertex }) => {
                // The failing step is the last of 7, 8 and 9 to be revealed.
                let last = order
                    .iter()
                    .rposition(|v| [7, 8, 9].contains(v))
                    .map(|i| order[i]);
                assert_eq!(Some(vertex), last);
            }
            other => panic!("expected NotBipartite, got {:?}", other),
        }
    }
}

#[test]
fn smallest_last_within_degeneracy_bound() {
    let mut rng = StdRng::seed_from_u64(5);
    for &(n, k, p) in &[(40, 3, 0.2), (80, 4, 0.5), (25, 2, 0.9)] {
        let (g, _) = generate_k_colourable(n, k, p, &mut rng).unwrap();
        let d = degeneracy_ordering(&g);

        let mut perm = d.removal_order.clone();
        perm.sort_unstable();
        assert_eq!(g.vertices().collect::<Vec<_>>(), perm);

        let c = first_fit(&g, &smallest_last_order(&g));
        assert_proper(&g, &c);
        assert!(c.max_colour() <= d.degeneracy + 1);
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let (g, _) = generate_k_colourable(60, 2, 0.2, &mut StdRng::seed_from_u64(1)).unwrap();

    assert_eq!(
        random_order(&g, &mut StdRng::seed_from_u64(17)),
        random_order(&g, &mut StdRng::seed_from_u64(17))
    );
    assert_eq!(first_fit_seeded(&g, Some(17)), first_fit_seeded(&g, Some(17)));
    assert_eq!(cbip(&g, Some(17)).unwrap(), cbip(&g, Some(17)).unwrap());
}
