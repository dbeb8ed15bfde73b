use crate::colouring::{smallest_free_colour, Colouring};
use crate::degeneracy::smallest_last_order;
use crate::graph::Graph;
use crate::order::{degree_order, random_order, Strategy};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/**
 *  Greedy online colouring, over the given presentation order.
 *
 *  Each vertex is revealed in turn, and is assigned the smallest positive
 *  colour not already used by any of its previously revealed neighbours.
 *
 *  Note: 'order' must be a permutation of the vertices of 'graph'.
 */
pub fn first_fit(graph: &Graph, order: &[usize]) -> Colouring {
    debug_assert_eq!(graph.num_vertices(), order.len());
    let mut colouring = Colouring::new(graph.num_vertices());

    for &v in order {
        // Only the revealed neighbours have been coloured so far
        let used: Vec<usize> = graph
            .neighbours(v)
            .iter()
            .filter_map(|&u| colouring.get(u))
            .collect();
        colouring.set(v, smallest_free_colour(&used));
    }

    debug!(
        "FirstFit used {} colours (n = {})",
        colouring.max_colour(),
        graph.num_vertices()
    );
    colouring
}

pub fn first_fit_random<R: Rng + ?Sized>(graph: &Graph, rng: &mut R) -> Colouring {
    first_fit(graph, &random_order(graph, rng))
}

/**
 *  FirstFit over a random order, drawn from a generator seeded by 'seed', or
 *  from entropy if no seed is given.
 */
pub fn first_fit_seeded(graph: &Graph, seed: Option<u64>) -> Colouring {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    first_fit_random(graph, &mut rng)
}

pub fn first_fit_degree(graph: &Graph) -> Colouring {
    first_fit(graph, &degree_order(graph))
}

pub fn first_fit_smallest_last(graph: &Graph) -> Colouring {
    first_fit(graph, &smallest_last_order(graph))
}

/**
 *  Runs the FirstFit variant selected by 'strategy'.
 */
pub fn first_fit_with<R: Rng + ?Sized>(
    graph: &Graph,
    strategy: Strategy,
    rng: &mut R,
) -> Colouring {
    first_fit(graph, &strategy.order(graph, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_coloring;

    #[test]
    fn fixed_order_is_deterministic() {
        // Path 1-2-3-4, presented with the two ends first
        let mut g = Graph::new(4);
        for (u, v) in [(1, 2), (2, 3), (3, 4)] {
            g.add_edge(u, v).unwrap();
        }
        let c = first_fit(&g, &[1, 4, 2, 3]);
        assert_eq!(Some(1), c.get(1));
        assert_eq!(Some(1), c.get(4));
        assert_eq!(Some(2), c.get(2));
        assert_eq!(Some(3), c.get(3));
        assert!(validate_coloring(&g, &c).is_valid());
    }

    #[test]
    fn isolated_vertices_get_colour_one() {
        let g = Graph::new(5);
        let c = first_fit_degree(&g);
        assert!(c.is_total());
        assert_eq!(1, c.max_colour());
    }

    #[test]
    fn seeded_runs_match() {
        let mut g = Graph::new(30);
        for v in 1..30 {
            g.add_edge(v, v + 1).unwrap();
            if v + 7 <= 30 {
                g.add_edge(v, v + 7).unwrap();
            }
        }
        assert_eq!(first_fit_seeded(&g, Some(5)), first_fit_seeded(&g, Some(5)));
    }
}
