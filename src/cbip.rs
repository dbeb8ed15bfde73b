use crate::bipartite::Bipartition;
use crate::colouring::{smallest_free_colour, Colouring};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::order::random_order;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/**
 *  CBIP online colouring of a (presumed) bipartite graph, presented in a
 *  random order drawn from a generator seeded by 'seed', or from entropy if
 *  no seed is given.
 */
pub fn cbip(graph: &Graph, seed: Option<u64>) -> Result<Colouring> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    cbip_with_rng(graph, &mut rng)
}

pub fn cbip_with_rng<R: Rng + ?Sized>(graph: &Graph, rng: &mut R) -> Result<Colouring> {
    cbip_ordered(graph, &random_order(graph, rng))
}

/**
 *  CBIP online colouring, over the given presentation order.
 *
 *  For each newly revealed vertex 'v':
 *   1) find the component of 'v' within the subgraph induced by the revealed
 *      vertices plus 'v';
 *   2) bipartition the component, with 'v' on the A-side;
 *   3) fail if the component contains a same-side edge, as the graph then has
 *      an odd cycle; and
 *   4) colour 'v' with the smallest colour not used on the B-side.
 *
 *  The run aborts on the first odd cycle, and no partial colouring is
 *  returned. Only the induced subgraph on revealed vertices is consulted, so
 *  the odd cycle is reported by the step that reveals its last vertex.
 */
pub fn cbip_ordered(graph: &Graph, order: &[usize]) -> Result<Colouring> {
    debug_assert_eq!(graph.num_vertices(), order.len());
    let mut colouring = Colouring::new(graph.num_vertices());
    let mut revealed: Vec<bool> = vec![false; graph.num_vertices() + 1];

    for (step, &v) in order.iter().enumerate() {
        if step == 0 {
            colouring.set(v, 1);
            revealed[v] = true;
            continue;
        }

        let bip = Bipartition::build(graph, v, |u| u == v || revealed[u]);
        if let Some((x, y)) = bip.conflict() {
            debug!(
                "CBIP: odd cycle revealed by vertex {} (edge {} -- {}, step {})",
                v, x, y, step
            );
            return Err(Error::NotBipartite { vertex: v });
        }

        let used: Vec<usize> = bip
            .b_nodes()
            .iter()
            .filter_map(|&u| colouring.get(u))
            .collect();
        colouring.set(v, smallest_free_colour(&used));
        revealed[v] = true;
    }

    debug!(
        "CBIP used {} colours (n = {})",
        colouring.max_colour(),
        graph.num_vertices()
    );
    Ok(colouring)
}
