use crate::graph::Graph;
use log::trace;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/**
 * Result of repeatedly removing a minimum-degree vertex from a shrinking view
 * of the graph.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Degeneracy {
    /// Vertices in the order that they were removed.
    pub removal_order: Vec<usize>,
    /// Largest current-degree of any vertex at the moment of its removal.
    pub degeneracy: usize,
}

/**
 *  Computes the degeneracy (removal) ordering of the graph.
 *
 *  Algorithm:
 *   1) push '(degree, vertex)' for every vertex onto a min-heap;
 *   2) pop the minimum, skipping entries for vertices already removed;
 *   3) mark the vertex removed, and append it to the removal order;
 *   4) decrement the current-degree of each remaining neighbour, and push it
 *      again with the updated key; and
 *   5) until every vertex has been removed, GOTO 2).
 *
 *  Note: entries are never updated in place, so the heap holds stale keys for
 *    vertices whose degree has since decreased. These are discarded when they
 *    are popped. Ties pop the smallest vertex label first.
 */
pub fn degeneracy_ordering(graph: &Graph) -> Degeneracy {
    let n = graph.num_vertices();
    let mut degrees: Vec<usize> = vec![0; n + 1];
    let mut removed: Vec<bool> = vec![false; n + 1];
    let mut removal_order: Vec<usize> = Vec::with_capacity(n);
    let mut degeneracy = 0;

    let mut heap: BinaryHeap<Reverse<(usize, usize)>> = graph
        .vertices()
        .map(|v| {
            degrees[v] = graph.degree(v);
            Reverse((degrees[v], v))
        })
        .collect();

    while let Some(Reverse((degree, v))) = heap.pop() {
        if removed[v] {
            continue;
        }
        removed[v] = true;
        removal_order.push(v);
        degeneracy = degeneracy.max(degree);

        for &u in graph.neighbours(v) {
            if !removed[u] {
                degrees[u] -= 1;
                heap.push(Reverse((degrees[u], u)));
            }
        }
    }

    trace!("degeneracy: {} (n = {})", degeneracy, n);
    Degeneracy {
        removal_order,
        degeneracy,
    }
}

/**
 *  Smallest-last presentation order, which is the degeneracy removal order
 *  reversed, so that the last-removed vertex is presented first.
 */
pub fn smallest_last_order(graph: &Graph) -> Vec<usize> {
    let mut order = degeneracy_ordering(graph).removal_order;
    order.reverse();
    order
}
