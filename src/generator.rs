use crate::error::{Error, Result};
use crate::graph::Graph;
use log::debug;
use rand::seq::IteratorRandom;
use rand::Rng;
use std::collections::BTreeSet;

pub type Partition = Vec<BTreeSet<usize>>;

/**
 *  Generates a random k-colourable graph on 'n' vertices, together with the
 *  partition into 'k' independent sets that witnesses its colourability.
 *
 *  Algorithm:
 *   1) vertices '1..=k' each seed their own partition, and every remaining
 *      vertex joins a uniformly random partition;
 *   2) each vertex gets an edge to a uniformly chosen member of every other
 *      partition; and
 *   3) each remaining cross-partition pair '(v, u)' is joined with probability
 *      'p'.
 *
 *  Note: in step 3) each unordered pair is tried once from either end, so
 *    the effective edge-probability is slightly higher than 'p'.
 */
pub fn generate_k_colourable<R: Rng + ?Sized>(
    n: usize,
    k: usize,
    p: f64,
    rng: &mut R,
) -> Result<(Graph, Partition)> {
    if k > n {
        return Err(Error::InvalidArgument(format!(
            "k ({}) cannot be greater than n ({})",
            k, n
        )));
    }
    if k < 1 {
        return Err(Error::InvalidArgument("k must be at least 1".to_string()));
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidArgument(format!(
            "p must be in [0.0, 1.0], got {}",
            p
        )));
    }

    let mut graph = Graph::new(n);
    let mut parts: Partition = vec![BTreeSet::new(); k];

    for v in 1..=n {
        let idx = if v <= k { v - 1 } else { rng.gen_range(0..k) };
        parts[idx].insert(v);
    }

    // Mandatory edges, so that every vertex meets every other partition
    for i in 0..k {
        for &v in parts[i].iter() {
            for (j, other) in parts.iter().enumerate() {
                if i == j {
                    continue;
                }
                if let Some(&u) = other.iter().choose(rng) {
                    graph.add_edge(u, v)?;
                }
            }
        }
    }

    // Additional random edges
    for i in 0..k {
        for j in 0..k {
            if i == j {
                continue;
            }
            for &v in parts[i].iter() {
                for &u in parts[j].iter() {
                    if graph.has_edge(u, v) {
                        continue;
                    }
                    if rng.gen::<f64>() < p {
                        graph.add_edge(u, v)?;
                    }
                }
            }
        }
    }

    debug!(
        "generated graph: n = {}, k = {}, p = {}, edges = {}",
        n,
        k,
        p,
        graph.num_edges()
    );
    Ok((graph, parts))
}

/**
 *  Checks that 'partition' is a partition of the vertices of 'graph' into
 *  independent sets, and returns a description of the first problem found.
 */
pub fn verify_partition(
    graph: &Graph,
    partition: &[BTreeSet<usize>],
) -> std::result::Result<(), String> {
    let covered: BTreeSet<usize> = partition.iter().flatten().copied().collect();
    let expected: BTreeSet<usize> = graph.vertices().collect();
    if covered != expected {
        return Err("Partition doesn't cover all vertices exactly".to_string());
    }

    for i in 0..partition.len() {
        for j in i + 1..partition.len() {
            let overlap: Vec<&usize> = partition[i].intersection(&partition[j]).collect();
            if !overlap.is_empty() {
                return Err(format!("Partitions {} and {} overlap: {:?}", i, j, overlap));
            }
        }
    }

    for (i, part) in partition.iter().enumerate() {
        for &u in part.iter() {
            if let Some(&v) = graph.neighbours(u).iter().find(|v| part.contains(v)) {
                return Err(format!("Edge within partition {}: ({}, {})", i, u, v));
            }
        }
    }

    Ok(())
}
