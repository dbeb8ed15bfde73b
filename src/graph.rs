use crate::error::{Error, Result};
use std::collections::BTreeSet;
use std::fmt;

/// Largest vertex-count accepted from signed (external) input, such as an
/// EDGES file.
pub const MAX_VERTICES: usize = 1 << 24;

/**
 * Simple, undirected graph over the vertex labels '1..=n'.
 *
 * The adjacency sets are stored symmetrically, so that 'u' is a neighbour of
 * 'v' if and only if 'v' is a neighbour of 'u'. Self-loops are never stored,
 * and set semantics suppress duplicate edges.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    num_vertices: usize,
    /* Index 0 is unused, so that vertex labels index directly */
    adjacency: Vec<BTreeSet<usize>>,
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Graph {{")?;
        writeln!(f, "    num_vertices: {}", self.num_vertices)?;
        writeln!(f, "    num_edges: {}", self.num_edges())?;
        writeln!(f, "    adjacency {{")?;
        for v in self.vertices() {
            let ns: Vec<&usize> = self.adjacency[v].iter().collect();
            writeln!(f, "        {:4}: {:?}", v, ns)?;
        }
        writeln!(f, "    }}")?;
        writeln!(f, "}}")
    }
}

impl TryFrom<i64> for Graph {
    type Error = Error;

    /**
     *  Builds an edgeless graph from a signed vertex-count, rejecting negative
     *  counts and counts above 'MAX_VERTICES'.
     */
    fn try_from(num_vertices: i64) -> Result<Self> {
        if num_vertices < 0 {
            return Err(Error::InvalidArgument(format!(
                "Number of vertices must be non-negative, got {}",
                num_vertices
            )));
        }
        match usize::try_from(num_vertices) {
            Ok(n) if n <= MAX_VERTICES => Ok(Graph::new(n)),
            _ => Err(Error::InvalidArgument(format!(
                "Number of vertices too large, got {} (max {})",
                num_vertices, MAX_VERTICES
            ))),
        }
    }
}

impl Graph {
    pub fn new(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            adjacency: vec![BTreeSet::new(); num_vertices + 1],
        }
    }

    // -- PUBLIC MODIFIER FUNCTIONS -- //

    /**
     *  Inserts the undirected edge '{u, v}'. Self-loops are silently ignored,
     *  and inserting an existing edge has no effect.
     */
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        if u == v {
            return Ok(());
        }
        if !self.contains_vertex(u) || !self.contains_vertex(v) {
            return Err(Error::InvalidArgument(format!(
                "Vertices out of range: ({}, {}) with n={}",
                u, v, self.num_vertices
            )));
        }
        self.adjacency[u].insert(v);
        self.adjacency[v].insert(u);
        Ok(())
    }

    // -- PUBLIC QUERY FUNCTIONS -- //

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn num_edges(&self) -> usize {
        self.adjacency.iter().map(|ns| ns.len()).sum::<usize>() >> 1
    }

    #[inline]
    pub fn contains_vertex(&self, v: usize) -> bool {
        v >= 1 && v <= self.num_vertices
    }

    /**
     *  All vertex labels, in ascending order, including isolated vertices.
     */
    pub fn vertices(&self) -> impl Iterator<Item = usize> {
        1..=self.num_vertices
    }

    /**
     *  Neighbour set of 'v'.
     *
     *  Note: panics if 'v' is not a vertex of the graph, in the same way that
     *    slice-indexing does.
     */
    pub fn neighbours(&self, v: usize) -> &BTreeSet<usize> {
        assert!(
            self.contains_vertex(v),
            "Out of bounds! (vertex: {}, n: {})",
            v,
            self.num_vertices
        );
        &self.adjacency[v]
    }

    pub fn degree(&self, v: usize) -> usize {
        self.neighbours(v).len()
    }

    pub fn max_degree(&self) -> usize {
        self.vertices().map(|v| self.degree(v)).max().unwrap_or(0)
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.contains_vertex(u) && self.adjacency[u].contains(&v)
    }

    /**
     *  Each undirected edge exactly once, as '(u, v)' with 'u < v', ordered
     *  lexicographically.
     */
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.vertices().flat_map(move |u| {
            self.adjacency[u]
                .range(u + 1..)
                .map(move |&v| (u, v))
        })
    }
}
