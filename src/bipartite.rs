use crate::graph::Graph;
use log::trace;
use std::collections::{HashMap, HashSet, VecDeque};

/**
 * Two-sided partition of the connected component containing a newly revealed
 * vertex, restricted to the subgraph induced by the revealed vertices plus
 * that new vertex.
 *
 * The new vertex is always on the A-side (side 0). The partition is rebuilt
 * for every step, so nothing carries over from earlier reveals.
 */
#[derive(Debug, Clone, Default)]
pub struct Bipartition {
    root: usize,
    component: HashSet<usize>,
    side: HashMap<usize, u8>,
    a_nodes: Vec<usize>,
    b_nodes: Vec<usize>,
    /* First same-side edge found within the component, if any */
    conflict: Option<(usize, usize)>,
}

impl Bipartition {
    /**
     *  Builds the partition for 'root', where 'allowed' returns true for every
     *  vertex that the traversal may visit.
     *
     *  Algorithm:
     *   1) breadth-first search from 'root' over allowed vertices, collecting
     *      its component;
     *   2) breadth-first search again from 'root' (side 0), giving each newly
     *      discovered component vertex the side opposite its discoverer; and
     *   3) record any component edge whose ends share a side, as this is the
     *      witness for an odd cycle.
     */
    pub fn build<F>(graph: &Graph, root: usize, allowed: F) -> Self
    where
        F: Fn(usize) -> bool,
    {
        let component = Self::component(graph, root, &allowed);

        let mut this = Self {
            root,
            component,
            ..Default::default()
        };
        this.add_a_node(root);

        let mut queue: VecDeque<usize> = VecDeque::from([root]);
        while let Some(x) = queue.pop_front() {
            let sx = this.side[&x];
            for &u in graph.neighbours(x) {
                if !this.component.contains(&u) {
                    continue;
                }
                match this.side.get(&u).copied() {
                    None => {
                        if sx == 0 {
                            this.add_b_node(u);
                        } else {
                            this.add_a_node(u);
                        }
                        queue.push_back(u);
                    }
                    Some(su) if su == sx => {
                        if this.conflict.is_none() {
                            trace!("same-side edge: {} -- {} (side {})", x, u, sx);
                            this.conflict = Some((x, u));
                        }
                    }
                    Some(_) => {}
                }
            }
        }

        this
    }

    fn component<F>(graph: &Graph, root: usize, allowed: &F) -> HashSet<usize>
    where
        F: Fn(usize) -> bool,
    {
        let mut component: HashSet<usize> = HashSet::from([root]);
        let mut queue: VecDeque<usize> = VecDeque::from([root]);

        while let Some(x) = queue.pop_front() {
            for &u in graph.neighbours(x) {
                if allowed(u) && component.insert(u) {
                    queue.push_back(u);
                }
            }
        }
        component
    }

    // -- PRIVATE MODIFIER FUNCTIONS -- //

    fn add_a_node(&mut self, node: usize) {
        debug_assert!(!self.side.contains_key(&node));
        self.side.insert(node, 0);
        self.a_nodes.push(node);
    }

    fn add_b_node(&mut self, node: usize) {
        debug_assert!(!self.side.contains_key(&node));
        self.side.insert(node, 1);
        self.b_nodes.push(node);
    }

    // -- PUBLIC QUERY FUNCTIONS -- //

    pub fn root(&self) -> usize {
        self.root
    }

    pub fn component_size(&self) -> usize {
        self.component.len()
    }

    pub fn contains_a_node(&self, node: usize) -> bool {
        self.side.get(&node) == Some(&0)
    }

    pub fn contains_b_node(&self, node: usize) -> bool {
        self.side.get(&node) == Some(&1)
    }

    /// Same side as the root.
    pub fn a_nodes(&self) -> &[usize] {
        &self.a_nodes
    }

    /// Opposite side to the root.
    pub fn b_nodes(&self) -> &[usize] {
        &self.b_nodes
    }

    pub fn is_bipartite(&self) -> bool {
        self.conflict.is_none()
    }

    pub fn conflict(&self) -> Option<(usize, usize)> {
        self.conflict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(n: usize) -> Graph {
        let mut g = Graph::new(n);
        for v in 1..=n {
            g.add_edge(v, v % n + 1).unwrap();
        }
        g
    }

    #[test]
    fn even_cycle_splits_evenly() {
        let g = cycle(6);
        let bip = Bipartition::build(&g, 1, |_| true);
        assert!(bip.is_bipartite());
        assert_eq!(6, bip.component_size());

        let mut a = bip.a_nodes().to_vec();
        let mut b = bip.b_nodes().to_vec();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(vec![1, 3, 5], a);
        assert_eq!(vec![2, 4, 6], b);
        assert!(bip.contains_a_node(1));
        assert!(bip.contains_b_node(2));
    }

    #[test]
    fn odd_cycle_is_detected() {
        let g = cycle(5);
        let bip = Bipartition::build(&g, 2, |_| true);
        assert!(!bip.is_bipartite());
        assert!(bip.conflict().is_some());
    }

    #[test]
    fn traversal_stays_within_allowed() {
        // Odd cycle, but with vertex 4 hidden the remainder is a path
        let g = cycle(5);
        let bip = Bipartition::build(&g, 1, |v| v != 4);
        assert!(bip.is_bipartite());
        assert_eq!(4, bip.component_size());
        assert!(!bip.contains_a_node(4) && !bip.contains_b_node(4));
    }

    #[test]
    fn isolated_root() {
        let g = Graph::new(3);
        let bip = Bipartition::build(&g, 2, |_| true);
        assert_eq!(&[2], bip.a_nodes());
        assert!(bip.b_nodes().is_empty());
        assert_eq!(2, bip.root());
    }
}
