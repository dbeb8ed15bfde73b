use crate::degeneracy::smallest_last_order;
use crate::error::Error;
use crate::graph::Graph;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/**
 * How the vertices are presented to the FirstFit engine.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Uniformly random permutation.
    Random,
    /// Non-increasing full-graph degree.
    Degree,
    /// Reversed degeneracy removal order.
    SmallestLast,
}

impl Strategy {
    pub const ALL: [Strategy; 3] =
        [Strategy::Random, Strategy::Degree, Strategy::SmallestLast];

    /**
     *  Name used within the experiment result tables.
     */
    pub fn algorithm_name(&self) -> &'static str {
        match self {
            Strategy::Random => "FirstFit",
            Strategy::Degree => "FirstFit+Degree",
            Strategy::SmallestLast => "FirstFit+SmallestLast",
        }
    }

    /**
     *  Produces the presentation order for 'graph'. Only the random strategy
     *  draws from 'rng'.
     */
    pub fn order<R: Rng + ?Sized>(&self, graph: &Graph, rng: &mut R) -> Vec<usize> {
        match self {
            Strategy::Random => random_order(graph, rng),
            Strategy::Degree => degree_order(graph),
            Strategy::SmallestLast => smallest_last_order(graph),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Strategy::Random => "random",
            Strategy::Degree => "degree",
            Strategy::SmallestLast => "smallest-last",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(Strategy::Random),
            "degree" => Ok(Strategy::Degree),
            "smallest-last" | "smallest_last" => Ok(Strategy::SmallestLast),
            _ => Err(Error::InvalidArgument(format!(
                "Unknown ordering strategy: '{}'",
                s
            ))),
        }
    }
}

// -- PRESENTATION ORDERS -- //

pub fn random_order<R: Rng + ?Sized>(graph: &Graph, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = graph.vertices().collect();
    order.shuffle(rng);
    order
}

/**
 *  All vertices by non-increasing degree. The sort is stable over the
 *  ascending vertex labels, so ties go to the smaller label.
 */
pub fn degree_order(graph: &Graph) -> Vec<usize> {
    let mut order: Vec<usize> = graph.vertices().collect();
    order.sort_by_key(|&v| std::cmp::Reverse(graph.degree(v)));
    order
}
