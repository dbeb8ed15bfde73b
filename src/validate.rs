use crate::colouring::Colouring;
use crate::graph::Graph;
use std::fmt;

/**
 * Outcome of checking a colouring for proper-colouring violations.
 *
 * An improper colouring is a reported verdict, and not an error, as the
 * experiment harness uses it to assert the correctness of each engine.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid { a: usize, b: usize, colour: usize },
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Verdict::Valid => write!(f, "Valid colouring"),
            Verdict::Invalid { a, b, colour } => write!(
                f,
                "Adjacent vertices {} and {} both have colour {}",
                a, b, colour
            ),
        }
    }
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

/**
 * Checks that no two adjacent vertices share a colour, and reports the first
 * violating edge found. Uncoloured vertices are skipped, so partial colourings
 * may also be checked.
 */
pub fn validate_coloring(graph: &Graph, colouring: &Colouring) -> Verdict {
    for (a, b) in graph.edges() {
        if let (Some(ca), Some(cb)) = (colouring.get(a), colouring.get(b)) {
            if ca == cb {
                return Verdict::Invalid { a, b, colour: ca };
            }
        }
    }
    Verdict::Valid
}
