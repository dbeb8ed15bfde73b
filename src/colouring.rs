use std::collections::HashSet;
use std::fmt;

/**
 * Vertex to (positive) colour mapping, built up by a single online pass.
 *
 * A colouring is partial while an algorithm is running, and is total once the
 * algorithm has processed every vertex of its presentation order.
 */
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Colouring {
    /* Index 0 is unused, so that vertex labels index directly */
    colours: Vec<Option<usize>>,
}

impl fmt::Display for Colouring {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Colouring {{")?;
        writeln!(f, "    num_colours: {}", self.max_colour())?;
        writeln!(f, "    num_coloured: {}", self.num_coloured())?;
        write!(f, "    colours: [ ")?;
        for (v, c) in self.iter() {
            write!(f, "{}:{} ", v, c)?;
        }
        writeln!(f, "]")?;
        writeln!(f, "}}")
    }
}

impl Colouring {
    /**
     *  An empty (all uncoloured) colouring for the vertices '1..=n'.
     */
    pub fn new(num_vertices: usize) -> Self {
        Self {
            colours: vec![None; num_vertices + 1],
        }
    }

    pub fn from_pairs<I>(num_vertices: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut colouring = Self::new(num_vertices);
        for (v, c) in pairs {
            colouring.set(v, c);
        }
        colouring
    }

    // -- PUBLIC QUERY FUNCTIONS -- //

    pub fn len(&self) -> usize {
        self.colours.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn get(&self, v: usize) -> Option<usize> {
        self.colours.get(v).copied().flatten()
    }

    pub fn is_coloured(&self, v: usize) -> bool {
        self.get(v).is_some()
    }

    /**
     *  The largest colour used, which is the number of colours for any
     *  FirstFit-style colouring. Returns zero when nothing is coloured.
     */
    pub fn max_colour(&self) -> usize {
        self.colours.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn num_coloured(&self) -> usize {
        self.colours.iter().flatten().count()
    }

    pub fn is_total(&self) -> bool {
        self.num_coloured() == self.len()
    }

    /**
     *  The coloured vertices, and their colours, by ascending vertex.
     */
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.colours
            .iter()
            .enumerate()
            .filter_map(|(v, c)| c.map(|c| (v, c)))
    }

    // -- PUBLIC MODIFIER FUNCTIONS -- //

    /**
     *  Assigns colour 'c' to vertex 'v'.
     *
     *  Note: panics if 'v' is outside of the colouring's vertex-range, or if
     *    'c' is zero, as colours are positive.
     */
    pub fn set(&mut self, v: usize, c: usize) {
        assert!(c > 0, "colours are positive (vertex: {})", v);
        assert!(
            v >= 1 && v < self.colours.len(),
            "Out of bounds! (vertex: {}, n: {})",
            v,
            self.len()
        );
        self.colours[v] = Some(c);
    }
}

/**
 * Smallest positive integer not present within 'used'.
 */
pub fn smallest_free_colour<'a, I>(used: I) -> usize
where
    I: IntoIterator<Item = &'a usize>,
{
    let used: HashSet<usize> = used.into_iter().copied().collect();
    let mut c = 1;
    while used.contains(&c) {
        c += 1;
    }
    c
}
