use crate::error::{Error, Result};
use crate::graph::Graph;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

/**
 *  Writes 'graph' in the ASCII EDGES format, where each undirected edge
 *  '{u, v}' is stored as the two directed lines "u v" and "v u".
 */
pub fn write_edges<W: Write>(graph: &Graph, writer: W) -> Result<()> {
    let mut out = BufWriter::new(writer);
    for (u, v) in graph.edges() {
        writeln!(out, "{} {}", u, v)?;
        writeln!(out, "{} {}", v, u)?;
    }
    out.flush()?;
    Ok(())
}

pub fn save_edges<P: AsRef<Path>>(graph: &Graph, path: P) -> Result<()> {
    let path = path.as_ref();
    debug!("Saving {} edges to: {}", graph.num_edges(), path.display());
    write_edges(graph, File::create(path)?)
}

/**
 *  Reads a graph in the EDGES format. The vertex-count is the largest label
 *  found, which may not exceed 'MAX_VERTICES'.
 *
 *  Note: lines without exactly two fields (e.g., blank lines) are skipped,
 *    but a field that is not an integer is an error.
 */
pub fn read_edges<R: Read>(reader: R) -> Result<Graph> {
    let mut edges: Vec<(i64, i64)> = Vec::new();
    let mut max_vertex: i64 = 0;

    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 2 {
            continue;
        }
        let parse = |s: &str| {
            s.parse::<i64>().map_err(|e| Error::Parse {
                line: i + 1,
                message: format!("'{}': {}", s, e),
            })
        };
        let (u, v) = (parse(fields[0])?, parse(fields[1])?);
        max_vertex = max_vertex.max(u).max(v);
        edges.push((u, v));
    }

    let mut graph = Graph::try_from(max_vertex)?;
    for (u, v) in edges {
        let (u, v) = (to_vertex(u)?, to_vertex(v)?);
        graph.add_edge(u, v)?;
    }
    Ok(graph)
}

pub fn load_edges<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let path = path.as_ref();
    debug!("Loading edges from: {}", path.display());
    read_edges(File::open(path)?)
}

fn to_vertex(label: i64) -> Result<usize> {
    usize::try_from(label)
        .map_err(|_| Error::InvalidArgument(format!("Vertex out of range: {}", label)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::MAX_VERTICES;

    #[test]
    fn write_emits_both_directions() {
        let mut g = Graph::new(3);
        g.add_edge(1, 2).unwrap();
        g.add_edge(3, 2).unwrap();

        let mut buf: Vec<u8> = Vec::new();
        write_edges(&g, &mut buf).unwrap();
        assert_eq!("1 2\n2 1\n2 3\n3 2\n", String::from_utf8(buf).unwrap());
    }

    #[test]
    fn read_back_written_graph() {
        let mut g = Graph::new(6);
        for (u, v) in [(1, 4), (2, 5), (3, 6), (1, 5), (6, 2)] {
            g.add_edge(u, v).unwrap();
        }
        let mut buf: Vec<u8> = Vec::new();
        write_edges(&g, &mut buf).unwrap();

        let h = read_edges(buf.as_slice()).unwrap();
        assert_eq!(g, h);
    }

    #[test]
    fn skips_malformed_lines() {
        let text = "1 2\n\n# comment line\n2 3\n3 2 9\n";
        let g = read_edges(text.as_bytes()).unwrap();
        assert_eq!(3, g.num_vertices());
        assert_eq!(2, g.num_edges());
    }

    #[test]
    fn rejects_non_integers_and_bad_labels() {
        match read_edges("1 2\nx 3\n".as_bytes()) {
            Err(Error::Parse { line, .. }) => assert_eq!(2, line),
            other => panic!("expected parse error, got {:?}", other),
        }
        assert!(matches!(
            read_edges("0 2\n".as_bytes()),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_huge_labels() {
        assert!(matches!(
            read_edges("1 9223372036854775807\n".as_bytes()),
            Err(Error::InvalidArgument(_))
        ));
        let beyond = format!("1 2\n2 {}\n", MAX_VERTICES + 1);
        assert!(matches!(
            read_edges(beyond.as_bytes()),
            Err(Error::InvalidArgument(_))
        ));
        // Too large for an i64 at all
        assert!(matches!(
            read_edges("1 99999999999999999999\n".as_bytes()),
            Err(Error::Parse { line: 1, .. })
        ));
    }
}
