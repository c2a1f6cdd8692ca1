//! Undirected graph model for vertex cover instances.
//!
//! A [`Graph`] is frozen at construction: a vertex count plus an edge list,
//! shared read-only by fitness evaluation for the duration of a run.
//! Duplicate edges are tolerated (they simply weigh an edge twice in the
//! uncovered count); self-loops are not supported and their effect on
//! scoring is unspecified.
//!
//! Three construction paths:
//!
//! - [`Graph::new`]: explicit 0-based edge list
//! - [`Graph::parse_pace`]: PACE-style edge-list stream (1-based input)
//! - [`Graph::grid`]: procedural grid topology

use std::io::BufRead;

use crate::error::Error;

/// An immutable undirected graph.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<(usize, usize)>,
}

impl Graph {
    /// Builds a graph from a 0-based edge list.
    ///
    /// # Errors
    /// Returns [`Error::EdgeOutOfRange`] if any endpoint is `>= vertex_count`.
    pub fn new(vertex_count: usize, edges: Vec<(usize, usize)>) -> Result<Self, Error> {
        for &(u, v) in &edges {
            if u >= vertex_count || v >= vertex_count {
                return Err(Error::EdgeOutOfRange { u, v, vertex_count });
            }
        }
        Ok(Self {
            vertex_count,
            edges,
        })
    }

    /// Parses a PACE-style edge-list stream.
    ///
    /// - Lines starting with `c` are comments and skipped.
    /// - One line starting with `p` is the problem header; its last two
    ///   tokens are the vertex and edge counts.
    /// - Every other non-empty line is a whitespace-separated pair of
    ///   1-based vertex indices, converted to 0-based here.
    ///
    /// # Errors
    /// Any malformed input is fatal: a missing or duplicate header, edges
    /// before the header, unparseable tokens, endpoints outside `1..=n`,
    /// or a final edge count that disagrees with the header. No partial
    /// graph is ever returned.
    pub fn parse_pace<R: BufRead>(input: R) -> Result<Self, Error> {
        let mut header: Option<(usize, usize)> = None;
        let mut edges: Vec<(usize, usize)> = Vec::new();
        let mut line_no = 0;

        for line in input.lines() {
            let line = line?;
            line_no += 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('c') {
                continue;
            }
            if trimmed.starts_with('p') {
                if header.is_some() {
                    return Err(malformed(line_no, "duplicate problem header"));
                }
                let tokens: Vec<&str> = trimmed.split_whitespace().collect();
                if tokens.len() < 3 {
                    return Err(malformed(line_no, "header needs vertex and edge counts"));
                }
                let n = parse_count(tokens[tokens.len() - 2], line_no)?;
                let m = parse_count(tokens[tokens.len() - 1], line_no)?;
                header = Some((n, m));
                continue;
            }

            let Some((n, _)) = header else {
                return Err(malformed(line_no, "edge listed before problem header"));
            };
            let tokens: Vec<&str> = trimmed.split_whitespace().collect();
            if tokens.len() != 2 {
                return Err(malformed(line_no, "expected exactly two vertex indices"));
            }
            let u = parse_endpoint(tokens[0], n, line_no)?;
            let v = parse_endpoint(tokens[1], n, line_no)?;
            edges.push((u, v));
        }

        let Some((n, m)) = header else {
            return Err(malformed(line_no, "missing problem header"));
        };
        if edges.len() != m {
            return Err(malformed(
                line_no,
                format!("header declares {m} edges, found {}", edges.len()),
            ));
        }
        Ok(Self {
            vertex_count: n,
            edges,
        })
    }

    /// Builds a `rows x cols` grid graph.
    ///
    /// Vertices are numbered row-major (`r * cols + c`); each vertex is
    /// connected to its right and lower neighbor where those exist.
    pub fn grid(rows: usize, cols: usize) -> Self {
        let at = |r: usize, c: usize| r * cols + c;
        let mut edges = Vec::new();
        for r in 0..rows {
            for c in 0..cols {
                if c + 1 < cols {
                    edges.push((at(r, c), at(r, c + 1)));
                }
                if r + 1 < rows {
                    edges.push((at(r, c), at(r + 1, c)));
                }
            }
        }
        Self {
            vertex_count: rows * cols,
            edges,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// The edge list, 0-based endpoint pairs.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Number of edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

fn malformed(line: usize, reason: impl Into<String>) -> Error {
    Error::MalformedGraph {
        line,
        reason: reason.into(),
    }
}

fn parse_count(token: &str, line: usize) -> Result<usize, Error> {
    token
        .parse::<usize>()
        .map_err(|_| malformed(line, format!("unparseable count `{token}`")))
}

fn parse_endpoint(token: &str, vertex_count: usize, line: usize) -> Result<usize, Error> {
    let idx = token
        .parse::<usize>()
        .map_err(|_| malformed(line, format!("unparseable vertex index `{token}`")))?;
    if idx == 0 || idx > vertex_count {
        return Err(malformed(
            line,
            format!("vertex index {idx} outside 1..={vertex_count}"),
        ));
    }
    Ok(idx - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_in_range_edges() {
        let graph = Graph::new(3, vec![(0, 1), (1, 2), (0, 2)]).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_new_rejects_out_of_range_endpoint() {
        let err = Graph::new(3, vec![(0, 3)]).unwrap_err();
        assert!(matches!(
            err,
            Error::EdgeOutOfRange {
                u: 0,
                v: 3,
                vertex_count: 3
            }
        ));
    }

    #[test]
    fn test_new_tolerates_duplicate_edges() {
        let graph = Graph::new(2, vec![(0, 1), (0, 1), (1, 0)]).unwrap();
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_parse_pace_basic() {
        let input = "c path on four vertices\np td 4 3\n1 2\n2 3\n3 4\n";
        let graph = Graph::parse_pace(input.as_bytes()).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edges(), &[(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_parse_pace_skips_comments_and_blank_lines() {
        let input = "c first\n\nc second\np td 2 1\nc between\n1 2\n";
        let graph = Graph::parse_pace(input.as_bytes()).unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edges(), &[(0, 1)]);
    }

    #[test]
    fn test_parse_pace_missing_header() {
        let err = Graph::parse_pace("1 2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedGraph { line: 1, .. }));
    }

    #[test]
    fn test_parse_pace_empty_input() {
        let err = Graph::parse_pace("".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedGraph { .. }));
    }

    #[test]
    fn test_parse_pace_duplicate_header() {
        let err = Graph::parse_pace("p td 2 1\np td 2 1\n1 2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedGraph { line: 2, .. }));
    }

    #[test]
    fn test_parse_pace_bad_token() {
        let err = Graph::parse_pace("p td 3 1\n1 x\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedGraph { line: 2, .. }));
    }

    #[test]
    fn test_parse_pace_endpoint_out_of_range() {
        let err = Graph::parse_pace("p td 3 1\n1 4\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedGraph { line: 2, .. }));

        // 0 is invalid in the 1-based input format.
        let err = Graph::parse_pace("p td 3 1\n0 2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedGraph { line: 2, .. }));
    }

    #[test]
    fn test_parse_pace_edge_count_mismatch() {
        let err = Graph::parse_pace("p td 3 2\n1 2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedGraph { .. }));
    }

    #[test]
    fn test_grid_5x3_matches_known_instance() {
        let graph = Graph::grid(5, 3);
        assert_eq!(graph.vertex_count(), 15);
        assert_eq!(graph.edge_count(), 22);

        let mut actual: Vec<(usize, usize)> = graph.edges().to_vec();
        actual.sort_unstable();
        let mut expected = vec![
            // horizontal
            (0, 1),
            (1, 2),
            (3, 4),
            (4, 5),
            (6, 7),
            (7, 8),
            (9, 10),
            (10, 11),
            (12, 13),
            (13, 14),
            // vertical
            (0, 3),
            (3, 6),
            (6, 9),
            (9, 12),
            (1, 4),
            (4, 7),
            (7, 10),
            (10, 13),
            (2, 5),
            (5, 8),
            (8, 11),
            (11, 14),
        ];
        expected.sort_unstable();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_grid_degenerate_shapes() {
        assert_eq!(Graph::grid(1, 1).edge_count(), 0);
        assert_eq!(Graph::grid(0, 4).edge_count(), 0);
        // A 1xN grid is a path.
        let path = Graph::grid(1, 4);
        assert_eq!(path.edges(), &[(0, 1), (1, 2), (2, 3)]);
    }
}
