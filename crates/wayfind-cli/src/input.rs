//! Whitespace-token parsing of problem instances from text.
//!
//! Grid instances are `h w` followed by `h` row tokens. Graph instances
//! are `n m` followed by `m` triples `u v w` with 1-indexed endpoints.
//! Input with no header at all is treated as "no instance" rather than an
//! error.

use std::fmt;
use std::str::{FromStr, SplitAsciiWhitespace};

use wayfind_core::{Graph, GraphError, GridError, TileGrid};

/// Sequential reader over whitespace-separated tokens.
pub struct Scanner<'a> {
    tokens: SplitAsciiWhitespace<'a>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_ascii_whitespace(),
        }
    }

    /// The next raw token; `what` names it in the error.
    pub fn token(&mut self, what: &'static str) -> Result<&'a str, InputError> {
        self.tokens.next().ok_or(InputError::MissingToken { what })
    }

    /// The next token parsed as `T`.
    pub fn next<T: FromStr>(&mut self, what: &'static str) -> Result<T, InputError> {
        let token = self.token(what)?;
        token.parse().map_err(|_| InputError::InvalidToken {
            what,
            token: token.to_string(),
        })
    }

    /// Parse the next token as `T` if there is one.
    pub fn try_next<T: FromStr>(&mut self, what: &'static str) -> Result<Option<T>, InputError> {
        match self.tokens.clone().next() {
            None => Ok(None),
            Some(_) => self.next(what).map(Some),
        }
    }
}

/// Read a grid instance. `Ok(None)` when the input holds no header.
pub fn parse_grid(input: &str) -> Result<Option<TileGrid>, InputError> {
    let mut sc = Scanner::new(input);
    let Some(h) = sc.try_next::<usize>("grid height")? else {
        return Ok(None);
    };
    let w: usize = sc.next("grid width")?;

    let mut rows = Vec::new();
    for row in 0..h {
        let line = sc.token("grid row")?;
        let found = line.chars().count();
        if found != w {
            return Err(InputError::RowWidth {
                row,
                expected: w,
                found,
            });
        }
        rows.push(line);
    }
    log::trace!("read {h}x{w} grid");
    Ok(Some(TileGrid::parse(rows)?))
}

/// Read a graph instance, converting endpoints to 0-based indices.
/// `Ok(None)` when the input holds no header.
pub fn parse_graph(input: &str) -> Result<Option<Graph>, InputError> {
    let mut sc = Scanner::new(input);
    let Some(n) = sc.try_next::<usize>("vertex count")? else {
        return Ok(None);
    };
    let m: usize = sc.next("edge count")?;

    let mut graph = Graph::with_vertices(n)?;
    for edge in 0..m {
        let u = vertex(sc.next("edge endpoint")?, edge, n)?;
        let v = vertex(sc.next("edge endpoint")?, edge, n)?;
        let weight: i64 = sc.next("edge weight")?;
        let weight = u64::try_from(weight).map_err(|_| InputError::NegativeWeight { edge, weight })?;
        graph.add_edge(u, v, weight)?;
    }
    log::trace!("read graph with {n} vertices and {m} edges");
    Ok(Some(graph))
}

/// Convert a 1-indexed source vertex label to 0-based.
pub fn source_vertex(label: usize, n: usize) -> Result<usize, InputError> {
    if (1..=n).contains(&label) {
        Ok(label - 1)
    } else {
        Err(InputError::SourceLabel { label, n })
    }
}

/// Convert a 1-indexed vertex label from edge number `edge` to 0-based.
fn vertex(label: usize, edge: usize, n: usize) -> Result<usize, InputError> {
    if (1..=n).contains(&label) {
        Ok(label - 1)
    } else {
        Err(InputError::VertexLabel { edge, label, n })
    }
}

// ---------------------------------------------------------------------------
// InputError
// ---------------------------------------------------------------------------

/// Errors that can occur when reading an instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Input ended before `what` was read.
    MissingToken { what: &'static str },
    /// A token could not be parsed as `what`.
    InvalidToken { what: &'static str, token: String },
    /// A grid row's length disagrees with the declared width.
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A 1-indexed endpoint outside `1..=n`.
    VertexLabel { edge: usize, label: usize, n: usize },
    /// The requested source is outside `1..=n`.
    SourceLabel { label: usize, n: usize },
    NegativeWeight { edge: usize, weight: i64 },
    Grid(GridError),
    Graph(GraphError),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingToken { what } => write!(f, "unexpected end of input, expected {what}"),
            Self::InvalidToken { what, token } => {
                write!(f, "invalid {what}: \u{201c}{token}\u{201d}")
            }
            Self::RowWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid row {} has {found} cells, header declares {expected}",
                row + 1
            ),
            Self::VertexLabel { edge, label, n } => write!(
                f,
                "edge {} references vertex {label}, expected 1..={n}",
                edge + 1
            ),
            Self::SourceLabel { label, n } => {
                write!(f, "source vertex {label} is out of range, expected 1..={n}")
            }
            Self::NegativeWeight { edge, weight } => {
                write!(f, "edge {} has negative weight {weight}", edge + 1)
            }
            Self::Grid(e) => write!(f, "{e}"),
            Self::Graph(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Graph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for InputError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<GraphError> for InputError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfind_core::{Edge, Point};

    #[test]
    fn grid_instance() {
        let g = parse_grid("3 3\nS..\n###\n..G\n").unwrap().unwrap();
        assert_eq!(g.start(), Point::new(0, 0));
        assert_eq!(g.goal(), Point::new(2, 2));
        assert_eq!(g.height(), 3);
    }

    #[test]
    fn empty_input_is_no_instance() {
        assert_eq!(parse_grid(""), Ok(None));
        assert_eq!(parse_grid("  \n"), Ok(None));
        assert_eq!(parse_graph("\n"), Ok(None));
    }

    #[test]
    fn grid_rows_must_match_header() {
        assert_eq!(
            parse_grid("2 3\nS..\n.G\n"),
            Err(InputError::RowWidth {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            parse_grid("3 3\nS..\n..G\n"),
            Err(InputError::MissingToken { what: "grid row" })
        );
    }

    #[test]
    fn grid_validation_errors_pass_through() {
        assert_eq!(
            parse_grid("1 3\n...\n"),
            Err(InputError::Grid(GridError::MissingStart))
        );
    }

    #[test]
    fn bad_header() {
        assert_eq!(
            parse_grid("x 3"),
            Err(InputError::InvalidToken {
                what: "grid height",
                token: "x".to_string()
            })
        );
        assert_eq!(
            parse_graph("3"),
            Err(InputError::MissingToken { what: "edge count" })
        );
    }

    #[test]
    fn graph_instance_is_reindexed() {
        let g = parse_graph("3 3\n1 2 5\n2 3 5\n1 3 1\n").unwrap().unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(
            g.neighbors(0),
            &[Edge { to: 1, weight: 5 }, Edge { to: 2, weight: 1 }]
        );
    }

    #[test]
    fn graph_vertex_labels_are_checked() {
        assert_eq!(
            parse_graph("2 1\n0 1 3"),
            Err(InputError::VertexLabel {
                edge: 0,
                label: 0,
                n: 2
            })
        );
        assert_eq!(
            parse_graph("2 2\n1 2 3\n2 3 1"),
            Err(InputError::VertexLabel {
                edge: 1,
                label: 3,
                n: 2
            })
        );
    }

    #[test]
    fn source_labels_are_one_based() {
        assert_eq!(source_vertex(1, 3), Ok(0));
        assert_eq!(source_vertex(3, 3), Ok(2));
        assert_eq!(
            source_vertex(4, 3),
            Err(InputError::SourceLabel { label: 4, n: 3 })
        );
        assert!(source_vertex(1, 0).is_err());
    }

    #[test]
    fn negative_weight_is_rejected() {
        assert_eq!(
            parse_graph("2 1\n1 2 -4"),
            Err(InputError::NegativeWeight { edge: 0, weight: -4 })
        );
        let msg = parse_graph("2 1\n1 2 -4").unwrap_err().to_string();
        assert_eq!(msg, "edge 1 has negative weight -4");
    }

    #[test]
    fn oversized_headers_fail_cleanly() {
        assert_eq!(
            parse_grid("18446744073709551615 1\nS\n"),
            Err(InputError::MissingToken { what: "grid row" })
        );
        assert_eq!(
            parse_grid("2 18446744073709551615\nS\nG\n"),
            Err(InputError::RowWidth {
                row: 0,
                expected: usize::MAX,
                found: 1
            })
        );
        assert_eq!(
            parse_graph("18446744073709551615 1\n1 2 3\n"),
            Err(InputError::Graph(GraphError::TooManyVertices { n: usize::MAX }))
        );
        assert_eq!(
            parse_graph("2 18446744073709551615\n1 2 3\n"),
            Err(InputError::MissingToken {
                what: "edge endpoint"
            })
        );
    }

    #[test]
    fn truncated_edge_list() {
        assert_eq!(
            parse_graph("3 2\n1 2 5\n2 3"),
            Err(InputError::MissingToken {
                what: "edge weight"
            })
        );
    }
}
