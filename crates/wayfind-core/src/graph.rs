//! The [`Graph`] type — an undirected multigraph with non-negative integer
//! edge weights, stored as per-vertex adjacency lists.

use std::fmt;

/// One direction of an undirected edge, as seen from its tail vertex.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub to: usize,
    pub weight: u64,
}

/// An undirected graph over vertices `0..n`.
///
/// Every call to [`add_edge`](Graph::add_edge) stores the edge in both
/// endpoints' lists. Parallel edges and self-loops are kept as given.
///
/// With the `serde` feature a graph is (de)serialized as an [`EdgeList`],
/// and deserialization goes through [`Graph::from_edges`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "EdgeList", into = "EdgeList"))]
pub struct Graph {
    adj: Vec<Vec<Edge>>,
    edges: Vec<(usize, usize, u64)>,
    max_weight: u64,
}

/// A graph as its vertex count and `(u, v, weight)` triples, 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeList {
    pub n: usize,
    pub edges: Vec<(usize, usize, u64)>,
}

impl Graph {
    /// Create a graph with `n` isolated vertices.
    ///
    /// Panics if the adjacency table cannot be allocated; use
    /// [`with_vertices`](Self::with_vertices) when `n` is untrusted.
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
            edges: Vec::new(),
            max_weight: 0,
        }
    }

    /// Create a graph with `n` isolated vertices, reporting
    /// [`GraphError::TooManyVertices`] instead of aborting when the
    /// adjacency table cannot be allocated.
    pub fn with_vertices(n: usize) -> Result<Self, GraphError> {
        let mut adj = Vec::new();
        adj.try_reserve_exact(n)
            .map_err(|_| GraphError::TooManyVertices { n })?;
        adj.resize_with(n, Vec::new);
        Ok(Self {
            adj,
            edges: Vec::new(),
            max_weight: 0,
        })
    }

    /// Build a graph from `(u, v, weight)` triples with 0-based endpoints.
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize, u64)>,
    {
        let mut g = Self::with_vertices(n)?;
        for (u, v, w) in edges {
            g.add_edge(u, v, w)?;
        }
        Ok(g)
    }

    /// Add an undirected edge between `u` and `v`.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: u64) -> Result<(), GraphError> {
        let n = self.adj.len();
        for vertex in [u, v] {
            if vertex >= n {
                return Err(GraphError::VertexOutOfRange { vertex, n });
            }
        }
        self.adj[u].push(Edge { to: v, weight });
        self.adj[v].push(Edge { to: u, weight });
        self.edges.push((u, v, weight));
        self.max_weight = self.max_weight.max(weight);
        Ok(())
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of undirected edges added so far.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Heaviest edge weight, `0` for an edgeless graph.
    #[inline]
    pub fn max_weight(&self) -> u64 {
        self.max_weight
    }

    /// Edges leaving `u`. Empty for an out-of-range vertex.
    #[inline]
    pub fn neighbors(&self, u: usize) -> &[Edge] {
        self.adj.get(u).map(Vec::as_slice).unwrap_or(&[])
    }

    /// A distance strictly larger than any simple path in this graph:
    /// `n × max_weight + 1`.
    ///
    /// A simple path has at most `n - 1` edges, so any tentative distance
    /// built as `dist(u) + w` stays below this bound.
    pub fn infinity(&self) -> Result<u64, GraphError> {
        (self.adj.len() as u64)
            .checked_mul(self.max_weight)
            .and_then(|x| x.checked_add(1))
            .ok_or(GraphError::WeightOverflow {
                n: self.adj.len(),
                max_weight: self.max_weight,
            })
    }
}

impl TryFrom<EdgeList> for Graph {
    type Error = GraphError;

    fn try_from(list: EdgeList) -> Result<Self, Self::Error> {
        Self::from_edges(list.n, list.edges)
    }
}

impl From<Graph> for EdgeList {
    fn from(g: Graph) -> Self {
        Self {
            n: g.adj.len(),
            edges: g.edges,
        }
    }
}

// ---------------------------------------------------------------------------
// GraphError
// ---------------------------------------------------------------------------

/// Errors that can occur when building a [`Graph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint is not a vertex of the graph.
    VertexOutOfRange { vertex: usize, n: usize },
    /// The adjacency table for `n` vertices cannot be allocated.
    TooManyVertices { n: usize },
    /// `n × max_weight + 1` does not fit in a `u64`.
    WeightOverflow { n: usize, max_weight: u64 },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexOutOfRange { vertex, n } => {
                write!(f, "vertex {vertex} is out of range for a graph of {n} vertices")
            }
            Self::TooManyVertices { n } => write!(f, "cannot allocate a graph of {n} vertices"),
            Self::WeightOverflow { n, max_weight } => write!(
                f,
                "path costs overflow: {n} vertices with edge weights up to {max_weight}"
            ),
        }
    }
}

impl std::error::Error for GraphError {}
