use std::fmt;

use wayfind_core::GraphError;

/// Errors reported by the weighted solver before any search work is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The requested source is not a vertex of the graph.
    SourceOutOfRange { source: usize, n: usize },
    /// The graph cannot provide a representable cost bound.
    Graph(GraphError),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceOutOfRange { source, n } => {
                write!(f, "source vertex {source} is out of range for {n} vertices")
            }
            Self::Graph(e) => write!(f, "invalid graph: {e}"),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Graph(e) => Some(e),
            Self::SourceOutOfRange { .. } => None,
        }
    }
}

impl From<GraphError> for PathError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}
