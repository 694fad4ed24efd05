//! **wayfind-core** — problem-instance types for the *wayfind* solvers.
//!
//! This crate provides geometry primitives, the validated [`TileGrid`]
//! consumed by grid reachability search, and the weighted [`Graph`]
//! consumed by Dijkstra search. Both are immutable once built and fail fast
//! on malformed input.

pub mod geom;
pub mod graph;
pub mod grid;
pub mod tile;

pub use geom::{Point, Range, RangeIter};
pub use graph::{Edge, EdgeList, Graph, GraphError};
pub use grid::{GridError, TileGrid};
pub use tile::Tile;
