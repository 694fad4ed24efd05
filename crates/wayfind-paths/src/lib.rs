//! Single-source shortest-path solvers.
//!
//! Two searches share the same shape: seed a frontier with the source,
//! expand it in order of increasing cost, and record the first final cost
//! of every vertex.
//!
//! - **BFS** over a 4-connected grid with unit step cost ([`bfs_map`],
//!   [`shortest_steps`])
//! - **Dijkstra** over an undirected graph with non-negative integer
//!   weights ([`dijkstra`])
//!
//! Each call owns its working arrays and queue and releases them on return;
//! results are plain values with unreachability expressed as `None`.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for | Implemented by |
//! |---|---|---|
//! | [`Pather`] | BFS | [`TileGrid`](wayfind_core::TileGrid) |
//! | [`WeightedPather`] | Dijkstra | [`Graph`](wayfind_core::Graph) |

mod bfs;
mod dijkstra;
mod distance;
mod error;
mod traits;

pub use bfs::{DistanceMap, bfs_map, shortest_steps};
pub use dijkstra::{Distances, dijkstra};
pub use distance::manhattan;
pub use error::PathError;
pub use traits::{Pather, WeightedPather};
