use wayfind_core::{Edge, Graph, GraphError, Point, Tile, TileGrid};

/// Unit-cost search interface — provides neighbour enumeration on a grid.
pub trait Pather {
    /// Append the cells reachable in one step from `p` into `buf`. The
    /// caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Weighted search interface over vertices `0..vertex_count()`.
///
/// Arc weights are non-negative by construction (`u64`).
pub trait WeightedPather {
    fn vertex_count(&self) -> usize;

    /// Append the arcs leaving `u` into `buf`. The caller clears `buf`
    /// before calling.
    fn arcs(&self, u: usize, buf: &mut Vec<Edge>);

    /// A cost strictly larger than any shortest-path distance, used as the
    /// "not reached yet" marker.
    fn infinity(&self) -> Result<u64, GraphError>;
}

/// Orthogonal moves between non-wall tiles.
impl Pather for TileGrid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(
            p.neighbors_4()
                .into_iter()
                .filter(|&n| self.at(n).is_some_and(Tile::is_passable)),
        );
    }
}

impl WeightedPather for Graph {
    #[inline]
    fn vertex_count(&self) -> usize {
        Graph::vertex_count(self)
    }

    #[inline]
    fn arcs(&self, u: usize, buf: &mut Vec<Edge>) {
        buf.extend_from_slice(self.neighbors(u));
    }

    #[inline]
    fn infinity(&self) -> Result<u64, GraphError> {
        Graph::infinity(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_neighbors_skip_walls_and_edges() {
        let g = TileGrid::parse(["S#", ".G"]).unwrap();
        let mut buf = Vec::new();
        g.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(0, 1)]);

        buf.clear();
        g.neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(buf, vec![Point::new(0, 1)]);
    }

    #[test]
    fn graph_arcs_append() {
        let g = Graph::from_edges(3, [(0, 1, 4), (0, 2, 1)]).unwrap();
        let mut buf = vec![Edge { to: 9, weight: 9 }];
        g.arcs(0, &mut buf);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf[1], Edge { to: 1, weight: 4 });
        assert_eq!(WeightedPather::vertex_count(&g), 3);
        assert_eq!(WeightedPather::infinity(&g), Ok(13));
    }
}
