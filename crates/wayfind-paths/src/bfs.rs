use std::collections::VecDeque;

use wayfind_core::{Point, Range, TileGrid};

use crate::traits::Pather;

/// Marker for cells the search never reached.
const UNVISITED: u32 = u32::MAX;

/// Step counts from a single source over a grid rectangle.
///
/// Produced by [`bfs_map`]. Each cell holds the minimum number of unit
/// moves from the source, or nothing if the cell was never reached.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DistanceMap {
    range: Range,
    source: Point,
    steps: Vec<u32>,
    reached: usize,
}

impl DistanceMap {
    /// Steps from the source to `p`, or `None` if `p` is unreachable or
    /// outside the range.
    #[inline]
    pub fn at(&self, p: Point) -> Option<u32> {
        let i = self.range.index_of(p)?;
        match self.steps[i] {
            UNVISITED => None,
            d => Some(d),
        }
    }

    /// The rectangle the map covers.
    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    #[inline]
    pub fn source(&self) -> Point {
        self.source
    }

    /// Number of cells reached, source included.
    #[inline]
    pub fn reached(&self) -> usize {
        self.reached
    }

    /// Row-major iterator over reached cells and their step counts.
    pub fn iter(&self) -> impl Iterator<Item = (Point, u32)> + '_ {
        self.range
            .iter()
            .zip(self.steps.iter().copied())
            .filter(|&(_, d)| d != UNVISITED)
    }
}

/// Compute a single-source breadth-first distance map over `range`.
///
/// Every move costs 1. Cells are dequeued in non-decreasing distance
/// order, so the first visit to a cell is along a shortest path and no
/// entry is ever overwritten. Neighbours outside `range` are ignored. A
/// source outside `range` yields a map where nothing is reached.
pub fn bfs_map<P: Pather>(pather: &P, range: Range, source: Point) -> DistanceMap {
    let mut steps = vec![UNVISITED; range.len()];
    let mut reached = 0;

    let Some(si) = range.index_of(source) else {
        log::debug!("bfs: source {source} outside {range}");
        return DistanceMap {
            range,
            source,
            steps,
            reached,
        };
    };

    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut nbuf: Vec<Point> = Vec::with_capacity(4);
    steps[si] = 0;
    reached += 1;
    queue.push_back(si);

    while let Some(ci) = queue.pop_front() {
        let current = steps[ci];
        nbuf.clear();
        pather.neighbors(range.point_at(ci), &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = range.index_of(np) else {
                continue;
            };
            if steps[ni] != UNVISITED {
                continue;
            }
            steps[ni] = current + 1;
            reached += 1;
            queue.push_back(ni);
        }
    }

    log::debug!("bfs: reached {reached} of {} cells from {source}", range.len());
    DistanceMap {
        range,
        source,
        steps,
        reached,
    }
}

/// Minimum number of orthogonal moves from the grid's start to its goal,
/// avoiding walls. `None` when the goal cannot be reached.
pub fn shortest_steps(grid: &TileGrid) -> Option<u32> {
    bfs_map(grid, grid.bounds(), grid.start()).at(grid.goal())
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn distance_map_serializes_steps() {
        let g = TileGrid::parse(["S#G", "..."]).unwrap();
        let m = bfs_map(&g, g.bounds(), g.start());
        let json: serde_json::Value = serde_json::to_value(&m).unwrap();
        assert_eq!(json["source"], serde_json::json!({"x": 0, "y": 0}));
        assert_eq!(json["reached"], 5);
        assert_eq!(json["steps"][2], 4);
    }
}
