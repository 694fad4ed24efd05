use std::collections::BinaryHeap;

use wayfind_core::Edge;

use crate::error::PathError;
use crate::traits::WeightedPather;

/// A frontier entry. Several entries may exist for the same vertex; all but
/// the cheapest become stale and are skipped when popped.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
struct HeapEntry {
    cost: u64,
    vertex: usize,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest cost first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest-path costs from one source to every vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distances {
    source: usize,
    dist: Vec<Option<u64>>,
}

impl Distances {
    /// Cost from the source to `v`, or `None` if `v` is unreachable or not
    /// a vertex.
    #[inline]
    pub fn get(&self, v: usize) -> Option<u64> {
        self.dist.get(v).copied().flatten()
    }

    #[inline]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// Number of vertices with a finite distance, source included.
    pub fn reachable_count(&self) -> usize {
        self.dist.iter().flatten().count()
    }

    /// Per-vertex costs in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = Option<u64>> + '_ {
        self.dist.iter().copied()
    }

    pub fn into_vec(self) -> Vec<Option<u64>> {
        self.dist
    }
}

/// Compute single-source shortest-path costs with a binary-heap frontier.
///
/// The heap is never searched or decreased in place: an improved cost is
/// pushed as a new entry, and an entry whose cost exceeds the vertex's
/// recorded distance is discarded when popped. The first non-stale pop of a
/// vertex finalizes it, which is sound because arc weights are
/// non-negative.
///
/// Fails if `source` is not a vertex, or if the pather's cost bound cannot
/// be represented.
pub fn dijkstra<W: WeightedPather>(pather: &W, source: usize) -> Result<Distances, PathError> {
    let n = pather.vertex_count();
    if source >= n {
        return Err(PathError::SourceOutOfRange { source, n });
    }
    let inf = pather.infinity()?;

    let mut dist = vec![inf; n];
    let mut open: BinaryHeap<HeapEntry> = BinaryHeap::new();
    let mut abuf: Vec<Edge> = Vec::new();
    let (mut pops, mut stale, mut relaxed) = (0usize, 0usize, 0usize);

    dist[source] = 0;
    open.push(HeapEntry {
        cost: 0,
        vertex: source,
    });

    while let Some(HeapEntry { cost, vertex: u }) = open.pop() {
        pops += 1;
        if cost > dist[u] {
            stale += 1;
            continue;
        }

        abuf.clear();
        pather.arcs(u, &mut abuf);

        for &Edge { to: v, weight } in abuf.iter() {
            let tentative = cost + weight;
            if tentative < dist[v] {
                dist[v] = tentative;
                relaxed += 1;
                open.push(HeapEntry {
                    cost: tentative,
                    vertex: v,
                });
            }
        }
    }

    log::debug!("dijkstra: {n} vertices from {source}: {pops} pops, {stale} stale, {relaxed} relaxations");

    Ok(Distances {
        source,
        dist: dist
            .into_iter()
            .map(|d| if d == inf { None } else { Some(d) })
            .collect(),
    })
}
