//! Single-source (Dijkstra) and all-pairs (Floyd–Warshall) shortest paths.
//!
//! Both operate on edge weight alone and ignore battery semantics; they
//! serve the analytics side of the simulation (distance tables, path
//! reconstruction for dashboards).  Weights are generated in [1, 10], so
//! the non-negativity Dijkstra requires always holds.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use rustc_hash::FxHashMap;

use dls_core::VertexId;

use crate::battery::Route;
use crate::error::{GraphError, GraphResult};
use crate::network::NetworkGraph;

/// Unreachable marker inside the dense all-pairs matrix.
const INF: u32 = u32::MAX;

// ── Dijkstra ──────────────────────────────────────────────────────────────────

/// Distances and predecessors from one origin to every reachable vertex.
///
/// Vertices absent from `dist` are unreachable.  The origin has distance 0
/// and no predecessor entry.
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    pub origin: VertexId,
    pub dist:   BTreeMap<VertexId, u32>,
    pub prev:   BTreeMap<VertexId, VertexId>,
}

impl ShortestPaths {
    /// Shortest distance to `v`, or `None` if unreachable.
    pub fn distance_to(&self, v: VertexId) -> Option<u32> {
        self.dist.get(&v).copied()
    }

    /// Reconstruct the shortest path to `v` by walking predecessors,
    /// or `None` if `v` is unreachable.
    pub fn path_to(&self, v: VertexId) -> Option<Route> {
        let cost = self.distance_to(v)?;
        let mut path = vec![v];
        let mut cur = v;
        while cur != self.origin {
            // Every reachable non-origin vertex has a predecessor.
            cur = *self.prev.get(&cur)?;
            path.push(cur);
        }
        path.reverse();
        Some(Route { path, cost })
    }
}

impl NetworkGraph {
    /// Classic priority-queue Dijkstra from `origin` to all vertices.
    ///
    /// Ties in distance fall to heap pop order; no explicit tie-break
    /// policy is promised.
    pub fn dijkstra(&self, origin: VertexId) -> GraphResult<ShortestPaths> {
        if !self.contains(origin) {
            return Err(GraphError::UnknownVertex(origin));
        }

        let mut dist: BTreeMap<VertexId, u32> = BTreeMap::new();
        let mut prev: BTreeMap<VertexId, VertexId> = BTreeMap::new();
        dist.insert(origin, 0);

        // Reverse makes the std max-heap behave as a min-heap.
        let mut heap: BinaryHeap<Reverse<(u32, VertexId)>> = BinaryHeap::new();
        heap.push(Reverse((0, origin)));

        while let Some(Reverse((cost, node))) = heap.pop() {
            // Skip stale heap entries.
            if dist.get(&node).is_some_and(|&d| cost > d) {
                continue;
            }
            for &(neighbor, w) in self.neighbors(node) {
                let alt = cost + w;
                if dist.get(&neighbor).is_none_or(|&d| alt < d) {
                    dist.insert(neighbor, alt);
                    prev.insert(neighbor, node);
                    heap.push(Reverse((alt, neighbor)));
                }
            }
        }

        Ok(ShortestPaths { origin, dist, prev })
    }
}

// ── Floyd–Warshall ────────────────────────────────────────────────────────────

/// Dense all-pairs tables over a sorted-ID position index.
///
/// Vertex IDs need not be contiguous, so matrix positions are assigned by
/// sorted ID; `pos` maps back from ID to position.
#[derive(Debug)]
pub(crate) struct AllPairs {
    ids:  Vec<VertexId>,
    pos:  FxHashMap<VertexId, usize>,
    dist: Vec<Vec<u32>>,
    /// `next[i][j]` = position of the first hop on the shortest i→j path.
    next: Vec<Vec<Option<usize>>>,
}

impl NetworkGraph {
    /// Compute all-pairs shortest distances and next-hop tables in O(V³),
    /// caching them on the graph.  Must run before [`floyd_path`]
    /// (re-run after any mutation — mutations drop the cache).
    ///
    /// [`floyd_path`]: NetworkGraph::floyd_path
    pub fn floyd_warshall(&mut self) {
        let ids = self.vertex_ids();
        let n = ids.len();
        let pos: FxHashMap<VertexId, usize> =
            ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();

        let mut dist = vec![vec![INF; n]; n];
        let mut next: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];

        for i in 0..n {
            dist[i][i] = 0;
            next[i][i] = Some(i);
        }
        for (u, v, w) in self.edges() {
            let (i, j) = (pos[&u], pos[&v]);
            dist[i][j] = w;
            dist[j][i] = w;
            next[i][j] = Some(j);
            next[j][i] = Some(i);
        }

        // Relax through every intermediate vertex, updating distance and
        // next-hop together so `next` always reflects the current best.
        for k in 0..n {
            for i in 0..n {
                if dist[i][k] == INF {
                    continue;
                }
                for j in 0..n {
                    let via = dist[i][k].saturating_add(dist[k][j]);
                    if via < dist[i][j] {
                        dist[i][j] = via;
                        next[i][j] = next[i][k];
                    }
                }
            }
        }

        self.all_pairs = Some(AllPairs { ids, pos, dist, next });
    }

    /// Walk the cached next-hop chain from `origin` to `destination`.
    ///
    /// `Ok(None)` when `destination` is unreachable; fails with
    /// [`GraphError::NotComputed`] if [`floyd_warshall`] has not run on the
    /// current graph snapshot, and [`GraphError::UnknownVertex`] for
    /// endpoints the graph has never seen.
    ///
    /// [`floyd_warshall`]: NetworkGraph::floyd_warshall
    pub fn floyd_path(&self, origin: VertexId, destination: VertexId) -> GraphResult<Option<Route>> {
        let ap = self.all_pairs.as_ref().ok_or(GraphError::NotComputed)?;
        let &o = ap.pos.get(&origin).ok_or(GraphError::UnknownVertex(origin))?;
        let &d = ap.pos.get(&destination).ok_or(GraphError::UnknownVertex(destination))?;

        if ap.next[o][d].is_none() {
            return Ok(None);
        }

        let mut path = vec![ap.ids[o]];
        let mut cur = o;
        while cur != d {
            match ap.next[cur][d] {
                Some(step) => {
                    cur = step;
                    path.push(ap.ids[cur]);
                }
                // Only the first hop can be absent; mid-chain gaps cannot
                // occur by construction.
                None => return Ok(None),
            }
        }

        Ok(Some(Route { path, cost: ap.dist[o][d] }))
    }
}
