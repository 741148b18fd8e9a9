//! Kruskal minimum spanning tree over the undirected edge set.

use rustc_hash::FxHashMap;

use dls_core::VertexId;

use crate::network::NetworkGraph;

// ── UnionFind ─────────────────────────────────────────────────────────────────

/// Disjoint-set forest with path compression and union by rank.
///
/// Elements are dense indices `0..n`; callers map their own IDs onto them.
pub struct UnionFind {
    parent: Vec<usize>,
    rank:   Vec<u8>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
            rank:   vec![0; n],
        }
    }

    /// Representative of `x`'s set, compressing the walked path.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Second pass: point everything on the path at the root.
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merge the sets of `a` and `b`.  Returns `false` if they were
    /// already in the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        if self.rank[ra] < self.rank[rb] {
            self.parent[ra] = rb;
        } else {
            self.parent[rb] = ra;
            if self.rank[ra] == self.rank[rb] {
                self.rank[ra] += 1;
            }
        }
        true
    }

    /// `true` if `a` and `b` are currently in the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

// ── Kruskal ───────────────────────────────────────────────────────────────────

impl NetworkGraph {
    /// Minimum spanning tree via Kruskal: edges considered in ascending
    /// weight order, accepted when they join two different components.
    ///
    /// Returns the accepted `(u, v, weight)` triples in acceptance order —
    /// n−1 of them for a connected n-vertex graph.  The sort is stable, so
    /// equal-weight ties resolve in the `(u, v)` order of the graph's edge
    /// enumeration, making the result deterministic.
    pub fn mst_kruskal(&self) -> Vec<(VertexId, VertexId, u32)> {
        let ids = self.vertex_ids();
        let pos: FxHashMap<VertexId, usize> =
            ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();

        // `edges()` already yields each undirected edge once with src < dst.
        let mut edges = self.edges();
        edges.sort_by_key(|&(_, _, w)| w);

        let mut uf = UnionFind::new(ids.len());
        let mut mst = Vec::with_capacity(ids.len().saturating_sub(1));
        for (u, v, w) in edges {
            if uf.union(pos[&u], pos[&v]) {
                mst.push((u, v, w));
            }
        }
        mst
    }
}
