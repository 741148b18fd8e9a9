//! `NetworkGraph` — undirected weighted graph over role-tagged vertices.
//!
//! # Representation
//!
//! Adjacency lists keyed by `VertexId` in a `BTreeMap`, so vertex and edge
//! enumeration come out in ascending ID order — the read accessors feed
//! dashboards and reports that need stable ordering.  Every undirected edge
//! is stored in both endpoint lists; the two directions are always written
//! together, and `debug_assert_symmetric` verifies the mirror invariant in
//! debug builds.
//!
//! Vertices are immutable after creation (ID and role only).  Traversal
//! scratch state lives in the algorithms, never on the graph.

use std::collections::BTreeMap;

use dls_core::{NodeRole, VertexId};

use crate::error::{GraphError, GraphResult};
use crate::shortest::AllPairs;

/// Per-role vertex counts, in the order used for statistics rendering.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoleCounts {
    pub storage:  usize,
    pub recharge: usize,
    pub client:   usize,
}

/// Undirected weighted delivery network.
#[derive(Debug)]
pub struct NetworkGraph {
    vertices: BTreeMap<VertexId, NodeRole>,
    adj:      BTreeMap<VertexId, Vec<(VertexId, u32)>>,
    /// Cached Floyd–Warshall tables; invalidated by any mutation.
    pub(crate) all_pairs: Option<AllPairs>,
}

impl NetworkGraph {
    /// An empty graph with no vertices or edges.
    pub fn new() -> Self {
        NetworkGraph {
            vertices:  BTreeMap::new(),
            adj:       BTreeMap::new(),
            all_pairs: None,
        }
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Add a vertex.  Fails with [`GraphError::DuplicateVertex`] if the ID
    /// is already present.
    pub fn add_vertex(&mut self, id: VertexId, role: NodeRole) -> GraphResult<()> {
        if self.vertices.contains_key(&id) {
            return Err(GraphError::DuplicateVertex(id));
        }
        self.vertices.insert(id, role);
        self.adj.insert(id, Vec::new());
        self.all_pairs = None;
        Ok(())
    }

    /// Add an undirected edge, writing both adjacency directions together.
    ///
    /// Fails with [`GraphError::UnknownVertex`] if either endpoint is
    /// absent, [`GraphError::SelfLoop`] if `src == dst`, and
    /// [`GraphError::DuplicateEdge`] if the pair is already connected.
    pub fn add_edge(&mut self, src: VertexId, dst: VertexId, weight: u32) -> GraphResult<()> {
        if src == dst {
            return Err(GraphError::SelfLoop(src));
        }
        if !self.vertices.contains_key(&src) {
            return Err(GraphError::UnknownVertex(src));
        }
        if !self.vertices.contains_key(&dst) {
            return Err(GraphError::UnknownVertex(dst));
        }
        if self.has_edge(src, dst) {
            return Err(GraphError::DuplicateEdge(src, dst));
        }

        // Both directions or neither — the mirror invariant.
        self.adj.entry(src).or_default().push((dst, weight));
        self.adj.entry(dst).or_default().push((src, weight));
        self.all_pairs = None;

        self.debug_assert_symmetric();
        Ok(())
    }

    // ── Read accessors ────────────────────────────────────────────────────

    /// Neighbors of `id` as `(neighbor, weight)` pairs, in insertion order.
    /// Empty for unknown vertices.
    pub fn neighbors(&self, id: VertexId) -> &[(VertexId, u32)] {
        self.adj.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Role of `id`, or `None` for unknown vertices.
    pub fn role_of(&self, id: VertexId) -> Option<NodeRole> {
        self.vertices.get(&id).copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges (each mirror pair counted once).
    pub fn edge_count(&self) -> usize {
        self.adj.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// `true` if an edge between `a` and `b` exists (either direction —
    /// they are mirrors).
    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.neighbors(a).iter().any(|&(nei, _)| nei == b)
    }

    /// All vertices as `(id, role)`, ascending by ID.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, NodeRole)> + '_ {
        self.vertices.iter().map(|(&id, &role)| (id, role))
    }

    /// All vertex IDs, ascending.
    pub fn vertex_ids(&self) -> Vec<VertexId> {
        self.vertices.keys().copied().collect()
    }

    /// Each undirected edge exactly once as `(src, dst, weight)` with
    /// `src < dst`, ordered by `(src, dst)`.
    pub fn edges(&self) -> Vec<(VertexId, VertexId, u32)> {
        let mut out = Vec::with_capacity(self.edge_count());
        for (&u, neighbors) in &self.adj {
            for &(v, w) in neighbors {
                if u < v {
                    out.push((u, v, w));
                }
            }
        }
        out.sort_unstable_by_key(|&(u, v, _)| (u, v));
        out
    }

    /// How many vertices carry each role.
    pub fn role_counts(&self) -> RoleCounts {
        let mut counts = RoleCounts::default();
        for &role in self.vertices.values() {
            match role {
                NodeRole::Storage  => counts.storage += 1,
                NodeRole::Recharge => counts.recharge += 1,
                NodeRole::Client   => counts.client += 1,
            }
        }
        counts
    }

    /// All vertex IDs with the given role, ascending.
    pub fn vertices_with_role(&self, role: NodeRole) -> Vec<VertexId> {
        self.vertices
            .iter()
            .filter(|&(_, &r)| r == role)
            .map(|(&id, _)| id)
            .collect()
    }

    // ── Invariants ────────────────────────────────────────────────────────

    /// Debug-build check that adjacency is a perfect mirror.
    pub(crate) fn debug_assert_symmetric(&self) {
        #[cfg(debug_assertions)]
        for (&u, neighbors) in &self.adj {
            for &(v, w) in neighbors {
                debug_assert!(
                    self.neighbors(v).iter().any(|&(back, bw)| back == u && bw == w),
                    "adjacency asymmetry: ({u}, {v}, {w}) has no mirror"
                );
            }
        }
    }
}

impl Default for NetworkGraph {
    fn default() -> Self {
        Self::new()
    }
}
