//! Connectivity-preserving random network generation.
//!
//! # Procedure
//!
//! 1. Assign roles by fixed proportions — 20% Storage, 20% Recharge
//!    (rounded down), the remainder Client — then shuffle the assignment.
//! 2. Build a random spanning tree over a shuffled vertex order: vertex *i*
//!    attaches to a uniformly random earlier vertex with a weight drawn
//!    uniformly from [1, 10].  Exactly n−1 edges, connectivity guaranteed.
//! 3. Add further random edges, rejecting self-loops and pairs that are
//!    already connected, until the undirected edge count reaches `m_edges`.
//!
//! The edge target is validated up front: a target below n−1 can never be
//! connected and a target above n(n−1)/2 can never be reached without
//! parallel edges, and either would leave step 3 spinning forever.

use dls_core::{NodeRole, SimRng, VertexId};
use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::network::NetworkGraph;

/// Weights are drawn uniformly from this range (energy cost per hop).
const WEIGHT_RANGE: std::ops::RangeInclusive<u32> = 1..=10;

impl NetworkGraph {
    /// Generate a random connected network with `n_nodes` vertices and
    /// exactly `m_edges` undirected edges.
    ///
    /// Deterministic for a given `rng` seed.  Fails with
    /// [`GraphError::NotEnoughEdges`] or [`GraphError::TooManyEdges`] when
    /// the edge target is infeasible.
    pub fn generate_random_connected(
        n_nodes: usize,
        m_edges: usize,
        rng: &mut SimRng,
    ) -> GraphResult<NetworkGraph> {
        if m_edges < n_nodes.saturating_sub(1) {
            return Err(GraphError::NotEnoughEdges { nodes: n_nodes, edges: m_edges });
        }
        if m_edges > n_nodes * n_nodes.saturating_sub(1) / 2 {
            return Err(GraphError::TooManyEdges { nodes: n_nodes, edges: m_edges });
        }

        let mut graph = NetworkGraph::new();

        // 1. Roles by proportion, shuffled across the ID range.
        let n_storage = n_nodes / 5;
        let n_recharge = n_nodes / 5;
        let mut roles = Vec::with_capacity(n_nodes);
        roles.extend(std::iter::repeat_n(NodeRole::Storage, n_storage));
        roles.extend(std::iter::repeat_n(NodeRole::Recharge, n_recharge));
        roles.extend(std::iter::repeat_n(NodeRole::Client, n_nodes - n_storage - n_recharge));
        rng.shuffle(&mut roles);

        for (i, &role) in roles.iter().enumerate() {
            graph.add_vertex(VertexId(i as u32), role)?;
        }

        // 2. Spanning tree over a shuffled vertex order.
        let mut order: Vec<VertexId> = graph.vertex_ids();
        rng.shuffle(&mut order);
        for i in 1..n_nodes {
            let a = order[i];
            let b = order[rng.gen_range(0..i)];
            let w = rng.gen_range(WEIGHT_RANGE);
            graph.add_edge(a, b, w)?;
        }

        // 3. Extra edges up to the target, rejecting duplicates.
        // Terminates because the target is at most n(n-1)/2.
        let mut current = graph.edge_count();
        while current < m_edges {
            let a = order[rng.gen_range(0..n_nodes)];
            let b = order[rng.gen_range(0..n_nodes)];
            if a == b || graph.has_edge(a, b) {
                continue;
            }
            let w = rng.gen_range(WEIGHT_RANGE);
            graph.add_edge(a, b, w)?;
            current += 1;
        }

        debug!(n_nodes, m_edges, "generated connected network");
        debug_assert_eq!(graph.edge_count(), m_edges);
        graph.debug_assert_symmetric();
        Ok(graph)
    }
}
