//! Battery-constrained optimal path search.
//!
//! # Search semantics
//!
//! Exhaustive depth-first enumeration of simple paths (the visited set
//! prevents cycles) tracking the remaining battery.  Traversing an edge of
//! weight `w` consumes `w`; a branch dies when `w` exceeds the remaining
//! charge.  Arriving at a Recharge vertex resets the remaining battery to
//! the full budget — a full reset, not a top-up.  The lowest-total-cost
//! path found so far is retained and branches whose accumulated cost
//! already meets or exceeds it are pruned.
//!
//! # Cost
//!
//! Worst case is exponential in path length (simple-path enumeration).
//! This is the dominant cost center of the whole engine; it is accepted
//! because the exhaustiveness is what guarantees the returned route is the
//! *cheapest* feasible one, and simulation networks are small.  A
//! first-feasible greedy search would be cheaper but loses that guarantee.

use rustc_hash::FxHashSet;

use dls_core::VertexId;

use crate::error::{GraphError, GraphResult};
use crate::network::NetworkGraph;

/// Separator used when canonicalizing a path into a route signature.
const SIGNATURE_SEPARATOR: &str = "→";

// ── Route ─────────────────────────────────────────────────────────────────────

/// An ordered path through the network and its total edge cost.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Vertex IDs from origin to destination inclusive.
    pub path: Vec<VertexId>,
    /// Sum of traversed edge weights.
    pub cost: u32,
}

impl Route {
    /// Canonical string form: vertex ids joined by `→`.  Used as the
    /// ordered-map key for frequency tracking.
    pub fn signature(&self) -> String {
        self.path
            .iter()
            .map(|id| id.0.to_string())
            .collect::<Vec<_>>()
            .join(SIGNATURE_SEPARATOR)
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (cost {})", self.signature(), self.cost)
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

impl NetworkGraph {
    /// Find the cheapest battery-feasible path from `origin` to
    /// `destination`.
    ///
    /// Returns `Ok(None)` when no simple path fits the battery budget —
    /// the caller decides whether that is an error.  Unknown endpoints are
    /// construction mistakes and fail with [`GraphError::UnknownVertex`].
    pub fn find_path_with_battery(
        &self,
        origin: VertexId,
        destination: VertexId,
        max_battery: u32,
    ) -> GraphResult<Option<Route>> {
        if !self.contains(origin) {
            return Err(GraphError::UnknownVertex(origin));
        }
        if !self.contains(destination) {
            return Err(GraphError::UnknownVertex(destination));
        }

        let mut search = BatterySearch {
            graph: self,
            destination,
            max_battery,
            best: None,
        };
        let mut visited = FxHashSet::default();
        let mut path = vec![origin];
        search.dfs(origin, max_battery, 0, &mut path, &mut visited);
        Ok(search.best)
    }
}

/// Scratch state for one search call.  The visited set is owned by the call
/// and discarded with it; nothing persists on the graph between searches.
struct BatterySearch<'g> {
    graph:       &'g NetworkGraph,
    destination: VertexId,
    max_battery: u32,
    best:        Option<Route>,
}

impl BatterySearch<'_> {
    fn dfs(
        &mut self,
        current: VertexId,
        battery: u32,
        cost: u32,
        path: &mut Vec<VertexId>,
        visited: &mut FxHashSet<VertexId>,
    ) {
        // Prune: this branch can no longer beat the best route found.
        if let Some(best) = &self.best {
            if cost >= best.cost {
                return;
            }
        }
        if current == self.destination {
            self.best = Some(Route { path: path.clone(), cost });
            return;
        }

        visited.insert(current);

        // Full reset at a recharge point, regardless of remaining charge.
        let battery = match self.graph.role_of(current) {
            Some(role) if role.is_recharge() => self.max_battery,
            _ => battery,
        };

        for &(neighbor, w) in self.graph.neighbors(current) {
            if battery >= w && !visited.contains(&neighbor) {
                path.push(neighbor);
                self.dfs(neighbor, battery - w, cost + w, path, visited);
                path.pop();
            }
        }

        // Unmark on backtrack so other branches may pass through here.
        visited.remove(&current);
    }
}
