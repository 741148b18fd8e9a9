//! The `Simulation` routing service.
//!
//! Owns the network graph, the entity stores, the route frequency index,
//! and the visit tallies, and exposes the operation set adapters call into:
//! route computation, delivery finalization, order management, and the
//! read accessors for dashboards and reports.
//!
//! # Concurrency
//!
//! One `Simulation` instance owns all of this state exclusively and runs
//! single-threaded.  None of the underlying structures are internally
//! synchronized; a server wrapping this core must serialize access to the
//! whole instance (one mutex or actor per simulation).

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use dls_core::{ClientId, NodeRole, OrderId, SimClock, Tick, VertexId};
use dls_graph::{GraphError, NetworkGraph, RoleCounts, Route};
use dls_index::{AvlMap, Branch, KeyedStore};

use crate::entities::{Client, Order};
use crate::error::{SimError, SimResult};

// ── NetworkStats ──────────────────────────────────────────────────────────────

/// Aggregate statistics for reports: role distribution and per-vertex
/// origin/destination visit tallies (sorted by vertex ID for stable output).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkStats {
    pub role_counts: RoleCounts,
    pub origin_freq: Vec<(VertexId, u64)>,
    pub dest_freq:   Vec<(VertexId, u64)>,
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// A delivery-network simulation instance.
///
/// Create via [`SimulationBuilder`][crate::SimulationBuilder] for a random
/// network, or [`with_network`](Self::with_network) for a hand-built one.
#[derive(Debug)]
pub struct Simulation {
    graph:       NetworkGraph,
    clients:     KeyedStore<ClientId, Client>,
    orders:      KeyedStore<OrderId, Order>,
    /// Route signature → times computed.  AVL keeps signatures ordered for
    /// the ranked-routes report.
    route_index: AvlMap<String, u64>,
    origin_freq: FxHashMap<VertexId, u64>,
    dest_freq:   FxHashMap<VertexId, u64>,
    max_battery: u32,
    clock:       SimClock,
}

impl Simulation {
    pub(crate) fn from_parts(
        graph: NetworkGraph,
        clients: KeyedStore<ClientId, Client>,
        orders: KeyedStore<OrderId, Order>,
        max_battery: u32,
        clock: SimClock,
    ) -> Self {
        Simulation {
            graph,
            clients,
            orders,
            route_index: AvlMap::new(),
            origin_freq: FxHashMap::default(),
            dest_freq: FxHashMap::default(),
            max_battery,
            clock,
        }
    }

    /// Wrap a hand-built network: one client per Client-role vertex, no
    /// initial orders.  Useful for tests and scripted scenarios.
    pub fn with_network(graph: NetworkGraph, max_battery: u32) -> Self {
        let mut clients = KeyedStore::new();
        for vid in graph.vertices_with_role(NodeRole::Client) {
            let cid = ClientId(vid.0);
            clients.put(cid, Client::new(cid));
        }
        Simulation::from_parts(graph, clients, KeyedStore::new(), max_battery, SimClock::default())
    }

    // ── Routing ───────────────────────────────────────────────────────────

    /// Compute the cheapest battery-feasible route and record its
    /// signature in the frequency index.
    ///
    /// The index update is increment-on-search: an existing signature's
    /// counter is bumped in place, a new one is inserted with count 1.
    /// Nothing is recorded when no route exists.
    pub fn compute_route(&mut self, origin: VertexId, destination: VertexId) -> SimResult<Route> {
        let found = self
            .graph
            .find_path_with_battery(origin, destination, self.max_battery)?;
        let Some(route) = found else {
            return Err(SimError::NoFeasiblePath { origin, destination });
        };

        let signature = route.signature();
        match self.route_index.get_mut(&signature) {
            Some(count) => *count += 1,
            None => self.route_index.insert(signature, 1),
        }

        debug!(%route, "route computed");
        Ok(route)
    }

    /// Mark `order_id` delivered over `route`: stamp status, cost, and
    /// delivery tick; count the delivery on the owning client; bump the
    /// origin/destination visit tallies; advance the clock one tick.
    pub fn finalize_delivery(&mut self, order_id: OrderId, route: &Route) -> SimResult<()> {
        let tick = self.clock.current_tick;

        let order = self
            .orders
            .get_mut(order_id)
            .ok_or(SimError::UnknownOrder(order_id))?;
        order.mark_completed(route.cost, tick);
        let (client_id, origin, destination) = (order.client_id, order.origin, order.destination);

        let client = self
            .clients
            .get_mut(client_id)
            .ok_or(SimError::UnknownClient(client_id))?;
        client.record_order();

        *self.origin_freq.entry(origin).or_insert(0) += 1;
        *self.dest_freq.entry(destination).or_insert(0) += 1;
        self.clock.advance();

        info!(order = %order_id, cost = route.cost, "delivery completed");
        Ok(())
    }

    /// Route and finalize a pending order in one step.
    ///
    /// Fails with [`SimError::OrderNotPending`] if the order was already
    /// delivered.
    pub fn process_order(&mut self, order_id: OrderId) -> SimResult<Route> {
        let order = self
            .orders
            .get(order_id)
            .ok_or(SimError::UnknownOrder(order_id))?;
        if !order.is_pending() {
            return Err(SimError::OrderNotPending { id: order_id, status: order.status });
        }
        let (origin, destination) = (order.origin, order.destination);

        let route = self.compute_route(origin, destination)?;
        self.finalize_delivery(order_id, &route)?;
        Ok(route)
    }

    // ── Order management ──────────────────────────────────────────────────

    /// Create a new pending order for the client at `client_vertex`,
    /// originating from the storage vertex `origin`.
    ///
    /// IDs are allocated as max existing + 1.  Priority is clamped to
    /// [1, 5].
    pub fn create_order(
        &mut self,
        client_vertex: VertexId,
        origin: VertexId,
        priority: u8,
    ) -> SimResult<OrderId> {
        match self.graph.role_of(origin) {
            Some(NodeRole::Storage) => {}
            Some(role) => {
                return Err(SimError::Config(format!(
                    "order origin {origin} is a {role} vertex, not storage"
                )));
            }
            None => return Err(SimError::Graph(GraphError::UnknownVertex(origin))),
        }
        match self.graph.role_of(client_vertex) {
            Some(NodeRole::Client) => {}
            Some(role) => {
                return Err(SimError::Config(format!(
                    "order destination {client_vertex} is a {role} vertex, not a client"
                )));
            }
            None => return Err(SimError::Graph(GraphError::UnknownVertex(client_vertex))),
        }

        let client_id = ClientId(client_vertex.0);
        if !self.clients.exists(client_id) {
            return Err(SimError::UnknownClient(client_id));
        }

        let next = self
            .orders
            .keys()
            .into_iter()
            .map(|id| id.0)
            .max()
            .map_or(0, |m| m + 1);
        let id = OrderId(next);
        self.orders.put(
            id,
            Order::new(id, client_id, origin, client_vertex, priority.clamp(1, 5), self.clock.current_tick),
        );
        Ok(id)
    }

    // ── Read accessors (adapter boundary) ─────────────────────────────────

    pub fn graph(&self) -> &NetworkGraph {
        &self.graph
    }

    pub fn max_battery(&self) -> u32 {
        self.max_battery
    }

    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn client(&self, id: ClientId) -> Option<&Client> {
        self.clients.get(id)
    }

    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(id)
    }

    /// All clients, ascending by ID.
    pub fn clients(&self) -> Vec<&Client> {
        let mut keys = self.clients.keys();
        keys.sort_unstable();
        keys.into_iter().filter_map(|k| self.clients.get(k)).collect()
    }

    /// All orders, ascending by ID.
    pub fn orders(&self) -> Vec<&Order> {
        let mut keys = self.orders.keys();
        keys.sort_unstable();
        keys.into_iter().filter_map(|k| self.orders.get(k)).collect()
    }

    /// `(signature, count)` pairs in ascending signature order.  Callers
    /// wanting a by-frequency ranking sort these themselves.
    pub fn frequent_routes(&self) -> Vec<(String, u64)> {
        self.route_index
            .inorder()
            .into_iter()
            .map(|(k, &v)| (k.clone(), v))
            .collect()
    }

    /// The frequency index's parent→child edges, for tree visualization.
    pub fn route_tree_edges(&self) -> Vec<(String, String, Branch)> {
        self.route_index.export_edges()
    }

    /// Aggregate role counts and visit tallies.
    pub fn statistics(&self) -> NetworkStats {
        let mut origin_freq: Vec<(VertexId, u64)> =
            self.origin_freq.iter().map(|(&v, &c)| (v, c)).collect();
        let mut dest_freq: Vec<(VertexId, u64)> =
            self.dest_freq.iter().map(|(&v, &c)| (v, c)).collect();
        origin_freq.sort_unstable_by_key(|&(v, _)| v);
        dest_freq.sort_unstable_by_key(|&(v, _)| v);

        NetworkStats {
            role_counts: self.graph.role_counts(),
            origin_freq,
            dest_freq,
        }
    }
}
