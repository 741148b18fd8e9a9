//! Fluent builder for constructing a [`Simulation`].

use dls_core::{ClientId, NodeRole, OrderId, SimClock, SimRng, VertexId};
use dls_graph::NetworkGraph;
use dls_index::KeyedStore;
use tracing::info;

use crate::entities::{Client, Order};
use crate::error::{SimError, SimResult};
use crate::sim::Simulation;

/// Default battery budget per route.
const DEFAULT_MAX_BATTERY: u32 = 50;

/// Fluent builder for [`Simulation`].
///
/// # Required inputs
///
/// Network and order-book sizes, via [`new`](Self::new).
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default |
/// |------------------|---------|
/// | `.max_battery(b)`| 50      |
/// | `.seed(s)`       | 0       |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimulationBuilder::new(15, 20, 10).seed(42).build()?;
/// let route = sim.process_order(OrderId(0))?;
/// ```
pub struct SimulationBuilder {
    n_nodes:     usize,
    m_edges:     usize,
    n_orders:    usize,
    max_battery: u32,
    seed:        u64,
}

impl SimulationBuilder {
    /// Create a builder for a network of `n_nodes` vertices and `m_edges`
    /// undirected edges, seeded with `n_orders` pending orders.
    pub fn new(n_nodes: usize, m_edges: usize, n_orders: usize) -> Self {
        SimulationBuilder {
            n_nodes,
            m_edges,
            n_orders,
            max_battery: DEFAULT_MAX_BATTERY,
            seed: 0,
        }
    }

    /// Battery budget applied to every route computation.
    pub fn max_battery(mut self, max_battery: u32) -> Self {
        self.max_battery = max_battery;
        self
    }

    /// Master RNG seed.  The same seed always produces the identical
    /// network and order book.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generate the network, create one client per Client-role vertex, and
    /// place the initial pending orders.
    ///
    /// Fails with the graph's edge-target errors for infeasible sizes, and
    /// with [`SimError::Config`] when orders are requested but the network
    /// has no Storage or no Client vertices to carry them.
    pub fn build(self) -> SimResult<Simulation> {
        let mut rng = SimRng::new(self.seed);
        let graph = NetworkGraph::generate_random_connected(self.n_nodes, self.m_edges, &mut rng)?;

        let storage_nodes = graph.vertices_with_role(NodeRole::Storage);
        let client_nodes = graph.vertices_with_role(NodeRole::Client);

        // One client entity per Client-role vertex, sharing its number.
        let mut clients = KeyedStore::new();
        for &vid in &client_nodes {
            let cid = ClientId(vid.0);
            clients.put(cid, Client::new(cid));
        }

        let clock = SimClock::default();
        let mut orders = KeyedStore::new();
        if self.n_orders > 0 {
            if storage_nodes.is_empty() {
                return Err(SimError::Config(format!(
                    "{} nodes yield no storage vertices to originate orders",
                    self.n_nodes
                )));
            }
            if client_nodes.is_empty() {
                return Err(SimError::Config(format!(
                    "{} nodes yield no client vertices to receive orders",
                    self.n_nodes
                )));
            }
        }
        for i in 0..self.n_orders {
            let origin = pick(&mut rng, &storage_nodes)?;
            let destination = pick(&mut rng, &client_nodes)?;
            let priority = rng.gen_range(1..=5u8);
            let id = OrderId(i as u32);
            orders.put(
                id,
                Order::new(id, ClientId(destination.0), origin, destination, priority, clock.current_tick),
            );
        }

        info!(
            nodes = self.n_nodes,
            edges = self.m_edges,
            orders = self.n_orders,
            seed = self.seed,
            "simulation initialized"
        );

        Ok(Simulation::from_parts(graph, clients, orders, self.max_battery, clock))
    }
}

fn pick(rng: &mut SimRng, pool: &[VertexId]) -> SimResult<VertexId> {
    rng.choose(pool)
        .copied()
        .ok_or_else(|| SimError::Config("empty vertex pool".into()))
}
