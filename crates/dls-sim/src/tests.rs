//! Unit tests for dls-sim.
//!
//! Scenario tests use a hand-built 4-vertex network; builder tests use
//! seeded random generation, so everything is deterministic.

#[cfg(test)]
mod helpers {
    use dls_core::{NodeRole, VertexId};
    use dls_graph::NetworkGraph;

    use crate::Simulation;

    /// 0:Storage —5— 1:Recharge —5— 2:Client, plus 1—20—3 and 0—3—3 with
    /// 3:Client.  Battery 6: 0→2 needs the recharge at 1; 0→3 is direct.
    pub fn scenario_graph() -> NetworkGraph {
        let mut g = NetworkGraph::new();
        g.add_vertex(VertexId(0), NodeRole::Storage).unwrap();
        g.add_vertex(VertexId(1), NodeRole::Recharge).unwrap();
        g.add_vertex(VertexId(2), NodeRole::Client).unwrap();
        g.add_vertex(VertexId(3), NodeRole::Client).unwrap();
        g.add_edge(VertexId(0), VertexId(1), 5).unwrap();
        g.add_edge(VertexId(1), VertexId(2), 5).unwrap();
        g.add_edge(VertexId(1), VertexId(3), 20).unwrap();
        g.add_edge(VertexId(0), VertexId(3), 3).unwrap();
        g
    }

    pub fn scenario_sim() -> Simulation {
        Simulation::with_network(scenario_graph(), 6)
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use dls_core::NodeRole;
    use dls_graph::GraphError;

    use crate::{SimError, SimulationBuilder};

    #[test]
    fn builds_clients_and_orders() {
        let sim = SimulationBuilder::new(15, 20, 10).seed(42).build().unwrap();

        let counts = sim.graph().role_counts();
        assert_eq!(counts.storage, 3);
        assert_eq!(counts.recharge, 3);
        assert_eq!(counts.client, 9);
        assert_eq!(sim.clients().len(), 9, "one client per Client-role vertex");

        let orders = sim.orders();
        assert_eq!(orders.len(), 10);
        for order in orders {
            assert!(order.is_pending());
            assert!((1..=5).contains(&order.priority));
            assert_eq!(sim.graph().role_of(order.origin), Some(NodeRole::Storage));
            assert_eq!(sim.graph().role_of(order.destination), Some(NodeRole::Client));
            assert_eq!(order.client_id.0, order.destination.0);
        }
    }

    #[test]
    fn same_seed_same_order_book() {
        let a = SimulationBuilder::new(15, 20, 10).seed(7).build().unwrap();
        let b = SimulationBuilder::new(15, 20, 10).seed(7).build().unwrap();
        let pairs = |sim: &crate::Simulation| {
            sim.orders()
                .iter()
                .map(|o| (o.origin, o.destination, o.priority))
                .collect::<Vec<_>>()
        };
        assert_eq!(pairs(&a), pairs(&b));
    }

    #[test]
    fn infeasible_edge_target_propagates() {
        let err = SimulationBuilder::new(10, 5, 0).build().unwrap_err();
        assert!(matches!(err, SimError::Graph(GraphError::NotEnoughEdges { .. })));
    }

    #[test]
    fn orders_require_storage_vertices() {
        // 4 nodes → 4/5 = 0 storage vertices; placing orders is impossible.
        let err = SimulationBuilder::new(4, 3, 1).build().unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
        // But a network without orders is fine.
        let sim = SimulationBuilder::new(4, 3, 0).build().unwrap();
        assert!(sim.orders().is_empty());
    }
}

// ── Route computation & frequency tracking ────────────────────────────────────

#[cfg(test)]
mod routing {
    use dls_core::VertexId;

    use crate::SimError;

    #[test]
    fn computes_cheapest_feasible_route() {
        let mut sim = super::helpers::scenario_sim();
        let route = sim.compute_route(VertexId(0), VertexId(2)).unwrap();
        assert_eq!(route.path, vec![VertexId(0), VertexId(1), VertexId(2)]);
        assert_eq!(route.cost, 10);
    }

    #[test]
    fn repeat_routes_increment_not_duplicate() {
        let mut sim = super::helpers::scenario_sim();
        sim.compute_route(VertexId(0), VertexId(2)).unwrap();
        sim.compute_route(VertexId(0), VertexId(2)).unwrap();
        sim.compute_route(VertexId(0), VertexId(3)).unwrap();

        // Ascending signature order from the AVL inorder traversal.
        assert_eq!(
            sim.frequent_routes(),
            vec![("0→1→2".to_string(), 2), ("0→3".to_string(), 1)]
        );
    }

    #[test]
    fn infeasible_route_records_nothing() {
        let mut sim = crate::Simulation::with_network(super::helpers::scenario_graph(), 4);
        let err = sim.compute_route(VertexId(0), VertexId(2)).unwrap_err();
        assert!(matches!(
            err,
            SimError::NoFeasiblePath { origin, destination }
                if origin == VertexId(0) && destination == VertexId(2)
        ));
        assert!(sim.frequent_routes().is_empty());
    }

    #[test]
    fn unknown_vertex_is_a_graph_error() {
        let mut sim = super::helpers::scenario_sim();
        assert!(matches!(
            sim.compute_route(VertexId(0), VertexId(42)),
            Err(SimError::Graph(_))
        ));
    }

    #[test]
    fn route_tree_export_reflects_signatures() {
        let mut sim = super::helpers::scenario_sim();
        sim.compute_route(VertexId(0), VertexId(2)).unwrap();
        sim.compute_route(VertexId(0), VertexId(3)).unwrap();
        // Two signatures → one parent→child edge in the AVL.
        assert_eq!(sim.route_tree_edges().len(), 1);
    }
}

// ── Delivery lifecycle ────────────────────────────────────────────────────────

#[cfg(test)]
mod delivery {
    use dls_core::{ClientId, OrderId, Tick, VertexId};

    use crate::{OrderStatus, SimError};

    #[test]
    fn process_order_completes_and_tallies() {
        let mut sim = super::helpers::scenario_sim();
        let id = sim.create_order(VertexId(2), VertexId(0), 3).unwrap();

        let route = sim.process_order(id).unwrap();
        assert_eq!(route.cost, 10);

        let order = sim.order(id).unwrap();
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.cost, Some(10));
        assert_eq!(order.delivered_at, Some(Tick(0)));

        let client = sim.client(ClientId(2)).unwrap();
        assert_eq!(client.total_orders, 1);
        assert_eq!(client.name, "Client-2");

        let stats = sim.statistics();
        assert_eq!(stats.origin_freq, vec![(VertexId(0), 1)]);
        assert_eq!(stats.dest_freq, vec![(VertexId(2), 1)]);
        assert_eq!(sim.current_tick(), Tick(1), "clock advances per delivery");
    }

    #[test]
    fn completed_orders_cannot_be_reprocessed() {
        let mut sim = super::helpers::scenario_sim();
        let id = sim.create_order(VertexId(3), VertexId(0), 1).unwrap();
        sim.process_order(id).unwrap();
        assert!(matches!(
            sim.process_order(id),
            Err(SimError::OrderNotPending { status: OrderStatus::Completed, .. })
        ));
    }

    #[test]
    fn unknown_order_and_client_lookups() {
        let mut sim = super::helpers::scenario_sim();
        assert!(matches!(
            sim.process_order(OrderId(99)),
            Err(SimError::UnknownOrder(id)) if id == OrderId(99)
        ));
        let route = sim.compute_route(VertexId(0), VertexId(3)).unwrap();
        assert!(matches!(
            sim.finalize_delivery(OrderId(99), &route),
            Err(SimError::UnknownOrder(_))
        ));
        assert!(sim.client(ClientId(0)).is_none(), "vertex 0 is storage, not a client");
    }

    #[test]
    fn create_order_allocates_sequential_ids() {
        let mut sim = super::helpers::scenario_sim();
        assert_eq!(sim.create_order(VertexId(2), VertexId(0), 3).unwrap(), OrderId(0));
        assert_eq!(sim.create_order(VertexId(3), VertexId(0), 9).unwrap(), OrderId(1));
        // Priority clamped into [1, 5].
        assert_eq!(sim.order(OrderId(1)).unwrap().priority, 5);
        assert_eq!(sim.orders().len(), 2);
    }

    #[test]
    fn create_order_validates_roles() {
        let mut sim = super::helpers::scenario_sim();
        // Destination must be a Client-role vertex.
        assert!(matches!(
            sim.create_order(VertexId(1), VertexId(0), 3),
            Err(SimError::Config(_))
        ));
        // Origin must be a Storage-role vertex.
        assert!(matches!(
            sim.create_order(VertexId(2), VertexId(3), 3),
            Err(SimError::Config(_))
        ));
        // Unknown vertices surface the graph error.
        assert!(matches!(
            sim.create_order(VertexId(42), VertexId(0), 3),
            Err(SimError::Graph(_))
        ));
    }

    #[test]
    fn accessors_sorted_by_id() {
        let mut sim = super::helpers::scenario_sim();
        sim.create_order(VertexId(3), VertexId(0), 2).unwrap();
        sim.create_order(VertexId(2), VertexId(0), 4).unwrap();

        let order_ids: Vec<_> = sim.orders().iter().map(|o| o.id).collect();
        assert_eq!(order_ids, vec![OrderId(0), OrderId(1)]);
        let client_ids: Vec<_> = sim.clients().iter().map(|c| c.id).collect();
        assert_eq!(client_ids, vec![ClientId(2), ClientId(3)]);
    }
}
