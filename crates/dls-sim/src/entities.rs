//! Delivery-domain entities: orders and clients.
//!
//! Plain records owned by the simulation's `KeyedStore`s and mutated in
//! place — never duplicated.  Timestamps are simulation `Tick`s; adapters
//! convert to wall time when rendering.

use dls_core::{ClientId, OrderId, Tick, VertexId};

// ── OrderStatus ───────────────────────────────────────────────────────────────

/// Lifecycle state of a delivery order.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderStatus {
    /// Created, not yet delivered.
    #[default]
    Pending,
    /// Delivered; cost and delivery tick are stamped.
    Completed,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending   => "pending",
            OrderStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Order ─────────────────────────────────────────────────────────────────────

/// A delivery order from a storage vertex to a client vertex.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    pub id:          OrderId,
    pub client_id:   ClientId,
    pub origin:      VertexId,
    pub destination: VertexId,
    pub status:      OrderStatus,
    /// 1 (lowest) to 5 (highest).
    pub priority:    u8,
    pub created_at:  Tick,
    /// Stamped on completion.
    pub delivered_at: Option<Tick>,
    /// Route cost paid on completion.
    pub cost:        Option<u32>,
}

impl Order {
    pub fn new(
        id: OrderId,
        client_id: ClientId,
        origin: VertexId,
        destination: VertexId,
        priority: u8,
        created_at: Tick,
    ) -> Self {
        Order {
            id,
            client_id,
            origin,
            destination,
            status: OrderStatus::Pending,
            priority,
            created_at,
            delivered_at: None,
            cost: None,
        }
    }

    /// Mark delivered, stamping the cost and the delivery tick.
    pub fn mark_completed(&mut self, cost: u32, tick: Tick) {
        self.status = OrderStatus::Completed;
        self.delivered_at = Some(tick);
        self.cost = Some(cost);
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == OrderStatus::Pending
    }
}

// ── Client ────────────────────────────────────────────────────────────────────

/// A client entity, one per Client-role vertex.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Client {
    pub id:           ClientId,
    pub name:         String,
    /// Completed deliveries to this client.
    pub total_orders: u32,
}

impl Client {
    pub fn new(id: ClientId) -> Self {
        Client {
            id,
            name: format!("Client-{}", id.0),
            total_orders: 0,
        }
    }

    /// Count one completed delivery.
    pub fn record_order(&mut self) {
        self.total_orders += 1;
    }
}
