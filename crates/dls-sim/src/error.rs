//! Simulation-level error type.

use dls_core::{ClientId, OrderId, VertexId};
use dls_graph::GraphError;
use thiserror::Error;

use crate::entities::OrderStatus;

/// Errors produced by `dls-sim`.
///
/// `NoFeasiblePath` is a normal negative result — no route exists under the
/// battery budget — and callers are expected to surface it, not panic.
/// `UnknownOrder`/`UnknownClient` are lookup misses the adapter layer maps
/// to "not found".
#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("no battery-feasible route from {origin} to {destination}")]
    NoFeasiblePath {
        origin:      VertexId,
        destination: VertexId,
    },

    #[error("order {0} does not exist")]
    UnknownOrder(OrderId),

    #[error("client {0} does not exist")]
    UnknownClient(ClientId),

    #[error("order {id} is {status}, expected pending")]
    OrderNotPending { id: OrderId, status: OrderStatus },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type SimResult<T> = Result<T, SimError>;
