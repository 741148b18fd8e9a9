//! `dls-sim` — simulation orchestrator for the dls delivery network.
//!
//! Ties the network graph, the route frequency index, and the entity
//! stores into one routing service:
//!
//! ```text
//! compute_route(origin, destination)
//!   → graph.find_path_with_battery        (cheapest feasible route)
//!   → route_index increment-on-search     (signature → count)
//!
//! finalize_delivery(order, route)
//!   → order marked completed (cost, tick)
//!   → client delivery counter bumped
//!   → origin/destination visit tallies bumped
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                        |
//! |--------------|-------------------------------------------------|
//! | [`entities`] | `Order`, `OrderStatus`, `Client`                |
//! | [`builder`]  | `SimulationBuilder`                             |
//! | [`sim`]      | `Simulation`, `NetworkStats`                    |
//! | [`error`]    | `SimError`, `SimResult<T>`                      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dls_sim::SimulationBuilder;
//!
//! let mut sim = SimulationBuilder::new(15, 20, 10).seed(42).build()?;
//! for order in sim.orders().iter().map(|o| o.id).collect::<Vec<_>>() {
//!     match sim.process_order(order) {
//!         Ok(route) => println!("{order}: {route}"),
//!         Err(e) => println!("{order}: {e}"),
//!     }
//! }
//! ```

pub mod builder;
pub mod entities;
pub mod error;
pub mod sim;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimulationBuilder;
pub use entities::{Client, Order, OrderStatus};
pub use error::{SimError, SimResult};
pub use sim::{NetworkStats, Simulation};
