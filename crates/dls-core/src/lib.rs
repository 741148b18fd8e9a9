//! `dls-core` — foundational types for the `dls` delivery-network simulation.
//!
//! This crate is a dependency of every other `dls-*` crate.  It intentionally
//! has no `dls-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                  |
//! |----------|-------------------------------------------|
//! | [`ids`]  | `VertexId`, `ClientId`, `OrderId`         |
//! | [`role`] | `NodeRole` enum                           |
//! | [`rng`]  | `SimRng` (deterministic simulation RNG)   |
//! | [`time`] | `Tick`, `SimClock`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod rng;
pub mod role;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{ClientId, OrderId, VertexId};
pub use rng::SimRng;
pub use role::NodeRole;
pub use time::{SimClock, Tick};
