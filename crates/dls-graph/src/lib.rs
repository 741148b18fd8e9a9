//! `dls-graph` — the delivery network graph and its routing algorithms.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`network`] | `NetworkGraph` (role-tagged vertices, mirrored adjacency)  |
//! | [`generate`]| Connectivity-preserving random generation                  |
//! | [`battery`] | `Route`, battery-constrained optimal path search           |
//! | [`shortest`]| Dijkstra (`ShortestPaths`) and Floyd–Warshall all-pairs    |
//! | [`mst`]     | Kruskal minimum spanning tree, `UnionFind`                 |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.  |

pub mod battery;
pub mod error;
pub mod generate;
pub mod mst;
pub mod network;
pub mod shortest;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use battery::Route;
pub use error::{GraphError, GraphResult};
pub use mst::UnionFind;
pub use network::{NetworkGraph, RoleCounts};
pub use shortest::ShortestPaths;
