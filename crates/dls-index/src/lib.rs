//! `dls-index` — auxiliary keyed collections for the delivery simulation.
//!
//! Two purpose-built structures back the simulation's bookkeeping:
//!
//! | Module    | Contents                                                    |
//! |-----------|-------------------------------------------------------------|
//! | [`avl`]   | `AvlMap` — AVL-balanced ordered map (route frequency index) |
//! | [`store`] | `KeyedStore` — fixed-capacity bucketed hash map (entities)  |
//!
//! Both are deliberately small and single-owner: the simulation is
//! single-threaded and owns its collections exclusively, so neither
//! structure carries any internal synchronisation.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod avl;
pub mod store;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use avl::{AvlMap, Branch};
pub use store::KeyedStore;
